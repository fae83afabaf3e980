//! Trace line parsing.
//!
//! A trace line references a resource when it contains one of the two marker
//! tokens. The payload is everything after the first occurrence of the
//! marker up to the end of the line. Lines without a marker are not errors.

use crate::core::ResourceKind;
use serde::{Deserialize, Serialize};

/// Marker tokens that introduce a resource reference in a trace line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub archive: String,
    pub sound: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            archive: "ARCHIVE ".to_string(),
            sound: "SOUND ".to_string(),
        }
    }
}

impl Markers {
    fn marker(&self, kind: ResourceKind) -> &str {
        match kind {
            ResourceKind::Archive => &self.archive,
            ResourceKind::Sound => &self.sound,
        }
    }
}

/// A raw, not yet normalized, resource reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceReference<'a> {
    pub kind: ResourceKind,
    pub raw: &'a str,
}

/// Extract the resource reference carried by `line`, if any.
///
/// The archive marker takes priority: when it is present the sound marker
/// is not searched for. The marker may appear anywhere in the line, so log
/// metadata in front of it is tolerated.
///
/// ```
/// use useres::classify::parser::{parse_line, Markers};
/// use useres::core::ResourceKind;
///
/// let markers = Markers::default();
/// let reference = parse_line("[12:00] ARCHIVE /ObjectData/Coin.arc", &markers).unwrap();
/// assert_eq!(reference.kind, ResourceKind::Archive);
/// assert_eq!(reference.raw, "/ObjectData/Coin.arc");
/// assert!(parse_line("boot complete", &markers).is_none());
/// ```
pub fn parse_line<'a>(line: &'a str, markers: &Markers) -> Option<TraceReference<'a>> {
    ResourceKind::ALL.into_iter().find_map(|kind| {
        let marker = markers.marker(kind);
        line.find(marker).map(|at| TraceReference {
            kind,
            raw: &line[at + marker.len()..],
        })
    })
}

/// Split trace text into lines.
///
/// `\n`, `\r\n` and a lone `\r` all end a line, and a terminator at the
/// end of the text does not start an extra empty line.
pub fn trace_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(at) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..at];
        let terminator = if rest[at..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[at + terminator..];
        Some(line)
    })
}
