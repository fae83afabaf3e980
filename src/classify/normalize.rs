//! Localization prefix stripping for archive paths.

/// Region folders the game may load localized copies of an archive from,
/// in match priority order.
pub const DEFAULT_LOCALIZE_PREFIXES: [&str; 14] = [
    "/LocalizeData/JpJapanese",
    "/LocalizeData/UsEnglish",
    "/LocalizeData/UsSpanish",
    "/LocalizeData/UsFrench",
    "/LocalizeData/EuEnglish",
    "/LocalizeData/EuSpanish",
    "/LocalizeData/EuFrench",
    "/LocalizeData/EuGerman",
    "/LocalizeData/EuItalian",
    "/LocalizeData/EuDutch",
    "/LocalizeData/CnSimpChinese",
    "/LocalizeData/CnTradChinese",
    "/LocalizeData/KrKorean",
    "/LocalizeData/AsTradChinese",
];

/// Collapses locale-specific archive paths onto one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathNormalizer {
    prefixes: Vec<String>,
}

impl Default for PathNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALIZE_PREFIXES.iter().map(|p| p.to_string()))
    }
}

impl PathNormalizer {
    pub fn new(prefixes: impl IntoIterator<Item = String>) -> Self {
        Self {
            prefixes: prefixes.into_iter().collect(),
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Strip the first matching localization prefix from `path`.
    ///
    /// ```
    /// use useres::classify::normalize::PathNormalizer;
    ///
    /// let normalizer = PathNormalizer::default();
    /// assert_eq!(normalizer.normalize("/LocalizeData/UsEnglish/Map/Sky"), "/Map/Sky");
    /// assert_eq!(normalizer.normalize("/Map/Sky"), "/Map/Sky");
    /// ```
    pub fn normalize<'a>(&self, path: &'a str) -> &'a str {
        self.prefixes
            .iter()
            .find_map(|prefix| path.strip_prefix(prefix.as_str()))
            .unwrap_or(path)
    }
}
