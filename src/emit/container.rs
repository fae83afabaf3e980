//! Default container packager.
//!
//! The tree is written as a deterministic ustar stream: folders first as
//! directory entries, then files, with fixed ownership and a zero mtime.
//! The stream is optionally zstd-compressed and persisted atomically
//! through a temporary file next to the destination.

use super::traits::{ArchivePackager, ArchiveTree, Compression};
use crate::errors::{Error, Result};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

const TAR_BLOCK_LEN: usize = 512;
const TAR_NAME_LEN: usize = 100;
const ZSTD_MAGIC: [u8; 4] = [0x28, 0xb5, 0x2f, 0xfd];
const ZSTD_LEVEL: i32 = 19;

/// Packs [`ArchiveTree`]s into ustar containers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TarPackager;

impl TarPackager {
    pub fn new() -> Self {
        Self
    }

    /// Encode `tree` into container bytes without touching storage.
    pub fn encode(&self, tree: &ArchiveTree, compression: Compression) -> io::Result<Vec<u8>> {
        let tar = build_tar(tree)?;
        match compression {
            Compression::None => Ok(tar),
            Compression::Zstd => zstd::stream::encode_all(tar.as_slice(), ZSTD_LEVEL),
        }
    }
}

impl ArchivePackager for TarPackager {
    fn pack(&self, tree: &ArchiveTree, dest: &Path, compression: Compression) -> Result<()> {
        let bytes = self
            .encode(tree, compression)
            .map_err(|e| Error::packaging(dest, e))?;
        write_atomic(dest, &bytes).map_err(|e| Error::packaging(dest, e))?;
        debug!(
            path = %dest.display(),
            bytes = bytes.len(),
            files = tree.files().len(),
            "Container written"
        );
        Ok(())
    }
}

fn write_atomic(dest: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(dest).map_err(|e| e.error)?;
    Ok(())
}

fn build_tar(tree: &ArchiveTree) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut hdr = [0u8; TAR_BLOCK_LEN];

    for folder in tree.folders() {
        let name = format!("{folder}/");
        write_header(&mut hdr, name.as_bytes(), 0, b'5', b"0000755\0")?;
        out.extend_from_slice(&hdr);
    }

    for file in tree.files() {
        let size = file.data.len() as u64;
        write_header(&mut hdr, file.path.as_bytes(), size, b'0', b"0000644\0")?;
        out.extend_from_slice(&hdr);
        out.extend_from_slice(&file.data);
        out.resize(out.len() + tar_pad(file.data.len()), 0);
    }

    out.extend_from_slice(&[0u8; TAR_BLOCK_LEN]);
    out.extend_from_slice(&[0u8; TAR_BLOCK_LEN]);
    Ok(out)
}

fn tar_pad(len: usize) -> usize {
    (TAR_BLOCK_LEN - len % TAR_BLOCK_LEN) % TAR_BLOCK_LEN
}

fn write_header(
    buf: &mut [u8; TAR_BLOCK_LEN],
    name: &[u8],
    size: u64,
    typeflag: u8,
    mode: &[u8; 8],
) -> io::Result<()> {
    if name.len() > TAR_NAME_LEN {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("entry name longer than {TAR_NAME_LEN} bytes"),
        ));
    }

    buf.fill(0);
    buf[..name.len()].copy_from_slice(name);
    buf[100..108].copy_from_slice(mode);
    buf[108..116].copy_from_slice(b"0000000\0");
    buf[116..124].copy_from_slice(b"0000000\0");

    let mut size_field = [b'0'; 11];
    let mut v = size;
    for digit in size_field.iter_mut().rev() {
        *digit = b'0' + (v & 7) as u8;
        v >>= 3;
    }
    buf[124..135].copy_from_slice(&size_field);
    buf[136..148].copy_from_slice(b"00000000000\0");
    buf[148..156].fill(b' ');
    buf[156] = typeflag;
    buf[257..263].copy_from_slice(b"ustar\0");
    buf[263..265].copy_from_slice(b"00");

    let sum: u32 = buf.iter().map(|&b| u32::from(b)).sum();
    let chk = format!("{sum:06o}\0 ");
    buf[148..156].copy_from_slice(chk.as_bytes());
    Ok(())
}

/// Kind of a decoded container entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    File,
}

/// One entry decoded from a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerEntry {
    pub path: String,
    pub kind: EntryKind,
    pub data: Vec<u8>,
}

/// Decode container bytes written by [`TarPackager`], compressed or not.
pub fn unpack(bytes: &[u8]) -> Result<Vec<ContainerEntry>> {
    let tar = if bytes.starts_with(&ZSTD_MAGIC) {
        zstd::stream::decode_all(bytes)?
    } else {
        bytes.to_vec()
    };

    let mut entries = Vec::new();
    let mut offset = 0;
    while offset + TAR_BLOCK_LEN <= tar.len() {
        let header = &tar[offset..offset + TAR_BLOCK_LEN];
        if header.iter().all(|&b| b == 0) {
            return Ok(entries);
        }

        let name_end = header[..TAR_NAME_LEN]
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(TAR_NAME_LEN);
        let name = std::str::from_utf8(&header[..name_end])
            .map_err(|_| Error::Container("entry name is not UTF-8".into()))?;
        let size = parse_octal(&header[124..135])?;
        let kind = match header[156] {
            b'5' => EntryKind::Folder,
            b'0' | 0 => EntryKind::File,
            other => {
                return Err(Error::Container(format!(
                    "unsupported entry type {:?}",
                    other as char
                )))
            }
        };

        let data_start = offset + TAR_BLOCK_LEN;
        let data_end = data_start + size;
        if data_end > tar.len() {
            return Err(Error::Container(format!("entry {name} is truncated")));
        }

        entries.push(ContainerEntry {
            path: name.trim_end_matches('/').to_string(),
            kind,
            data: tar[data_start..data_end].to_vec(),
        });
        offset = data_end + tar_pad(size);
    }

    Err(Error::Container("missing end-of-archive marker".into()))
}

fn parse_octal(field: &[u8]) -> Result<usize> {
    field
        .iter()
        .take_while(|&&b| b != 0 && b != b' ')
        .try_fold(0usize, |acc, &b| match b {
            b'0'..=b'7' => Ok(acc * 8 + usize::from(b - b'0')),
            _ => Err(Error::Container("invalid octal field".into())),
        })
}
