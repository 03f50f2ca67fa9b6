//! Slide manifest: for each condition folder, its slide images in
//! presentation order.
//!
//! A slide is any file named `Slide<N>.png` (case-insensitive). Slides sort
//! by `N` numerically, so `Slide10` follows `Slide9`. Folders without slides
//! are left out.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

pub type SlideManifest = BTreeMap<String, Vec<String>>;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize manifest: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Scan `dir` and build the manifest. Asset paths look like
/// `/<url_prefix>/<encoded folder>/<file>`.
pub fn build_manifest(dir: &Path, url_prefix: &str) -> Result<SlideManifest, ManifestError> {
    let mut manifest = SlideManifest::new();

    for folder in read_dir(dir)? {
        if !folder.is_dir() {
            continue;
        }
        let Some(name) = folder.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let mut slides: Vec<(u32, String)> = read_dir(&folder)?
            .iter()
            .filter(|path| path.is_file())
            .filter_map(|path| path.file_name()?.to_str())
            .filter_map(|file| slide_number(file).map(|n| (n, file.to_string())))
            .collect();
        if slides.is_empty() {
            continue;
        }
        slides.sort();

        let encoded = encode_component(name);
        let paths: Vec<String> = slides
            .into_iter()
            .map(|(_, file)| format!("/{url_prefix}/{encoded}/{file}"))
            .collect();
        tracing::debug!(condition = name, slides = paths.len(), "indexed slide folder");
        manifest.insert(name.to_string(), paths);
    }

    let total: usize = manifest.values().map(Vec::len).sum();
    tracing::info!(conditions = manifest.len(), slides = total, "slide manifest built");
    Ok(manifest)
}

/// Build the manifest for `dir` and write it as pretty JSON to `output`.
pub fn write_manifest(dir: &Path, url_prefix: &str, output: &Path) -> Result<SlideManifest, ManifestError> {
    let manifest = build_manifest(dir, url_prefix)?;
    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(output, json).map_err(|source| ManifestError::Io {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %output.display(), "slide manifest written");
    Ok(manifest)
}

fn read_dir(dir: &Path) -> Result<Vec<PathBuf>, ManifestError> {
    let io_error = |source: std::io::Error| ManifestError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        paths.push(entry.map_err(io_error)?.path());
    }
    paths.sort();
    Ok(paths)
}

/// `Slide12.PNG` -> 12.
fn slide_number(file_name: &str) -> Option<u32> {
    let lower = file_name.to_ascii_lowercase();
    let digits = lower.strip_prefix("slide")?.strip_suffix(".png")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Folder names are encoded the way `encodeURIComponent` encodes them.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}
