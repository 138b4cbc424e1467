// crates/postcode-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (discovery, I/O, decompression) and delegates
//! to the normalizer, merger and index builder.
//!
//! A data path is either one JSON file or a directory. For a directory every
//! `*.json` regular file directly inside it is read, in file-name order, and
//! duplicate states across the files are merged. A single file is taken as
//! is: its states are indexed in order without de-duplication. A file that is
//! not valid JSON aborts the whole load; a valid JSON file with an unknown
//! layout only contributes nothing.

use crate::error::{PostcodeError, Result};
use crate::model::{merge_states, normalize, CanonicalState, PostcodeDb};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub mod common_io;
pub mod snapshot;

pub use snapshot::CompressionMode;

impl PostcodeDb {
    /// Folder the CLI reads when no path is given.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from("data")
    }

    /// **Standard Loader:** reads a JSON file or a folder of JSON files and
    /// builds the indexes.
    ///
    /// # Errors
    ///
    /// - [`PostcodeError::PathNotFound`] if `path` does not exist.
    /// - [`PostcodeError::NoDataFiles`] if a directory holds no `*.json` file.
    /// - [`PostcodeError::Json`] if any file fails to parse.
    /// - [`PostcodeError::Io`] on read failures.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let states = load_states(path)?;
        let db = PostcodeDb::from_states(states);

        let stats = db.stats;
        tracing::info!(
            path = %path.display(),
            states = stats.states,
            cities = stats.cities,
            postcodes = stats.postcodes,
            "postcode data loaded"
        );
        if stats.replaced_postcodes > 0 || stats.replaced_cities > 0 {
            tracing::debug!(
                postcodes = stats.replaced_postcodes,
                cities = stats.replaced_cities,
                "duplicate keys overwritten during indexing"
            );
        }
        Ok(db)
    }
}

/// Reads and normalizes every source under `path`.
///
/// States from a folder go through [`merge_states`]. A single file keeps all
/// of its states, including unnamed ones and repeats of the same name.
pub fn load_states(path: &Path) -> Result<Vec<CanonicalState>> {
    if path.is_file() {
        let data = read_json(path)?;
        return Ok(normalize(data, &source_label(path)));
    }
    let files = discover_sources(path)?;

    let mut all_states = Vec::new();
    for file in &files {
        let data = read_json(file)?;
        let label = source_label(file);
        all_states.extend(normalize(data, &label));
    }
    tracing::debug!(files = files.len(), states = all_states.len(), "sources normalized");

    Ok(merge_states(all_states))
}

/// Resolves `path` into the ordered list of files to read.
pub fn discover_sources(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.exists() {
        return Err(PostcodeError::PathNotFound(path.to_path_buf()));
    }

    let entries = fs::read_dir(path).map_err(|e| PostcodeError::io(path, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PostcodeError::io(path, e))?;
        let p = entry.path();
        if p.is_file() && p.extension().is_some_and(|ext| ext == "json") {
            files.push(p);
        }
    }

    if files.is_empty() {
        return Err(PostcodeError::NoDataFiles(path.to_path_buf()));
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Parses one file as JSON. Syntax errors carry the file path.
pub fn read_json(path: &Path) -> Result<Value> {
    let reader = common_io::open_stream(path)?;
    serde_json::from_reader(reader).map_err(|source| {
        if source.is_io() {
            PostcodeError::io(path, std::io::Error::from(source))
        } else {
            PostcodeError::Json {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

fn source_label(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
