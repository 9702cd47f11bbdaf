//! Per-file conversion pipeline.
//!
//! Discovers localized string files in the source directory and converts
//! each one: read, parse, filter, serialize, derive the output name, write.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{ConvertError, Result};
use crate::filter::KeyFilter;
use crate::json::to_json;
use crate::locale;
use crate::properties;

/// Conversion options
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Key filter; entries with non-matching keys are omitted
    pub filter: KeyFilter,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the key filter substring.
    pub fn with_filter(mut self, substring: Option<String>) -> Self {
        self.filter = KeyFilter::new(substring);
        self
    }
}

/// Result of converting one input file
#[derive(Debug)]
pub struct Conversion {
    /// Input file path
    pub path: PathBuf,
    /// Derived locale tag
    pub locale: String,
    /// Output filename (no directory component)
    pub output_name: String,
    /// Serialized JSON object text
    pub json: String,
    /// Entries parsed from the input file
    pub entries_read: usize,
    /// Entries remaining after filtering
    pub entries_kept: usize,
}

/// Lists the localized string files in `source`, sorted by filename.
///
/// Only regular files directly inside `source` whose name ends with
/// `.properties` and contains `-strings` are returned; everything else is
/// silently skipped. Sorting makes run order, and with it the program's
/// output, deterministic across platforms.
pub fn collect_strings_files(source: &Path) -> Result<Vec<PathBuf>> {
    if !source.exists() {
        return Err(ConvertError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }
    if !source.is_dir() {
        return Err(ConvertError::NotADirectory {
            path: source.to_path_buf(),
        });
    }

    let mut files: Vec<PathBuf> = WalkDir::new(source)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| {
            e.path()
                .file_name()
                .and_then(|s| s.to_str())
                .map(locale::is_strings_file)
                .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    Ok(files)
}

/// Converts a single properties file to its JSON text.
///
/// The whole file is read into memory, parsed, filtered and serialized; the
/// output filename and locale tag are derived from the input filename.
/// Nothing is written here.
pub fn convert_file(path: &Path, options: &ConvertOptions) -> Result<Conversion> {
    let name = file_name(path)?;

    let bytes = fs::read(path).map_err(|e| ConvertError::ReadError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let text = String::from_utf8(bytes).map_err(|e| ConvertError::ParseError {
        file: path.to_path_buf(),
        reason: format!("malformed encoding: {e}"),
    })?;

    let entries = properties::parse(&text, path)?;
    let entries_read = entries.len();

    let kept: BTreeMap<String, String> = options.filter.apply(entries);
    let entries_kept = kept.len();

    Ok(Conversion {
        path: path.to_path_buf(),
        locale: locale::locale_tag(name)?,
        output_name: locale::output_name(name)?,
        json: to_json(&kept),
        entries_read,
        entries_kept,
    })
}

/// Writes a conversion's JSON text into the destination directory.
///
/// The directory is created if absent; an existing output file is
/// overwritten. Returns the written path.
pub fn write_output(dest: &Path, conversion: &Conversion) -> Result<PathBuf> {
    fs::create_dir_all(dest).map_err(|e| ConvertError::WriteError {
        file: dest.to_path_buf(),
        reason: e.to_string(),
    })?;

    let out_path = dest.join(&conversion.output_name);
    fs::write(&out_path, &conversion.json).map_err(|e| ConvertError::WriteError {
        file: out_path.clone(),
        reason: e.to_string(),
    })?;

    Ok(out_path)
}

fn file_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ConvertError::MalformedFilename {
            file: path.display().to_string(),
        })
}
