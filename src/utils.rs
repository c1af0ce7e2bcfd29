//! Utility functions for text casing, slugs, and file system checks.
//!
//! This module provides helpers used throughout the application:
//! - Title casing for keywords, topics, and audience labels
//! - Slugs for course URLs and stems for output filenames
//! - String truncation for logging
//! - File system validation for the output directory

use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Title-case a string word by word.
///
/// A letter is upper-cased when it follows a non-letter (or starts the
/// string) and lower-cased otherwise, so `"power bi"` becomes `"Power Bi"`
/// and `"3d printing"` becomes `"3D Printing"`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(title_case("advanced EXCEL"), "Advanced Excel");
/// assert_eq!(title_case("q&a"), "Q&A");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }
    out
}

/// Lower-case a name and join its words with `sep`.
///
/// Only spaces are replaced; every other character is kept as typed.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slug("MS Office Training", '-'), "ms-office-training");
/// assert_eq!(slug("MS Office Training", '_'), "ms_office_training");
/// ```
pub fn slug(name: &str, sep: char) -> String {
    name.to_lowercase().replace(' ', &sep.to_string())
}

/// Turn a name into a bare file stem.
///
/// Lower-cases the name and replaces every character other than an
/// alphanumeric, `-` or `_` with `_`, so path separators and dots never
/// reach the filesystem.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(file_stem("MS Office Training"), "ms_office_training");
/// assert_eq!(file_stem("C/C++ Programming"), "c_c___programming");
/// ```
pub fn file_stem(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` characters with an ellipsis and
/// byte count indicator appended.
///
/// # Returns
///
/// The original string if it has at most `max` characters, otherwise a
/// truncated version with `"…(+N bytes)"` appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Ensure a directory exists and is writable.
///
/// This function creates the directory if it doesn't exist, then performs
/// a write test by creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
