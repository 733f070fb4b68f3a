//! Input document model and filename-derived metadata.

use std::path::Path;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DocumentError;
use crate::vocab;

lazy_static! {
    static ref FILENAME_RE: Regex =
        Regex::new(r"BORME-([A-Z])-(\d{4})-(\d+)-(\d+)").unwrap();
}

/// Metadata parsed from a bulletin filename and its storage path.
///
/// Filenames follow `BORME-<section letter>-<year>-<issue>-<province code>`;
/// the publication date comes from a `YYYY/MM/DD` run of path components when
/// present, falling back to January 1st of the filename year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Bulletin section letter (A = registered acts).
    pub section: String,
    /// Publication year from the filename.
    pub year: i32,
    /// Bulletin issue number.
    pub issue: u32,
    /// Two-digit province code.
    pub province_code: String,
    /// Canonical province name for the code, empty if unknown.
    pub province: String,
    /// Publication date derived from the storage path.
    pub date: NaiveDate,
    /// Source filename.
    pub filename: String,
}

impl DocumentMeta {
    /// Parse metadata from a document path.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        let caps = FILENAME_RE
            .captures(&filename)
            .ok_or_else(|| DocumentError::BadFilename(filename.clone()))?;

        let section = caps[1].to_string();
        let year: i32 = caps[2]
            .parse()
            .map_err(|_| DocumentError::BadFilename(filename.clone()))?;
        let issue: u32 = caps[3]
            .parse()
            .map_err(|_| DocumentError::BadFilename(filename.clone()))?;
        let province_code = caps[4].to_string();

        let date = date_from_path(path, year)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default());

        Ok(Self {
            section,
            year,
            issue,
            province: vocab::province_name(&province_code).to_string(),
            province_code,
            date,
            filename,
        })
    }
}

/// Look for a `YYYY/MM/DD` component run in the storage path.
fn date_from_path(path: &Path, year: i32) -> Option<NaiveDate> {
    let parts: Vec<&str> = path
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();

    for (idx, part) in parts.iter().enumerate() {
        if part.len() == 4
            && part.chars().all(|c| c.is_ascii_digit())
            && part.parse::<i32>().map(|y| y == year).unwrap_or(false)
        {
            if idx + 2 < parts.len() {
                let month: u32 = parts[idx + 1].parse().ok()?;
                let day: u32 = parts[idx + 2].parse().ok()?;
                return NaiveDate::from_ymd_opt(year, month, day);
            }
            break;
        }
    }
    None
}

/// A bulletin document ready for parsing: recovered page text plus metadata.
/// Immutable once obtained; text recovery is an external concern.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Filename/path-derived metadata.
    pub meta: DocumentMeta,
    /// Raw multi-page text, ordered lines.
    pub text: String,
}

impl RawDocument {
    pub fn new(meta: DocumentMeta, text: impl Into<String>) -> Self {
        Self {
            meta,
            text: text.into(),
        }
    }
}
