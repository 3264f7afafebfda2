use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

use crate::util::{extract_year_month, DISPLAY_F_STR};

/// Where a record's capture date came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureDate {
    /// Read from the file's own metadata.
    Original(NaiveDateTime),
    /// Assigned by the filler; the file has no date on disk yet.
    Synthetic(NaiveDateTime),
}

impl CaptureDate {
    pub fn date(&self) -> NaiveDateTime {
        match self {
            CaptureDate::Original(d) | CaptureDate::Synthetic(d) => *d,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CaptureDate::Original(_) => "original",
            CaptureDate::Synthetic(_) => "synthetic",
        }
    }

    pub fn display(&self) -> String {
        self.date().format(DISPLAY_F_STR).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    pub filename: String,
    pub path: PathBuf,
    pub year_month: Option<String>,
    pub captured_at: Option<CaptureDate>,
}

impl PhotoRecord {
    pub fn new(path: &Path, original: Option<NaiveDateTime>) -> Self {
        let filename = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            year_month: extract_year_month(&filename),
            filename,
            path: path.to_path_buf(),
            captured_at: original.map(CaptureDate::Original),
        }
    }

    /// The date to persist, if the filler invented one.
    pub fn pending_write(&self) -> Option<NaiveDateTime> {
        match self.captured_at {
            Some(CaptureDate::Synthetic(d)) => Some(d),
            _ => None,
        }
    }
}
