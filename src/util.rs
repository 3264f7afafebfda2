use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{ffi::OsStr, path::Path};

pub const EXIF_ORIGINAL_KEY: &str = "Exif.Photo.DateTimeOriginal";
pub const EXIF_DIGITIZED_KEY: &str = "Exif.Photo.DateTimeDigitized";
pub const EXIF_MODIFIED_KEY: &str = "Exif.Image.DateTime";

/// Format written into every EXIF date tag.
pub const EXIF_WRITE_F_STR: &str = "%Y:%m:%d %H:%M:%S";
pub const DISPLAY_F_STR: &str = "%Y-%m-%d %H:%M:%S";

// A:A:A A:A:A
// A-A-A A:A:A
// A:A:ATA:A:A
// A-A-ATA:A:A
// A-A-ATA:A:AZ
// A:A:A A:A
const EXIF_DATE_F_STR: [&str; 6] = [
    "%Y:%m:%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y:%m:%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y:%m:%d %H:%M",
];

const ACCEPTED_EXTENSION: &str = "jpg";

static YEAR_MONTH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}-\d{2}").unwrap());

pub fn parse_exif_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    EXIF_DATE_F_STR.iter().find_map(|f| NaiveDateTime::parse_from_str(value, f).ok())
}

pub fn format_exif_date(date: &NaiveDateTime) -> String {
    date.format(EXIF_WRITE_F_STR).to_string()
}

pub fn is_jpeg_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(OsStr::to_str)
            .map(|ext| ext.eq_ignore_ascii_case(ACCEPTED_EXTENSION))
            .unwrap_or(false)
}

/// First `YYYY-MM` run anywhere in the name. Not validated as a real month.
pub fn extract_year_month(filename: &str) -> Option<String> {
    YEAR_MONTH_RE.find(filename).map(|m| m.as_str().to_string())
}

/// First day of the month named by a `YYYY-MM` key.
pub fn parse_year_month(key: &str) -> Option<NaiveDate> {
    let (year, month) = key.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}
