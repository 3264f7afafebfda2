use chrono::NaiveDateTime;
use rexiv2::Metadata;
use std::path::Path;
use tracing::debug;

use crate::exiffill_error::{ExifFillError, Result};
use crate::util::{
    format_exif_date, parse_exif_date, EXIF_DIGITIZED_KEY, EXIF_MODIFIED_KEY, EXIF_ORIGINAL_KEY,
};

/// Reads and writes the capture date of an image file.
pub trait DateCodec {
    /// `Ok(None)` when the file has no usable capture date.
    fn read_capture_date(&self, path: &Path) -> Result<Option<NaiveDateTime>>;
    /// Stores `date` in every capture-date tag, keeping all other metadata.
    fn write_capture_date(&self, path: &Path, date: &NaiveDateTime) -> Result<()>;
}

/// The three date tags this crate touches. Everything else stays in the
/// loaded [`Metadata`] and is written back as-is.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExifDates {
    pub original: Option<NaiveDateTime>,
    pub digitized: Option<NaiveDateTime>,
    pub modified: Option<NaiveDateTime>,
}

impl ExifDates {
    pub fn read(exif: &Metadata) -> Self {
        let get = |key: &str| exif.get_tag_string(key).ok().and_then(|v| parse_exif_date(&v));
        Self {
            original: get(EXIF_ORIGINAL_KEY),
            digitized: get(EXIF_DIGITIZED_KEY),
            modified: get(EXIF_MODIFIED_KEY),
        }
    }

    pub fn stamped(date: NaiveDateTime) -> Self {
        Self { original: Some(date), digitized: Some(date), modified: Some(date) }
    }

    fn apply(&self, exif: &Metadata) -> std::result::Result<(), rexiv2::Rexiv2Error> {
        for (key, value) in [
            (EXIF_ORIGINAL_KEY, self.original),
            (EXIF_DIGITIZED_KEY, self.digitized),
            (EXIF_MODIFIED_KEY, self.modified),
        ] {
            if let Some(date) = value {
                exif.set_tag_string(key, &format_exif_date(&date))?;
            }
        }
        Ok(())
    }
}

/// [`DateCodec`] backed by gexiv2.
#[derive(Debug, Clone, Copy)]
pub struct Rexiv2Codec;

impl Rexiv2Codec {
    pub fn new() -> Result<Self> {
        rexiv2::initialize().map_err(|e| ExifFillError::Backend(e.to_string()))?;
        Ok(Self)
    }

    fn load(path: &Path) -> Result<Metadata> {
        Metadata::new_from_path(path)
            .map_err(|e| ExifFillError::metadata(format!("reading metadata: {}", e), path))
    }
}

impl DateCodec for Rexiv2Codec {
    fn read_capture_date(&self, path: &Path) -> Result<Option<NaiveDateTime>> {
        let exif = Self::load(path)?;
        Ok(ExifDates::read(&exif).original)
    }

    fn write_capture_date(&self, path: &Path, date: &NaiveDateTime) -> Result<()> {
        let exif = Self::load(path)?;
        let dropped = drop_empty_tags(&exif);
        if dropped > 0 {
            debug!("dropped {} empty tags from {}", dropped, path.display());
        }
        ExifDates::stamped(*date)
            .apply(&exif)
            .map_err(|e| ExifFillError::metadata(format!("setting date tags: {}", e), path))?;
        exif.save_to_file(path)
            .map_err(|e| ExifFillError::metadata(format!("saving metadata: {}", e), path))
    }
}

/// Clears image and photo IFD tags whose value is empty. Returns how many
/// were cleared.
fn drop_empty_tags(exif: &Metadata) -> usize {
    let empty: Vec<String> = exif
        .get_exif_tags()
        .unwrap_or_default()
        .into_iter()
        .filter(|t| t.starts_with("Exif.Image.") || t.starts_with("Exif.Photo."))
        .filter(|t| exif.get_tag_string(t).map(|v| v.is_empty()).unwrap_or(false))
        .collect();
    empty.iter().filter(|t| exif.clear_tag(t)).count()
}
