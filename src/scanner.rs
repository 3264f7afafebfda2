use glob::{glob_with, MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::exif::DateCodec;
use crate::exiffill_error::{ExifFillError, Result};
use crate::photo::PhotoRecord;
use crate::util::is_jpeg_file;

/// Jpeg files directly inside `folder`, sorted by filename.
pub fn list_jpeg_files(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(ExifFillError::NotADirectory(folder.to_path_buf()));
    }
    let root = folder.to_str().ok_or_else(|| ExifFillError::NonUtf8Path(folder.to_path_buf()))?;
    let pattern = Path::new(&Pattern::escape(root)).join("*");
    let pattern = pattern.to_str().ok_or_else(|| ExifFillError::NonUtf8Path(folder.to_path_buf()))?;

    let options = MatchOptions { require_literal_leading_dot: false, ..Default::default() };
    let mut files: Vec<PathBuf> = glob_with(pattern, options)?
        .filter_map(|entry| {
            entry
                .map_err(|e| warn!("skipping unreadable entry: {}", e))
                .ok()
        })
        .filter(|path| is_jpeg_file(path))
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Builds one record per jpeg in `folder`. Unreadable metadata is logged and
/// treated as "no date".
pub fn scan_folder(folder: &Path, codec: &impl DateCodec) -> Result<Vec<PhotoRecord>> {
    let files = list_jpeg_files(folder)?;
    if files.is_empty() {
        return Err(ExifFillError::NoInput(folder.to_path_buf()));
    }
    info!("scanning {} files in {}", files.len(), folder.display());

    let records: Vec<PhotoRecord> = files
        .iter()
        .map(|path| {
            let original = match codec.read_capture_date(path) {
                Ok(date) => date,
                Err(e) => {
                    warn!("{}", e);
                    None
                }
            };
            let record = PhotoRecord::new(path, original);
            debug!(
                "scanned {} month={:?} date={:?}",
                record.filename, record.year_month, original
            );
            record
        })
        .collect();
    Ok(records)
}
