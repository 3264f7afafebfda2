use std::path::PathBuf;
use tracing::info;

use crate::exif::DateCodec;
use crate::exiffill_error::{ExifFillError, Result};
use crate::filler::{fill_missing_dates, fill_summary, FillSummary};
use crate::photo::PhotoRecord;
use crate::preview::{render_preview, Confirmer, FolderPicker};
use crate::scanner::scan_folder;
use crate::writer::{write_synthetic_dates, WriteReport};

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Skips the folder picker when set.
    pub folder: Option<PathBuf>,
    /// Stop after the preview.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Cancelled,
    DryRun,
    NothingToWrite,
    Written(WriteReport),
}

/// Scan and fill only; never prompts and never writes.
pub fn plan(folder: &std::path::Path, codec: &impl DateCodec) -> Result<Vec<PhotoRecord>> {
    let records = scan_folder(folder, codec)?;
    Ok(fill_missing_dates(records))
}

/// Full run: pick, scan, fill, preview, confirm, write. Preview lines go to
/// `out`.
pub fn run(
    options: &RunOptions, picker: &impl FolderPicker, confirmer: &impl Confirmer,
    codec: &impl DateCodec, out: &mut impl std::io::Write,
) -> Result<RunOutcome> {
    let folder = match &options.folder {
        Some(folder) => folder.clone(),
        None => picker.pick_folder()?.ok_or(ExifFillError::NoFolderSelected)?,
    };

    let records = plan(&folder, codec)?;
    for line in render_preview(&records) {
        writeln!(out, "{}", line)?;
    }
    let summary: FillSummary = fill_summary(&records);
    writeln!(
        out,
        "{} files in {} months: {} original, {} to fill, {} without a date",
        records.len(),
        summary.group_count,
        summary.original,
        summary.filled,
        summary.undated
    )?;

    if options.dry_run {
        return Ok(RunOutcome::DryRun);
    }
    if summary.filled == 0 {
        return Ok(RunOutcome::NothingToWrite);
    }
    if !confirmer.confirm(&format!("Write {} synthetic dates?", summary.filled))? {
        info!("cancelled, no files written");
        return Ok(RunOutcome::Cancelled);
    }
    Ok(RunOutcome::Written(write_synthetic_dates(&records, codec)))
}
