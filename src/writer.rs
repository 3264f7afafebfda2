use tracing::{error, info};

use crate::exif::DateCodec;
use crate::photo::PhotoRecord;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteReport {
    pub written: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Persists every synthetic date. Records with an original date, or none at
/// all, are never opened. A failed file is logged and the rest still run.
pub fn write_synthetic_dates(records: &[PhotoRecord], codec: &impl DateCodec) -> WriteReport {
    let mut report = WriteReport::default();
    for record in records {
        let Some(date) = record.pending_write() else {
            report.skipped += 1;
            continue;
        };
        match codec.write_capture_date(&record.path, &date) {
            Ok(()) => {
                info!("wrote {} -> {}", record.path.display(), date);
                report.written += 1;
            }
            Err(e) => {
                error!("{}", e);
                report.failed += 1;
            }
        }
    }
    report
}
