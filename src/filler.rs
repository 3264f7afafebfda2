use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info};

use crate::photo::{CaptureDate, PhotoRecord};
use crate::util::parse_year_month;

pub const FILL_STEP_MINUTES: u64 = 30;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FillSummary {
    pub group_count: usize,
    pub original: usize,
    pub filled: usize,
    pub undated: usize,
}

/// Time of day for the `index`-th undated file of a month.
///
/// Steps by [`FILL_STEP_MINUTES`] from midnight. The hour wraps modulo 24, so
/// index 48 lands on `00:00:00` again, same as index 0.
pub fn slot_time(index: usize) -> NaiveTime {
    let total = index as u64 * FILL_STEP_MINUTES;
    let hour = ((total / 60) % 24) as u32;
    let minute = (total % 60) as u32;
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// Assigns synthetic dates to every undated record that has a usable
/// year-month key. Output is sorted by filename and holds every input record.
pub fn fill_missing_dates(records: Vec<PhotoRecord>) -> Vec<PhotoRecord> {
    let mut out: Vec<PhotoRecord> = Vec::with_capacity(records.len());
    let mut groups: BTreeMap<String, Vec<PhotoRecord>> = BTreeMap::new();
    for record in records {
        match record.year_month.clone() {
            Some(key) => groups.entry(key).or_default().push(record),
            None => out.push(record),
        }
    }

    let group_count = groups.len();
    for (key, group) in groups {
        out.extend(fill_group(&key, group));
    }
    out.sort_by(|a, b| a.filename.cmp(&b.filename));

    let summary = fill_summary(&out);
    info!(
        "filled {} of {} files across {} month groups",
        summary.filled,
        out.len(),
        group_count
    );
    out
}

fn fill_group(key: &str, mut group: Vec<PhotoRecord>) -> Vec<PhotoRecord> {
    group.sort_by(|a, b| a.filename.cmp(&b.filename));
    let anchor: NaiveDate = match parse_year_month(key) {
        Some(anchor) => anchor,
        None => {
            debug!("skipping month group {}: not a valid year-month", key);
            return group;
        }
    };

    group
        .into_iter()
        .scan(0usize, |slot, mut record| {
            if record.captured_at.is_none() {
                let date = anchor.and_time(slot_time(*slot));
                debug!("{} -> {} (slot {})", record.filename, date, slot);
                record.captured_at = Some(CaptureDate::Synthetic(date));
                *slot += 1;
            }
            Some(record)
        })
        .collect()
}

pub fn fill_summary(records: &[PhotoRecord]) -> FillSummary {
    let mut summary = FillSummary {
        group_count: records
            .iter()
            .filter_map(|r| r.year_month.as_deref())
            .collect::<std::collections::BTreeSet<_>>()
            .len(),
        ..Default::default()
    };
    for record in records {
        match record.captured_at {
            Some(CaptureDate::Original(_)) => summary.original += 1,
            Some(CaptureDate::Synthetic(_)) => summary.filled += 1,
            None => summary.undated += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, Timelike};
    use std::path::Path;

    fn record(name: &str, date: Option<NaiveDateTime>) -> PhotoRecord {
        PhotoRecord::new(Path::new(name), date)
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap()
    }

    fn find<'a>(records: &'a [PhotoRecord], name: &str) -> &'a PhotoRecord {
        records.iter().find(|r| r.filename == name).unwrap()
    }

    #[test]
    fn slot_sequence_steps_half_hours() {
        let got: Vec<String> =
            (0..5).map(|i| slot_time(i).format("%H:%M:%S").to_string()).collect();
        assert_eq!(got, ["00:00:00", "00:30:00", "01:00:00", "01:30:00", "02:00:00"]);
        assert_eq!(slot_time(47), NaiveTime::from_hms_opt(23, 30, 0).unwrap());
        assert_eq!(slot_time(48), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(slot_time(49), NaiveTime::from_hms_opt(0, 30, 0).unwrap());
    }

    #[test]
    fn single_missing_file_gets_midnight_of_first() {
        let out = fill_missing_dates(vec![record("2024-05_001.jpg", None)]);
        assert_eq!(out[0].captured_at, Some(CaptureDate::Synthetic(at(2024, 5, 1, 0, 0, 0))));
    }

    #[test]
    fn originals_are_kept_and_do_not_take_a_slot() {
        let a = at(2024, 1, 15, 10, 0, 0);
        let out = fill_missing_dates(vec![
            record("B-2024-01.jpg", None),
            record("A-2024-01.jpg", Some(a)),
            record("C-2024-01.jpg", None),
        ]);
        assert_eq!(find(&out, "A-2024-01.jpg").captured_at, Some(CaptureDate::Original(a)));
        assert_eq!(
            find(&out, "B-2024-01.jpg").captured_at,
            Some(CaptureDate::Synthetic(at(2024, 1, 1, 0, 0, 0)))
        );
        assert_eq!(
            find(&out, "C-2024-01.jpg").captured_at,
            Some(CaptureDate::Synthetic(at(2024, 1, 1, 0, 30, 0)))
        );
    }

    #[test]
    fn order_is_by_filename_not_input_order() {
        let out = fill_missing_dates(vec![
            record("z_2023-11.jpg", None),
            record("m_2023-11.jpg", None),
            record("a_2023-11.jpg", None),
        ]);
        let names: Vec<&str> = out.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, ["a_2023-11.jpg", "m_2023-11.jpg", "z_2023-11.jpg"]);
        let minutes: Vec<u32> =
            out.iter().map(|r| r.captured_at.unwrap().date().minute()).collect();
        assert_eq!(minutes, [0, 30, 0]);
        assert_eq!(out[2].captured_at.unwrap().date().hour(), 1);
    }

    #[test]
    fn groups_are_numbered_independently() {
        let out = fill_missing_dates(vec![
            record("a_2024-01.jpg", None),
            record("b_2024-02.jpg", None),
            record("c_2024-01.jpg", None),
        ]);
        assert_eq!(find(&out, "a_2024-01.jpg").pending_write(), Some(at(2024, 1, 1, 0, 0, 0)));
        assert_eq!(find(&out, "c_2024-01.jpg").pending_write(), Some(at(2024, 1, 1, 0, 30, 0)));
        assert_eq!(find(&out, "b_2024-02.jpg").pending_write(), Some(at(2024, 2, 1, 0, 0, 0)));
    }

    #[test]
    fn fifty_files_wrap_at_index_48() {
        let records: Vec<PhotoRecord> =
            (0..50).map(|i| record(&format!("img_{:03}_2022-03.jpg", i), None)).collect();
        let out = fill_missing_dates(records);
        assert_eq!(out.len(), 50);
        assert_eq!(out[0].pending_write(), Some(at(2022, 3, 1, 0, 0, 0)));
        assert_eq!(out[47].pending_write(), Some(at(2022, 3, 1, 23, 30, 0)));
        assert_eq!(out[48].pending_write(), Some(at(2022, 3, 1, 0, 0, 0)));
        assert_eq!(out[49].pending_write(), Some(at(2022, 3, 1, 0, 30, 0)));
        assert_eq!(out[0].pending_write(), out[48].pending_write());
    }

    #[test]
    fn undated_names_and_bad_months_are_left_alone() {
        let out = fill_missing_dates(vec![
            record("IMG_0001.jpg", None),
            record("scan_2024-13.jpg", None),
            record("scan_2024-12.jpg", None),
        ]);
        assert_eq!(find(&out, "IMG_0001.jpg").captured_at, None);
        assert_eq!(find(&out, "scan_2024-13.jpg").captured_at, None);
        assert!(find(&out, "scan_2024-12.jpg").pending_write().is_some());

        let summary = fill_summary(&out);
        assert_eq!(summary.filled, 1);
        assert_eq!(summary.undated, 2);
        assert_eq!(summary.group_count, 2);
    }
}
