#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use exiffill::exif::DateCodec;
use exiffill::exiffill_error::{ExifFillError, Result};
use exiffill::preview::{Confirmer, FolderPicker};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap()
}

/// Dates live in memory, keyed by file name.
#[derive(Default)]
pub struct MemoryCodec {
    pub dates: RefCell<HashMap<String, NaiveDateTime>>,
    pub unreadable: HashSet<String>,
    pub unwritable: HashSet<String>,
    pub writes: RefCell<Vec<(String, NaiveDateTime)>>,
}

fn name(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().into_owned()
}

impl MemoryCodec {
    pub fn with_date(self, file: &str, date: NaiveDateTime) -> Self {
        self.dates.borrow_mut().insert(file.to_string(), date);
        self
    }

    pub fn written(&self) -> Vec<(String, NaiveDateTime)> {
        self.writes.borrow().clone()
    }
}

impl DateCodec for MemoryCodec {
    fn read_capture_date(&self, path: &Path) -> Result<Option<NaiveDateTime>> {
        let file = name(path);
        if self.unreadable.contains(&file) {
            return Err(ExifFillError::metadata("corrupt exif block", path));
        }
        Ok(self.dates.borrow().get(&file).copied())
    }

    fn write_capture_date(&self, path: &Path, date: &NaiveDateTime) -> Result<()> {
        let file = name(path);
        if self.unwritable.contains(&file) {
            return Err(ExifFillError::metadata("permission denied", path));
        }
        self.dates.borrow_mut().insert(file.clone(), *date);
        self.writes.borrow_mut().push((file, *date));
        Ok(())
    }
}

pub struct Answer {
    pub yes: bool,
    pub asked: Cell<usize>,
}

impl Answer {
    pub fn new(yes: bool) -> Self {
        Self { yes, asked: Cell::new(0) }
    }
}

impl Confirmer for Answer {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        self.asked.set(self.asked.get() + 1);
        Ok(self.yes)
    }
}

pub struct Picked(pub Option<PathBuf>);

impl FolderPicker for Picked {
    fn pick_folder(&self) -> Result<Option<PathBuf>> {
        Ok(self.0.clone())
    }
}

pub fn folder_with(files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for f in files {
        std::fs::write(dir.path().join(f), b"not really a jpeg").unwrap();
    }
    dir
}
