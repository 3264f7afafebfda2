use anyhow::{bail, Context, Result};
use clap::Parser;
use exiffill::exif::ExifDates;
use exiffill::init_tracing;
use exiffill::scanner::list_jpeg_files;
use exiffill::util::DISPLAY_F_STR;
use rexiv2::Metadata;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Print the capture-date tags of a jpg, or of every jpg in a folder.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct DatesCLI {
    /// A .jpg file or a folder of them
    pub img_or_img_dir: PathBuf,
}

fn show(date: Option<chrono::NaiveDateTime>) -> String {
    date.map(|d| d.format(DISPLAY_F_STR).to_string()).unwrap_or_else(|| "-".to_string())
}

fn print_dates(path: &Path) {
    match Metadata::new_from_path(path) {
        Ok(exif) => {
            let dates = ExifDates::read(&exif);
            println!(
                "{}\toriginal={}\tdigitized={}\tmodified={}",
                path.display(),
                show(dates.original),
                show(dates.digitized),
                show(dates.modified)
            );
        }
        Err(e) => warn!("{} -> {}", path.display(), e),
    }
}

fn main() -> Result<()> {
    let args = DatesCLI::parse();
    init_tracing(false);
    rexiv2::initialize().context("starting metadata backend")?;
    match args.img_or_img_dir {
        path if path.is_dir() => {
            list_jpeg_files(&path)?.iter().for_each(|f| print_dates(f));
        }
        path if path.is_file() => print_dates(&path),
        path => bail!("{} is not a file or directory", path.display()),
    }
    Ok(())
}
