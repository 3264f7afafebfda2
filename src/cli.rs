use clap::Parser;
use std::path::PathBuf;

/// Fill missing EXIF capture dates from the YYYY-MM in each jpg's filename.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Folder with the .jpg files. Prompted for when missing
    #[clap(env = "EXIFFILL_FOLDER")]
    pub folder: Option<PathBuf>,
    /// Write without asking for confirmation
    #[clap(short, long, default_value_t = false)]
    pub yes: bool,
    /// Only print the preview, never write
    #[clap(short = 'n', long, default_value_t = false)]
    pub dry_run: bool,
    /// Debug logging
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,
}
