use anyhow::{Context, Result};
use clap::Parser;
use exiffill::cli::Cli;
use exiffill::exif::Rexiv2Codec;
use exiffill::pipeline::{run, RunOptions, RunOutcome};
use exiffill::preview::{AssumeYes, PromptConfirmer, PromptFolderPicker};
use exiffill::init_tracing;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    init_tracing(args.verbose);

    let codec = Rexiv2Codec::new().context("starting metadata backend")?;
    let options = RunOptions { folder: args.folder.clone(), dry_run: args.dry_run };
    let outcome = {
        let mut stdout = std::io::stdout().lock();
        if args.yes {
            run(&options, &PromptFolderPicker, &AssumeYes, &codec, &mut stdout)
        } else {
            run(&options, &PromptFolderPicker, &PromptConfirmer, &codec, &mut stdout)
        }
    };

    match outcome {
        Ok(RunOutcome::Written(report)) => {
            println!(
                "Done: wrote {} files, {} failed, {} left as is",
                report.written, report.failed, report.skipped
            );
        }
        Ok(RunOutcome::Cancelled) => println!("Cancelled, nothing written."),
        Ok(RunOutcome::DryRun) => println!("Dry run, nothing written."),
        Ok(RunOutcome::NothingToWrite) => println!("Every dated file already has a capture date."),
        Err(e) if e.is_input_error() => println!("{}, exiting.", e),
        Err(e) => return Err(e).context("filling capture dates"),
    }
    Ok(())
}
