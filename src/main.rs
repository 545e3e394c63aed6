use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, debug};
use nightly_version::{
    arguments::Arguments, clock::SystemClock, manifest::MANIFEST_FILE_NAME,
    patcher::VersionPatcher,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Arguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Whole cause chain on one line
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Arguments) -> Result<()> {
    let patcher = VersionPatcher::new(SystemClock);
    let outcome = patcher.patch(&args.path)?;
    if !outcome.changed {
        debug!(
            "'{}' already carried {}",
            outcome.manifest_path.display(),
            outcome.nightly_version
        );
    }

    println!(
        "Update {} with version: {}",
        MANIFEST_FILE_NAME, outcome.nightly_version
    );
    Ok(())
}
