use std::io;

use anyhow::Result;
use clap::Parser;

mod cli;
mod logging;

use cli::Args;
use logging::{init_logging, LoggingConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..LoggingConfig::default()
    });

    let stdout = io::stdout();
    let report = cli::run(&args, &mut stdout.lock())?;

    if report.unrecognized > 0 {
        log::warn!(
            "{}: skipped {} unrecognized section(s)",
            args.path.display(),
            report.unrecognized
        );
    }
    Ok(())
}
