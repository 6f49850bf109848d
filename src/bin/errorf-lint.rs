use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use errorf_lint::config::{Args, Config};
use errorf_lint::Reporter;

fn main() -> ExitCode {
    // Usage errors exit with 1 rather than clap's default of 2.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<u8> {
    let config = Config::from_args(args)?;

    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .init();
    log::debug!("checking {} file(s)", config.files.len());

    let stdout = io::stdout().lock();
    let mut reporter = Reporter::new(config.reporter_config(), stdout);
    let summary = reporter.run(&config.files)?;

    Ok(summary.exit_code())
}
