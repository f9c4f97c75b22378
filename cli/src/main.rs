mod cli;

use clap::Parser;
use std::process::ExitCode;

/// Exit status for invocation mistakes, matching what clap uses
const USAGE_EXIT: u8 = 2;

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    // Initialize logger
    let default_filter = if args.debug { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = cli::load_config(&args).and_then(|cfg| cli::handle_args(&args, &cfg));

    match result {
        Ok(summary) => {
            println!("{}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("error: {}", e);
            if e.is_usage() {
                ExitCode::from(USAGE_EXIT)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
