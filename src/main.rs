use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use viewfinder::adapter::inbound::cli::command::Cli;
use viewfinder::adapter::inbound::cli::diagnostic::diagnose;
use viewfinder::adapter::inbound::cli::output::{self, OutputMode};
use viewfinder::adapter::inbound::cli::{find, logging_config};
use viewfinder::error::Error;
use viewfinder::infrastructure::config::settings::Config;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputMode::new(cli.quiet), cli.color);

    let config = match Config::discover(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:?}", diagnose(e));
            return ExitCode::FAILURE;
        }
    };

    logging_config(&cli, &config).init();

    match find::execute(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Input(e)) => {
            output::input_error(&e);
            ExitCode::FAILURE
        }
        Err(e) => {
            debug!(error = ?e, "view point search failed");
            eprintln!("{:?}", diagnose(e));
            ExitCode::FAILURE
        }
    }
}
