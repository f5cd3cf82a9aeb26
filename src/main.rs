//! tagdeploy CLI - stage a tagged revision and publish it atomically
//!
//! Usage: tagdeploy [OPTIONS] -t <TAG> -c <PATH> -d <PATH> [DESTINATION]
//!        tagdeploy inspect <PUBLISHED_DIR>

mod cli;
mod commands;

use clap::Parser;
use tagdeploy::application::CancelFlag;
use tagdeploy::logging;
use tagdeploy::presentation::{output, OutputFormat};

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let format = OutputFormat::from_json_flag(cli.json);

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("Warning: failed to initialize logging: {:#}", e);
    }

    let cancel = CancelFlag::new();
    let handler_flag = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || handler_flag.cancel()) {
        tracing::warn!(error = %e, "failed to install interrupt handler");
    }

    let (command, result) = match cli.command {
        Some(Commands::Inspect { dir }) => {
            ("inspect", commands::inspect::cmd_inspect(&dir, format))
        }
        None => (
            "deploy",
            commands::deploy::cmd_deploy(cli.deploy, cli.settings.as_deref(), format, cancel),
        ),
    };

    if let Err(err) = result {
        output::render_error(format, command, &err);
        std::process::exit(1);
    }
}
