use std::process::ExitCode;

use clap::Parser;
use eyre::Result;
use intake_cli::cli::{Cli, Command, ConfigAction};
use intake_cli::{commands, config, logging};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;
    logging::init(&config)?;

    let clean = match cli.command {
        Command::Template => commands::template()?,
        Command::Validate { file, step, json } => {
            commands::validate(&file, step, json, &config.validation_context()?)?
        }
        Command::Walk { file } => commands::walk(&file, config.validation_context()?)?,
        Command::CheckIdentity(args) => commands::check_identity(&args.into()),
        Command::Submit { file, identity } => {
            commands::submit_document(&file, &identity.into(), config.validation_context()?)
                .await?
        }
        Command::Config { action } => match action {
            ConfigAction::Show => commands::show_config(&config_path, &config)?,
            ConfigAction::Init => commands::init_config(&config_path, &config)?,
        },
    };

    Ok(if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
