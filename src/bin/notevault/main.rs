mod cli;
mod commands;

use std::process::exit;
use clap::{crate_name, Parser};
use figment::Figment;
use log::{debug, error, info};
use notevault::app::NotesApp;
use notevault::config::figment::read_app_config;
use notevault::error_exit;
use notevault::logging::init_tool_logging;
use crate::cli::CliConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tool_logging();

    debug!("{} starting up", crate_name!());

    let cli_config = CliConfig::parse();
    if let Some(config_file) = &cli_config.config_file {
        if !config_file.exists() {
            error_exit!(
                "configuration file at {} does not exist",
                config_file.display()
            )
        }
    }

    let mut app_config = read_app_config(
        cli_config.config_file.as_deref(),
        Figment::new(),
    ).unwrap_or_else(|e| {
        for e in e {
            error!("{e}");
        }
        info!("finishing due to a configuration error");
        exit(1)
    });
    if let Some(data_directory) = cli_config.data_directory {
        app_config.data_directory = data_directory;
    }

    let app = NotesApp::from_config(&app_config)
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));

    if !commands::execute(&app, &app_config, cli_config.command).await {
        exit(1)
    }
}
