//! Medivox CLI entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use medivox::cli::{
    app::{load_merged_config, require_api_key, run_consultation, EXIT_ERROR},
    args::{Cli, Commands, ConsultOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use medivox::domain::config::AppConfig;
use medivox::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        model: cli.model.clone(),
        voice: cli.voice.clone(),
        output_dir: cli
            .output_dir
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned()),
    };

    // Merge config; the key is resolved once from the merged result
    let config = load_merged_config(cli_config).await;

    let api_key = match require_api_key(&config) {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let options = ConsultOptions {
        text: cli.text,
        image: cli.image,
        audio: cli.audio,
        model: config.model_or_default().to_string(),
        voice: config.voice_or_default().to_string(),
        output_dir: PathBuf::from(config.output_dir_or_default()),
    };

    run_consultation(options, api_key).await
}

/// Initialize the tracing subscriber; `RUST_LOG` overrides the default filter
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("medivox=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
