//! CLI entrypoint for docbase
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use docbase_application::DocbaseApi;
use docbase_infrastructure::{ApiSettings, ConfigError, ConfigLoader, DocbaseClient, FileConfig};
use docbase_presentation::{Cli, Command, CommandContext, OutputConfig};
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // === Configuration ===
    let file_config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).map_err(ConfigError::from)?
    };

    let settings = ApiSettings::resolve(cli.domain, cli.token, &file_config.api)?;

    let output = OutputConfig {
        post_format: file_config.output.post_format,
        show_progress: !cli.quiet,
        color: file_config.output.color && !cli.no_color,
    };

    // === Dependency Injection ===
    let api: Arc<dyn DocbaseApi> =
        Arc::new(DocbaseClient::new(&settings).context("Failed to set up the API client")?);

    let cancellation = CancellationToken::new();
    let ctrl_c = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, stopping after the current request");
            ctrl_c.cancel();
        }
    });

    let ctx = CommandContext::new(api, settings.domain)
        .with_cancellation(cancellation)
        .with_output(output);

    let command: Box<dyn Command> = command.into();
    info!("Running {} against {}", command.name(), ctx.domain.host());

    command.run(&ctx, &mut std::io::stdout()).await?;
    Ok(())
}
