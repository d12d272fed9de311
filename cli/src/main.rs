//! CLI entrypoint for genomechat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use genomechat_application::{HandleCommandUseCase, NoPredictionLogger, PredictionLogger};
use genomechat_infrastructure::{
    ConfigLoader, FileConfig, FileOutputFormat, HttpTransportFactory, JsonlPredictionLogger,
    build_http_client,
};
use genomechat_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputConfig, OutputFormat, ReplConfig, progress_for,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

fn verbosity_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    }
}

/// Console logging at the `-v` level, plus a daily rolling file at info or
/// above when file logging is enabled. The guard must outlive `main`.
fn init_logging(verbose: u8, config: &FileConfig) -> Option<WorkerGuard> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(verbosity_filter(verbose));

    let file_dir = config
        .logging
        .file_logging
        .then(|| config.logging.log_dir())
        .flatten()
        .filter(|dir| std::fs::create_dir_all(dir).is_ok());

    match file_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "genomechat.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(verbosity_filter(verbose.max(1)));
            tracing_subscriber::registry()
                .with(console)
                .with(file)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(console).init();
            None
        }
    }
}

fn prediction_logger(config: &FileConfig) -> Arc<dyn PredictionLogger> {
    match config
        .logging
        .prediction_log_path()
        .and_then(JsonlPredictionLogger::new)
    {
        Some(logger) => {
            info!("Prediction log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoPredictionLogger),
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let _log_guard = init_logging(cli.verbose, &config);
    info!("Starting genomechat");

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            warn!("Config issue: {}", issue);
        }
        bail!(
            "Invalid configuration:\n  {}",
            issues
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join("\n  ")
        );
    }

    let format = cli.output.unwrap_or(match config.output.format {
        FileOutputFormat::Text => OutputFormat::Text,
        FileOutputFormat::Json => OutputFormat::Json,
    });
    if !config.output.color || format == OutputFormat::Json {
        colored::control::set_override(false);
    }
    let output = OutputConfig {
        format,
        color: config.output.color,
        show_progress: !cli.quiet && config.output.show_progress,
    };

    // === Dependency Injection ===
    let http = build_http_client(Duration::from_secs(config.api.timeout_seconds))
        .context("Failed to build HTTP client")?;
    let mut factory = HttpTransportFactory::new(http, config.api.base_url.clone());
    if let Some(bridge) = config.sdk.to_bridge_config() {
        info!("SDK fallback via {}", bridge.command);
        factory = factory.with_sdk(bridge);
    }

    let use_case = HandleCommandUseCase::new(Arc::new(factory))
        .with_validator(config.validator())
        .with_params(config.dispatch.clone())
        .with_prediction_logger(prediction_logger(&config));

    let api_key = config
        .api
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty());
    let session = config.session.to_session(api_key);

    // Chat mode
    if cli.chat {
        let repl_config = ReplConfig {
            history_file: config.repl.history_file.as_ref().map(PathBuf::from),
            history_size: config.repl.history_size,
        };
        let mut repl = ChatRepl::new(use_case, session)
            .with_output(output)
            .with_repl_config(repl_config);
        repl.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single command mode - command is required
    let Some(text) = cli.command_text() else {
        bail!("A command is required. Use --chat for interactive mode or `help` for commands.");
    };

    let progress = progress_for(output.show_progress);
    let reply = use_case
        .execute_text(&session, &text, progress.as_ref())
        .await;

    println!("{}", ConsoleFormatter::render(&reply, output.format));

    Ok(if reply.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
