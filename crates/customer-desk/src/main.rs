/*
[INPUT]:  CLI arguments, YAML configuration file, OS shutdown signals
[OUTPUT]: Running customer desk TUI with graceful shutdown
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or shutdown handling
[UPDATE]: 2026-10-16 Add init subcommand, --check, and file logging
*/

mod cli;
mod tui;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use customer_desk::{CustomerApi, CustomerClient, DeskConfig, Route};

use crate::tui::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory};

const LOG_FILE_PREFIX: &str = "customer-desk.log";

#[derive(Parser, Debug)]
#[command(name = "customer-desk", version, about = "Terminal client for customer records")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    /// Overrides api.base_url from the config file
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,
    /// Route to open first, e.g. /customers/42
    #[arg(long = "open", value_name = "PATH", default_value = "/")]
    open: String,
    /// Validate configuration and exit
    #[arg(long = "check")]
    check: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactively write a configuration file
    Init {
        #[arg(long = "output", value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Command::Init { output }) = args.command {
        let output = output
            .or(args.config_path)
            .unwrap_or_else(DeskConfig::default_path);
        return cli::init::run_init(output);
    }

    let mut config = load_config(args.config_path.as_deref())?;
    if let Some(api_url) = args.api_url {
        config.api.base_url = api_url;
        config.validate().context("invalid --api-url")?;
    }

    if args.check {
        init_stderr_tracing(&args.log_level)?;
        info!(
            base_url = %config.api.base_url,
            page_size = config.ui.page_size,
            "check requested; configuration validated"
        );
        println!("configuration ok ({})", config.api.base_url);
        return Ok(());
    }

    let log_buffer: LogBufferHandle = Arc::new(Mutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
    let _file_guard = init_tui_tracing(&args.log_level, log_buffer.clone(), config.log_dir.as_deref())?;

    let client = CustomerClient::with_config(config.client_config()).context("build api client")?;
    info!(base_url = %client.base_url(), open = %args.open, "starting customer-desk");
    let api: Arc<dyn CustomerApi> = Arc::new(client);

    let shutdown = CancellationToken::new();
    setup_signal_handlers(shutdown.clone());

    let start = Route::parse(&args.open);
    tui::run_tui(api, config, start, log_buffer, shutdown).await?;
    info!("customer-desk stopped");
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<DeskConfig> {
    DeskConfig::load(path).context("load config")
}

fn init_stderr_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

/// The terminal belongs to the TUI, so logs go to the in-memory buffer and,
/// when `log_dir` is set, to a daily-rolling file.
fn init_tui_tracing(
    log_level: &str,
    buffer: LogBufferHandle,
    log_dir: Option<&Path>,
) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let buffer_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(LogWriterFactory::new(buffer));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create log dir {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(buffer_layer)
        .with(file_layer)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}

fn setup_signal_handlers(shutdown: CancellationToken) {
    let shutdown_clone = shutdown.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install SIGINT handler");
            return;
        }
        info!("received SIGINT");
        shutdown_clone.cancel();
    });

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            match signal(SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                    info!("received SIGTERM");
                    shutdown_clone.cancel();
                }
                Err(err) => {
                    warn!(error = %err, "failed to install SIGTERM handler");
                }
            }
        });
    }
}
