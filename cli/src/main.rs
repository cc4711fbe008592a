//! CLI entrypoint for price-predictor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use predictor_application::{
    PredictBatchUseCase, PredictSingleInput, PredictSingleUseCase, PredictionContext, TableCodec,
};
use predictor_infrastructure::{ArtifactLoader, ConfigLoader, CsvTableCodec, FileConfig};
use predictor_presentation::{AppState, Cli, Command, ConsoleFormatter, WebSettings, serve};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let command = cli.command();
    let config = resolve_config(&cli, &command)?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!();
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    info!("Starting price-predictor");

    // === Dependency Injection ===
    let paths = config.artifacts.paths();
    let artifacts = ArtifactLoader::load(&paths).context("failed to load model artifacts")?;
    let context = Arc::new(artifacts.into_context());
    let codec: Arc<dyn TableCodec> = Arc::new(CsvTableCodec::new());

    match command {
        Command::Serve { .. } => run_server(&config, context, codec).await,
        Command::Batch { input, output } => {
            run_batch(&config, context, codec, &input, output.as_deref()).await
        }
        Command::Predict { fields } => run_predict(context, fields),
    }
}

/// Load configuration files (unless disabled) and apply command-line overrides
fn resolve_config(cli: &Cli, command: &Command) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    if let Some(root) = &cli.root {
        config.artifacts.root = root.clone();
    }
    if let Command::Serve { host, port } = command {
        if let Some(host) = host {
            config.server.host = host.clone();
        }
        if let Some(port) = port {
            config.server.port = *port;
        }
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

async fn run_server(
    config: &FileConfig,
    context: Arc<PredictionContext>,
    codec: Arc<dyn TableCodec>,
) -> Result<()> {
    let settings = WebSettings {
        prediction_column: config.output.prediction_column.clone(),
        download_name: config.output.download_name.clone(),
        max_upload_bytes: config.server.max_upload_bytes,
    };
    let state = AppState::new(context, codec, settings);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    let shutdown = CancellationToken::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown requested"),
            Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
        }
        trigger.cancel();
    });

    serve(listener, state, shutdown).await?;
    Ok(())
}

async fn run_batch(
    config: &FileConfig,
    context: Arc<PredictionContext>,
    codec: Arc<dyn TableCodec>,
    input: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let upload = tokio::fs::read(input)
        .await
        .with_context(|| format!("failed to read {}", input.display()))?;

    let use_case = PredictBatchUseCase::new(context, codec)
        .with_prediction_column(config.output.prediction_column.clone());
    let result = tokio::task::spawn_blocking(move || use_case.execute(&upload))
        .await
        .context("prediction worker failed")?;
    let result = match result {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
            return Err(e.into());
        }
    };

    let destination = match output {
        Some(path) => {
            tokio::fs::write(path, &result.content)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            path.to_path_buf()
        }
        None => {
            std::io::stdout().write_all(&result.content)?;
            PathBuf::from("<stdout>")
        }
    };

    eprintln!(
        "{}",
        ConsoleFormatter::batch_summary(
            result.rows,
            &config.output.prediction_column,
            &destination
        )
    );
    Ok(())
}

fn run_predict(context: Arc<PredictionContext>, fields: Vec<(String, String)>) -> Result<()> {
    let use_case = PredictSingleUseCase::new(context);
    let input: PredictSingleInput = fields.into_iter().collect();

    match use_case.execute(&input) {
        Ok(prediction) => {
            println!("{}", ConsoleFormatter::prediction(&prediction));
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
            Err(e.into())
        }
    }
}
