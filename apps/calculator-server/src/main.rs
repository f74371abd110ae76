use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use calckit_bootstrap::{AppConfig, CliArgs};
use calculator::{CalculatorConfig, MODULE_NAME, Service};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use tokio::net::TcpListener;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Calculator Server - web form and JSON API
#[derive(Parser)]
#[command(name = "calculator-server")]
#[command(about = "Calculator Server - web form and JSON API")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.clone(),
        port: cli.port,
        verbose: cli.verbose,
    };

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    config.apply_cli_overrides(&args);

    calckit_bootstrap::init_logging(&config.logging, "info")?;
    tracing::info!("Calculator server starting");

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    // Dispatch subcommands (default: run)
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(&config).await,
        Commands::Check => check_config(&config),
    }
}

fn build_service(config: &AppConfig) -> Result<Service> {
    let module_cfg: CalculatorConfig = config.module_config(MODULE_NAME)?;
    Ok(Service::new(module_cfg))
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    build_service(config)?;
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn run_server(config: &AppConfig) -> Result<()> {
    let service = build_service(config)?;
    tracing::info!(
        max_factorial_operand = service.config().max_factorial_operand,
        "calculator module configured"
    );

    let app = apply_trace_layer(calculator::router(Arc::new(service)));

    let listener = TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(calckit_bootstrap::shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("Calculator server stopped");
    Ok(())
}

fn apply_trace_layer(router: Router) -> Router {
    use tower_http::trace::TraceLayer;
    use tracing::field::Empty;

    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &axum::http::Response<axum::body::Body>,
                 latency: Duration,
                 span: &tracing::Span| {
                    let ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", ms);
                },
            ),
    )
}
