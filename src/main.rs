use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use employee_payroll::api::{AppState, create_router};
use employee_payroll::config::ConfigLoader;
use employee_payroll::service::EmployeeService;
use employee_payroll::store::{EmployeeStore, InMemoryEmployeeStore, JsonFileEmployeeStore};

#[derive(Parser, Debug)]
#[command(name = "employee-payroll", version, about = "Employee records and salary API")]
struct Cli {
    #[arg(long, env = "PAYROLL_HOST", default_value = "127.0.0.1")]
    host: IpAddr,
    #[arg(long, env = "PAYROLL_PORT", default_value_t = 8080)]
    port: u16,
    #[arg(
        long,
        env = "PAYROLL_CONFIG",
        value_name = "FILE",
        help = "Salary rates YAML; built-in rates are used when omitted"
    )]
    config: Option<PathBuf>,
    #[arg(
        long,
        env = "PAYROLL_DATA_FILE",
        value_name = "FILE",
        help = "Persist employees to this JSON file; in-memory when omitted"
    )]
    data_file: Option<PathBuf>,
    #[arg(
        long,
        env = "PAYROLL_API_TOKEN",
        hide_env_values = true,
        help = "Bearer token required on employee routes"
    )]
    api_token: Option<String>,
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    let loader = match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading rates from {}", path.display()))?,
        None => ConfigLoader::default(),
    };

    let store: Arc<dyn EmployeeStore> = match &cli.data_file {
        Some(path) => Arc::new(
            JsonFileEmployeeStore::open(path)
                .await
                .with_context(|| format!("opening employee file {}", path.display()))?,
        ),
        None => {
            warn!("No data file configured; employees will not survive a restart");
            Arc::new(InMemoryEmployeeStore::new())
        }
    };

    let mut state = AppState::new(EmployeeService::new(store, loader.into_config()));
    match cli.api_token.filter(|token| !token.trim().is_empty()) {
        Some(token) => state = state.with_api_token(token.trim()),
        None => warn!("No API token configured; employee routes are unauthenticated"),
    }

    let addr = SocketAddr::new(cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
    }
}
