use census_service::auth::load_admin_credentials;
use census_service::{build_router, ServiceState};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "censusd", version, about = "Census participant registry REST service")]
struct Cli {
    /// Socket address to bind, e.g. 127.0.0.1:8080
    #[arg(long, default_value = "127.0.0.1:8080", env = "CENSUS_LISTEN")]
    listen: SocketAddr,
    /// JSON file holding the admin login/password pair.
    #[arg(long, default_value = "admin_credentials.json", env = "CENSUS_CREDENTIALS")]
    credentials: PathBuf,
    /// Start with the built-in admin pair when the credentials file is missing.
    #[arg(long, default_value_t = false)]
    allow_default_credentials: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "census_service=info,info".to_string()),
        )
        .init();

    let cli = Cli::parse();
    let credentials = load_admin_credentials(&cli.credentials, cli.allow_default_credentials)?;
    let state = ServiceState::new(credentials);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(cli.listen).await?;
    info!("census-service listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("census-service shutting down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
