use clap::Parser;
use gpuprices::api;
use gpuprices::cli::commands::{Cli, Commands};
use gpuprices::config::Config;
use gpuprices::infrastructure::logging;
use gpuprices::PriceService;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    logging::init("info,tower_http=info");
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => cli.apply(config),
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let svc = match PriceService::new(&config) {
        Ok(svc) => svc,
        Err(e) => {
            tracing::error!(error = %e, db = %config.db_path, "failed to initialise service");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(svc, &config, cli.command).await {
        tracing::error!(error = %e, "command failed");
        std::process::exit(1);
    }
}

async fn run_command(
    svc: PriceService,
    config: &Config,
    cmd: Commands,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Serve { .. } => {
            if config.seed {
                svc.seed()?;
            }
            let app = api::router(Arc::new(svc));
            let listener = TcpListener::bind(&config.bind).await?;
            tracing::info!(
                addr = %listener.local_addr()?,
                acquisition = %config.acquisition_host,
                "price service listening"
            );
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
        Commands::Refresh => {
            let report = svc.refresh_prices().await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Seed => {
            let report = svc.seed()?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
