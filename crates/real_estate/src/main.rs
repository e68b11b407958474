use clap::Parser;
use std::sync::Arc;

use analyst_core::config::Settings;
use analyst_core::web::server;

mod dto;
mod models;
mod routes;

const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, Parser)]
#[command(name = "real_estate_api")]
struct Args {
    /// Port to listen on. Overrides PORT.
    #[arg(long)]
    port: Option<u16>,

    /// Seed the scorer for reproducible responses. Overrides SCORER_SEED.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    let _sentry_guard = server::init_sentry(&settings);
    server::init_tracing();

    let args = Args::parse();

    if let Err(err) = run(&settings, args).await {
        sentry_anyhow::capture_anyhow(&err);
        tracing::error!(error = %err, "real estate api failed");
        return Err(err);
    }
    Ok(())
}

async fn run(settings: &Settings, args: Args) -> anyhow::Result<()> {
    let analyzer = routes::build_analyzer(settings, args.seed)?;
    let app = routes::router(Arc::new(analyzer));

    let port = args.port.unwrap_or_else(|| settings.port_or(DEFAULT_PORT));
    let addr = server::bind_addr(&settings.host, port)?;

    tracing::info!(%addr, "starting real estate analysis api");
    server::serve(app, addr).await
}
