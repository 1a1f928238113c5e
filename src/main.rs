//! Attendance Engine server entry point

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::CalendarLoader;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Working-day and attendance percentage service for school dashboards
#[derive(Parser, Debug)]
#[command(name = "attendance-engine")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the school calendar directory
    #[arg(short, long, default_value = "./config/default")]
    config: String,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if args.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!(
        "Starting Attendance Engine v{}",
        env!("CARGO_PKG_VERSION")
    );

    let calendar = CalendarLoader::load(&args.config)?;
    let router = create_router(AppState::new(calendar));

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    tracing::info!(address = %args.bind, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
