use std::path::PathBuf;

use clap::Parser;
use courier_core::EventBus;
use courier_core::app::AppBuilder;
use courier_core::domain::ContentCreated;
use courier_core::typed::Event;
use courier_server::config::ServerConfig;
use courier_server::routes::{AppState, router};
use courier_server::telemetry::init_tracing;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "courier-server", about = "content -> space event demo over HTTP")]
struct Cli {
    /// Optional TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;
    init_tracing(&config.log_filter)?;

    // (A) 組み立て: EventBus はこのプロセスの runtime に紐付く
    let app = AppBuilder::new(EventBus::current()?)
        .expect_events(&[ContentCreated::TYPE])
        .build()?;

    // (B) HTTP
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "courier-server listening");

    axum::serve(listener, router(AppState::new(app.content())))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // 実行中の購読者タスクは待たない（fire-and-forget）
    info!("courier-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    // ignore error: without a signal handler we simply run until killed
    let _ = tokio::signal::ctrl_c().await;
}
