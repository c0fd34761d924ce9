//! Server-side render server (v1)
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────────────┐
//!                       │                    SSR SERVER                         │
//!                       │                                                       │
//!   Client Request      │  ┌──────────┐   ┌──────────┐   ┌────────┐            │
//!   ────────────────────┼─▶│ security │──▶│  error   │──▶│ timing │            │
//!                       │  │ headers  │   │ boundary │   │ probe  │            │
//!                       │  └──────────┘   └──────────┘   └───┬────┘            │
//!                       │                                     ▼                 │
//!                       │                  ┌──────────┐   ┌────────┐           │
//!                       │   static file ◀──│  static  │──▶│ router │           │
//!                       │                  │  assets  │   └───┬────┘           │
//!                       │                  └──────────┘       │                 │
//!                       │                        /ping ◀──────┤                 │
//!                       │                                     ▼                 │
//!                       │  ┌─────────────────────────────────────────────────┐ │
//!                       │  │ render pipeline                                  │ │
//!                       │  │  store → first snapshot → render → template      │ │
//!                       │  └─────────────────────────────────────────────────┘ │
//!                       └──────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use ssr_server::app::WelcomeApp;
use ssr_server::http::HttpServer;
use ssr_server::lifecycle::{startup, Shutdown, Startup};
use ssr_server::observability::{logging, metrics};
use ssr_server::render::RenderPipeline;

#[derive(Parser)]
#[command(name = "ssr-server")]
#[command(about = "Server-side render server", long_about = None)]
struct Args {
    /// Optional TOML configuration file. `PORT` overrides the listener port.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let Startup { config, template } = startup::load(args.config.as_deref())?;

    logging::init(&config.observability);
    tracing::info!("ssr-server v0.1.0 starting");
    tracing::info!(
        port = config.listener.port,
        static_enabled = config.static_files.enabled,
        render_timeout_ms = config.render.timeout_ms,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let pipeline = RenderPipeline::new(
        Arc::new(WelcomeApp::default()),
        Arc::new(template),
        config.render.timeout(),
    );

    let listener = startup::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    shutdown.trigger_on_termination();

    let server = HttpServer::new(config, Arc::new(pipeline));
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
