//! Taskdeck - task and project management API server.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use taskdeck_core::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Taskdeck - task and project management API
#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host to bind to
    #[arg(long, env = "TASKDECK_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "TASKDECK_PORT", default_value = "3030")]
    port: u16,
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "taskdeck_core=debug,taskdeck_web=debug,tower_http=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let store = Arc::new(Store::new());

    println!();
    println!("  {} {}", "Taskdeck".cyan().bold(), "API Server".bold());
    println!();
    println!(
        "  {}  http://{}:{}/projects",
        "API".green(),
        cli.host,
        cli.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    taskdeck_web::run_server(store, &cli.host, cli.port).await?;

    Ok(())
}
