use clap::{Parser, Subcommand};
use comfy_table::Table;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Pulseboard dashboard backend.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variable overrides from a .env file, if present.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => handle_serve(args).await,
        Commands::ShowBaseline => {
            handle_show_baseline();
            Ok(())
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// The backend for a financial analytics dashboard: serves normalized KPI,
/// trend, alert and recommendation payloads over HTTP.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard API server.
    Serve(ServeArgs),
    /// Print the baseline datasets the dashboard falls back to.
    ShowBaseline,
}

#[derive(Parser)]
struct ServeArgs {
    /// Overrides the host from config.toml (e.g., "127.0.0.1").
    #[arg(long)]
    host: Option<String>,

    /// Overrides the port from config.toml.
    #[arg(long)]
    port: Option<u16>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Loads the configuration, applies CLI overrides and starts the server.
async fn handle_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = configuration::load_config()?;

    let host = args.host.unwrap_or(config.server.host);
    let port = args.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;

    tracing::info!(%addr, "Starting the dashboard API server.");
    web_server::run_server(addr).await
}

/// Renders the baseline KPI and alert datasets as terminal tables, which is
/// handy for eyeballing what a fresh dashboard will display.
fn handle_show_baseline() {
    let mut kpi_table = Table::new();
    kpi_table.set_header(vec!["ID", "Label", "Value", "Format", "Delta", "Status"]);
    for kpi in baseline::kpis() {
        kpi_table.add_row(vec![
            kpi.id.clone(),
            kpi.label.clone(),
            kpi.value.to_string(),
            format!("{:?}", kpi.format),
            kpi.delta.map(|d| d.to_string()).unwrap_or_default(),
            kpi.status.map(|s| format!("{s:?}")).unwrap_or_default(),
        ]);
    }
    println!("Baseline KPIs:\n{kpi_table}");

    let mut alert_table = Table::new();
    alert_table.set_header(vec!["ID", "Severity", "Title"]);
    for alert in baseline::alerts() {
        alert_table.add_row(vec![
            alert.id.clone(),
            format!("{:?}", alert.severity),
            alert.title.clone(),
        ]);
    }
    println!("\nBaseline alerts:\n{alert_table}");
}
