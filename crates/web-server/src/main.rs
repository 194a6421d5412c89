use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

// Entry point when running `cargo run -p web-server` directly: serves the
// dashboard API on the default port, bypassing the top-level CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    web_server::run_server(addr).await
}
