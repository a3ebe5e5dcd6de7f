/**
 * Members Only Server Entry Point
 *
 * This is the main entry point for the message board server.
 * It loads the configuration, initializes tracing and serves the Axum app
 * until Ctrl+C or SIGTERM.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use members_only::backend::server::{create_app, load_config, shutdown_signal};

    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let config = load_config()?;

    // RUST_LOG wins over the configured filter
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_filter.clone());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Server initialization started");

    let addr = config.listen_addr();
    let app = create_app(config).await?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("[STARTUP] Starting server on {}", addr);

    app.serve(listener, shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin members-only-server --features ssr");
    std::process::exit(1);
}
