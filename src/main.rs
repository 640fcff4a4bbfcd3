use std::sync::Arc;

use pickup_dispatch::config::{AppConfig, CorsPolicy};
use pickup_dispatch::notify::SmtpNotifier;
use pickup_dispatch::server::{AppState, pickup_routes};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Install rustls crypto provider before any TLS usage
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Arc::new(AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }));

    eprintln!("📦 Pickup Dispatch v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Listening: http://{}", config.bind_addr());
    eprintln!("   Routing file: {}", config.routing_file.display());
    eprintln!(
        "   CORS: {}",
        match &config.cors {
            CorsPolicy::Any => "any origin".to_string(),
            CorsPolicy::AllowList(origins) => origins.join(", "),
        }
    );
    match config.smtp.require() {
        Ok(smtp) => eprintln!("   SMTP: {}:{} as {}\n", smtp.host, smtp.port, smtp.from_email),
        Err(e) => eprintln!("   SMTP: not ready ({e}); pickup requests will fail\n"),
    }

    let state = AppState {
        config: Arc::clone(&config),
        notifier: Arc::new(SmtpNotifier::new(Arc::clone(&config))),
    };
    let app = pickup_routes(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "Pickup dispatch server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Pickup dispatch server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
