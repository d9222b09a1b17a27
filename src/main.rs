use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use company_directory::{
    config::Config, logo_cache::LogoCache, services::DirectoryClient, web::WebServer,
};

#[derive(Parser)]
#[command(name = "company-directory")]
#[command(version = "0.1.0")]
#[command(about = "A company directory service with paginated listings and logo resolution")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Directory backend base URL (overrides config file)
    #[arg(short = 'b', long, value_name = "URL")]
    backend_url: Option<String>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = if cli.log_level == "trace" {
        format!("company_directory={},tower_http=trace", cli.log_level)
    } else {
        format!("company_directory={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Company Directory Service v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration from specified file
    std::env::set_var("CONFIG_FILE", &cli.config);
    let mut config = Config::load()?;
    info!("Configuration loaded from: {}", cli.config);

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(backend_url) = cli.backend_url {
        config.backend.base_url = backend_url;
    }

    let directory = DirectoryClient::new(&config.backend.base_url)?;
    info!("Using directory backend: {}", directory.base_url());

    let logo_cache = Arc::new(LogoCache::new(
        directory.clone(),
        config.assets.fallback_logo.clone(),
    ));
    info!("Logo resolution cache initialized");

    let web_server = WebServer::new(config, directory, logo_cache).await?;

    info!(
        "Starting web server on {}:{}",
        web_server.host(),
        web_server.port()
    );
    web_server.serve().await?;

    Ok(())
}
