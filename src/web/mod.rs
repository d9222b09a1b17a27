//! Web layer module
//!
//! This module provides the HTTP interface for the company directory
//! service. Handlers are thin: they validate input at the boundary, delegate
//! to the directory client and logo cache, and map failures to HTTP status
//! codes.

use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::{config::Config, logo_cache::LogoCache, services::DirectoryClient};

pub mod api;
pub mod handlers;

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub async fn new(
        config: Config,
        directory: DirectoryClient,
        logo_cache: Arc<LogoCache>,
    ) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;

        let app = Self::create_router(AppState {
            config,
            directory,
            logo_cache,
        });

        Ok(Self { app, addr })
    }

    /// Create the router with all routes and middleware
    fn create_router(state: AppState) -> Router {
        Router::new()
            // Health check endpoint
            .route("/health", get(handlers::health_check))
            // API v1 routes
            .nest("/api/v1", Self::api_v1_routes())
            // Navigation surface: one composed view per page link
            .route("/page/:page", get(api::page_view))
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// API v1 routes
    fn api_v1_routes() -> Router<AppState> {
        Router::new()
            .route("/companies", get(api::list_companies))
            .route("/company-images/:id", get(api::get_company_image))
    }

    /// Start the web server
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, self.app).await?;
        Ok(())
    }

    /// The configured router, for driving the service in tests.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub directory: DirectoryClient,
    pub logo_cache: Arc<LogoCache>,
}
