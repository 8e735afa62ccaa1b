//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, session, view_error intercept)
//! - Bind server to listener and shut down gracefully

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::client::TransportError;
use crate::config::GatewayConfig;
use crate::errors::SessionErrorStores;
use crate::http::handlers::{
    call_handler, health, list_calls, not_found, view_error_handler, view_error_intercept,
};
use crate::http::session::session_middleware;
use crate::service::ReactoApiService;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReactoApiService>,
    pub sessions: SessionErrorStores,
    pub cookie_name: Arc<str>,
}

/// HTTP host for the gateway.
pub struct GatewayServer {
    router: Router,
    state: AppState,
    config: GatewayConfig,
}

impl GatewayServer {
    /// Create a new server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, TransportError> {
        let service = ReactoApiService::from_config(&config)?;
        Ok(Self::with_service(config, service))
    }

    /// Create a server around an already built service.
    pub fn with_service(config: GatewayConfig, service: ReactoApiService) -> Self {
        let state = AppState {
            service: Arc::new(service),
            sessions: SessionErrorStores::new(config.errors.capacity).with_limits(
                config.session.max_sessions,
                Duration::from_secs(config.session.idle_ttl_secs),
            ),
            cookie_name: Arc::from(config.session.cookie_name.as_str()),
        };
        let router = Self::build_router(&config, state.clone());
        Self {
            router,
            state,
            config,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/calls", get(list_calls))
            .route("/api/{call}", post(call_handler))
            .route("/errors/{id}", get(view_error_handler))
            .route("/health", get(health))
            .fallback(not_found)
            .layer(middleware::from_fn_with_state(state.clone(), view_error_intercept))
            .layer(middleware::from_fn_with_state(state.clone(), session_middleware))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.listener.request_timeout_secs,
                    ))),
            )
    }

    /// Run the server until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.url,
            calls = self.state.service.catalog().len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A clone of the router, for embedding or driving without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
