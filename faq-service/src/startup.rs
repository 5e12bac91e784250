//! Application startup and lifecycle management.
//!
//! Everything a request needs (catalog, completion provider) is built here
//! once and handed to handlers through [`AppState`].

use crate::config::FaqConfig;
use crate::handlers;
use crate::models::FaqCatalog;
use crate::services::providers::gemini::GeminiTextProvider;
use crate::services::providers::TextProvider;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{make_request_span, request_id_middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<FaqCatalog>,
    pub text_provider: Arc<dyn TextProvider>,
}

impl AppState {
    pub fn new(catalog: FaqCatalog, text_provider: Arc<dyn TextProvider>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            text_provider,
        }
    }
}

/// Build the HTTP router.
///
/// CORS mirrors any origin and allows credentials; this is a prototype
/// surface with no authentication.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/ask", post(handlers::ask))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .fallback(handlers::not_found)
        .layer(
            TraceLayer::new_for_http().make_span_with(make_request_span::<axum::body::Body>),
        )
        .layer(from_fn(request_id_middleware))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// Fails before binding if the dataset or the Gemini client cannot be
    /// set up, so the process never serves with an empty catalog.
    pub async fn build(config: FaqConfig) -> Result<Self, AppError> {
        let gemini_config = config.gemini();
        let model = gemini_config.model.clone();
        let text_provider: Arc<dyn TextProvider> = Arc::new(
            GeminiTextProvider::new(gemini_config).map_err(|e| {
                tracing::error!("Failed to initialize Gemini text provider: {}", e);
                AppError::ConfigError(anyhow::Error::new(e))
            })?,
        );

        tracing::info!(model = %model, "Initialized Gemini text provider");

        Self::build_with_provider(config, text_provider).await
    }

    /// Build the application around an already constructed provider.
    pub async fn build_with_provider(
        config: FaqConfig,
        text_provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let catalog = FaqCatalog::load(&config.dataset.path).map_err(|e| {
            tracing::error!("Failed to load FAQ dataset: {}", e);
            AppError::ConfigError(anyhow::Error::new(e))
        })?;

        tracing::info!(
            path = %config.dataset.path.display(),
            entries = catalog.len(),
            "Loaded FAQ catalog"
        );

        let state = AppState::new(catalog, text_provider);

        // Port 0 picks a random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("FAQ service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}
