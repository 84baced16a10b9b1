//! # Availability API
//!
//! REST surface of the availability store: professors' confirmed hourly
//! availability can be read, and change-sets produced by a slot engine are
//! validated against the working hours and applied.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Map domain errors to HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! Persistence is reached through the
//! [`AvailabilityStore`](availability_core::store::AvailabilityStore) trait,
//! so the server runs the same over Postgres or the in-memory store.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error mapping
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use availability_core::{store::AvailabilityStore, working_hours::WorkingHours};
use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Backing store for professor availability
    pub store: Arc<dyn AvailabilityStore>,
    /// Window that incoming additions are validated against
    pub working_hours: WorkingHours,
}

/// Builds the application router with all routes attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoint
        .merge(routes::health::routes())
        // Availability endpoints
        .merge(routes::availability::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and store
///
/// Initializes logging, applies the CORS, tracing and timeout layers, and
/// serves until the listener fails.
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn AvailabilityStore>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState {
        store,
        working_hours: config.working_hours.clone(),
    });
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .wrap_err_with(|| format!("Invalid CORS origin: {}", origin))
            })
            .collect::<Result<Vec<_>>>()?;

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request tracing and timeout middleware
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        "Server listening on http://{} (working hours {:02}:00-{:02}:00)",
        addr,
        config.working_hours.start_hour(),
        config.working_hours.end_hour()
    );
    axum::serve(listener, app).await?;

    Ok(())
}
