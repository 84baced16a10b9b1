use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/professors/:id/availability",
            get(handlers::availability::get_availability)
                .post(handlers::availability::submit_change_set),
        )
        .route(
            "/api/availability/working-hours",
            get(handlers::availability::get_working_hours),
        )
}
