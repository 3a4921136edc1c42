use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/spas/:id/bookings", post(handlers::booking::create_booking))
        .route("/api/spas/:id/bookings", get(handlers::booking::get_reserved_slots))
        .route(
            "/api/customers/:id/bookings",
            get(handlers::booking::get_customer_bookings),
        )
}
