use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/spas", post(handlers::spa::create_spa))
        .route("/api/spas", get(handlers::spa::list_spas))
        .route("/api/spas/:id", get(handlers::spa::get_spa))
}
