use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/logs", get(handlers::list_logs).post(handlers::create_log))
        .route(
            "/api/logs/:id",
            put(handlers::update_log).delete(handlers::delete_log),
        )
        .route("/api/chart", get(handlers::get_chart))
        .route("/api/export", get(handlers::export_logs))
        .route("/api/reminder", get(handlers::get_reminder))
        .with_state(state)
}
