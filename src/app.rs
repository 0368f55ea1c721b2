use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{append_log_handler, list_logs_handler};

pub struct App;

impl App {
    pub fn new() -> Self {
        Self
    }

    /// Routes only; repository and observability layers are attached by the
    /// caller. Method routing gives 405 for anything not registered here.
    pub fn router(self) -> Router {
        Router::new()
            .route("/", get(|| async { "Hello, World!" }))
            .route("/log", post(append_log_handler))
            .route("/logs", get(list_logs_handler))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
