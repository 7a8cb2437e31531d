use axum::{routing::get, Router};

use api::state::StreamSettings;

pub fn build_app(settings: StreamSettings) -> Router {
    api::app(settings).route("/health", get(healthcheck))
}

async fn healthcheck() -> &'static str {
    "ok"
}
