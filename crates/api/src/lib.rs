pub mod routes;
pub mod state;
mod ws;

use axum::Router;

use crate::state::{AppState, StreamSettings};

pub fn app(settings: StreamSettings) -> Router {
    routes::router(AppState::new(settings))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{self, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::state::StreamSettings;

    #[tokio::test]
    async fn info_route_describes_the_stream() {
        let app = crate::app(StreamSettings::default());

        let response = app
            .oneshot(Request::get("/info").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let info: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(info["tick_interval_ms"], 1_000);
        assert_eq!(info["sentences"][0], "GPGLL");
        assert_eq!(info["start_position"]["latitude"], 37.8199);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = crate::app(StreamSettings::default());

        let response = app
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
