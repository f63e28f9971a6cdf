use std::sync::Arc;

use axum::{body::Body, http::Response, Router};

use crate::{contact::ContactSink, state::VersionInfo, AppState, ContactConfig};

pub fn create_test_app(sink: Arc<dyn ContactSink>, form_wired: bool) -> Router {
    let state = AppState {
        contact: ContactConfig {
            endpoint: url::Url::parse("http://127.0.0.1:9/exec").unwrap(),
            form_wired,
        },
        sink,
        versions: VersionInfo::from_build(),
    };

    crate::http_server::routes::make_router().with_state(state)
}

pub async fn response_body_string(response: Response<Body>) -> String {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    String::from_utf8(body_bytes.to_vec()).unwrap()
}
