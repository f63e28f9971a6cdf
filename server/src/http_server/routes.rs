use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Redirect},
    routing::get,
    Router,
};
use maud::html;

use super::{pages, templates::base, CONTACT_STYLES};
use crate::AppState;

pub(crate) fn make_router() -> Router<AppState> {
    Router::new()
        .route("/_", get(pages::versions::versions))
        .route(
            "/styles/contact.css",
            get(|| async { ([(header::CONTENT_TYPE, "text/css")], CONTACT_STYLES) }),
        )
        .route("/", get(|| async { Redirect::permanent("/contact") }))
        .route(
            "/contact",
            get(pages::contact::contact_get).post(pages::contact::contact_post),
        )
        .fallback(fallback)
}

async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        base(
            "Page not found",
            html! {
              div class="max-w-xl mx-auto text-center mt-24 font-poppins" {
                h1 class="text-3xl font-bold mb-4 font-raleway text-brand" { "Page not found" }
                a class="underline" href="/contact" { "Get in touch with us" }
              }
            },
        ),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use super::*;
    use crate::{
        contact::submit::tests::StubSink,
        http_server::test_helpers::{create_test_app, response_body_string},
    };

    fn app() -> Router {
        create_test_app(Arc::new(StubSink::unreachable()), false)
    }

    #[tokio::test]
    async fn test_root_redirects_to_contact() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/contact");
    }

    #[tokio::test]
    async fn test_stylesheet() {
        let response = app()
            .oneshot(Request::get("/styles/contact.css").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");

        let body = response_body_string(response).await;
        assert!(body.contains("@keyframes underline-pulse"));
    }

    #[tokio::test]
    async fn test_versions() {
        let response = app()
            .oneshot(Request::get("/_").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_body_string(response).await;
        assert!(body.contains(env!("CARGO_PKG_VERSION")));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let response = app()
            .oneshot(Request::get("/products").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response_body_string(response).await;
        assert!(body.contains(r#"href="/contact""#));
    }
}
