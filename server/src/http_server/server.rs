use std::net::SocketAddr;

use axum::Router;
use color_eyre::eyre::WrapErr;
use tokio::net::TcpListener;

use super::trace::Tracer;
use crate::state::ServerConfig;

pub(crate) async fn run_server(routes: Router, config: &ServerConfig) -> crate::Result<()> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http()
        .make_span_with(Tracer)
        .on_response(Tracer);

    let app = routes.layer(trace_layer);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on port {}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err("Failed to open port")?;

    let addr = listener.local_addr()?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .wrap_err("Failed to run server")
}
