use std::net::SocketAddr;

use axum::{response::Html, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{pages, state::AppState, users};

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(homepage))
        .route("/health", get(|| async { "ok" }))
        .merge(users::router())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}

async fn homepage() -> Html<&'static str> {
    Html(pages::HOMEPAGE_HTML)
}

pub async fn serve(app: Router, addr: &str) -> anyhow::Result<()> {
    let addr: SocketAddr = addr.parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
