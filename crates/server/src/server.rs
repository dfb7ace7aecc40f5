use axum::{
    Router,
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};

use crate::{balances, expenses};

async fn trace_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    let status = response.status();
    if status.is_server_error() {
        tracing::error!(%method, %path, %status, "request failed");
    } else {
        tracing::debug!(%method, %path, %status, "request served");
    }
    response
}

async fn health() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Builds the API router. The service keeps no state between requests.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/balances", post(balances::summary))
        .route("/settlements", post(balances::settlements))
        .route("/expenses/validate", post(expenses::validate))
        .layer(middleware::from_fn(trace_request))
}

pub async fn run_with_listener(listener: tokio::net::TcpListener) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router()).await
}
