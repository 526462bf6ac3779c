//! HTTP surface: the `/Words` routes behind a permissive CORS layer.

pub mod error;
pub mod handlers;

use axum::extract::Request;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use log::{info, warn};
use std::io;
use tokio::net::TcpListener;

pub use error::{ApiErrorResponse, ErrorBody};
pub use handlers::AppState;

use crate::service::WordService;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS, PUT, DELETE";

/// All routes, wired to `service`.
pub fn router(service: WordService) -> Router {
    Router::new()
        .route("/Words/Search", post(handlers::search))
        .route("/Words/Update", post(handlers::update))
        .route("/Words/List", get(handlers::get_list))
        .route("/Words/Merge", post(handlers::merge))
        .route("/Words/CleanMerge", post(handlers::clean_merge))
        .route("/Words/LookupWord", get(handlers::lookup_word))
        .layer(middleware::from_fn(cors))
        .with_state(AppState::new(service))
}

/// Allow any origin; answer preflight requests directly.
async fn cors(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOWED_METHODS));
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("*"));
    response
}

/// Serve on `listener` until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the listener fails.
pub async fn serve(listener: TcpListener, service: WordService) -> io::Result<()> {
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("could not listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
