/// Webserver middleware
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::logger::{self, LogTag};

/// Request logging middleware
///
/// One line per request at debug level (`--debug-webserver`); server errors
/// are raised to warnings so they show without the flag. Query strings are
/// only logged at verbose level.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    if let Some(query) = request.uri().query() {
        logger::verbose(
            LogTag::Webserver,
            &format!("{} {} query: {}", method, path, query),
        );
    }

    let response = next.run(request).await;

    let status = response.status();
    let line = format!(
        "{} {} -> {} ({} ms)",
        method,
        path,
        status.as_u16(),
        started.elapsed().as_millis()
    );

    if status.is_server_error() {
        logger::warning(LogTag::Webserver, &line);
    } else {
        logger::debug(LogTag::Webserver, &line);
    }

    response
}
