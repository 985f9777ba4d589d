use axum::{extract::Request, middleware::Next, response::Response};

/// Middleware to trace the headers of every contact API exchange.
pub async fn trace_headers(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    tracing::trace!(%method, %path, request_headers = ?req.headers(), "Request headers");

    let response = next.run(req).await;

    tracing::trace!(
        %method,
        %path,
        status = %response.status(),
        response_headers = ?response.headers(),
        "Response headers"
    );

    response
}
