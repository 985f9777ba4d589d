use axum::http::{
    header::{ACCEPT, CONTENT_TYPE, ORIGIN},
    HeaderName, HeaderValue, Method,
};
use tower_http::cors::{Any, CorsLayer};

/// CORS policy of the contact API: every origin is allowed.
pub fn api_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            ORIGIN,
            HeaderName::from_static("x-requested-with"),
            CONTENT_TYPE,
            ACCEPT,
        ])
}

/// CORS policy of the documentation routes: only `origin` is allowed.
pub fn docs_cors(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET])
}
