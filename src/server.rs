use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;
use axum::{http::HeaderValue, middleware, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    decompression::RequestDecompressionLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};

use crate::{
    error::ErrorVerbosity,
    middleware::{
        cors::{api_cors, docs_cors},
        method_not_allowed::method_not_allowed,
        not_found::not_found,
        trace_headers::trace_headers,
        trace_response_body::trace_response_body,
    },
    route::{contacts, docs},
    state::ApiState,
    store::StoreConfig,
};

pub const DEFAULT_PORT: u16 = 8080;

fn default_socket_address() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT)
}

fn default_docs_allowed_origin() -> String {
    "http://localhost:8080".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_socket_address")]
    socket_address: SocketAddr,
    #[serde(default)]
    error_verbosity: ErrorVerbosity,
    /// The only origin allowed to access the documentation routes.
    #[serde(default = "default_docs_allowed_origin")]
    docs_allowed_origin: String,
    #[serde(default)]
    trace_response_body: bool,
    #[serde(default)]
    store: StoreConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            socket_address: default_socket_address(),
            error_verbosity: ErrorVerbosity::default(),
            docs_allowed_origin: default_docs_allowed_origin(),
            trace_response_body: false,
            store: StoreConfig::default(),
        }
    }
}

impl ServerConfig {
    pub async fn from_config_file(path: &str) -> anyhow::Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {path}"))?;

        let config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {path}"))?;

        Ok(config)
    }

    /// Overrides the listening port, keeping the configured IP.
    pub fn with_port(mut self, port: u16) -> Self {
        self.socket_address.set_port(port);
        self
    }

    pub fn socket_address(&self) -> SocketAddr {
        self.socket_address
    }
}

/// Builds the complete application router.
///
/// The contact API allows every origin while the documentation routes only allow
/// `docs_allowed_origin`.
pub fn app(state: ApiState, docs_allowed_origin: HeaderValue, trace_body: bool) -> Router {
    let mut api = contacts::app::app()
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            method_not_allowed::<ApiState>,
        ));

    if trace_body {
        api = api.layer(middleware::from_fn_with_state(
            state.clone(),
            trace_response_body::<ApiState>,
        ));
    }

    let api = api
        .layer(middleware::from_fn(trace_headers))
        .with_state(state)
        .layer(api_cors());

    let docs = docs::app().layer(docs_cors(docs_allowed_origin));

    Router::new().merge(docs).merge(api).layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                    .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                    .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
            )
            .layer(RequestDecompressionLayer::new())
            .layer(CompressionLayer::new()),
    )
}

pub struct Server {
    config: ServerConfig,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let docs_allowed_origin = HeaderValue::from_str(&self.config.docs_allowed_origin)
            .context("Invalid docs allowed origin")?;

        let store = self
            .config
            .store
            .connect()
            .await
            .context("Failed to connect to the contact store")?;

        let state = ApiState::new(self.config.error_verbosity, store);
        let app = app(state, docs_allowed_origin, self.config.trace_response_body);

        tracing::info!(addr = %self.config.socket_address, "Starting server");

        let listener = TcpListener::bind(&self.config.socket_address)
            .await
            .context("Bind failed")?;

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("CTRL+C received"),
            Err(err) => {
                tracing::error!(%err, "Failed to install CTRL+C signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                tracing::info!("SIGTERM received");
            }
            Err(err) => {
                tracing::error!(%err, "Failed to install SIGTERM signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}
