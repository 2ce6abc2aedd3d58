// src/config.rs

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use std::path::PathBuf;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::cli::args::Args;
use crate::constants::{DEFAULT_CORS_ORIGIN, DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_PORT};

/// HTTP server configuration, resolved from the command line and environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// SQLite database file
    pub database: PathBuf,

    /// Host to bind to (default: "0.0.0.0")
    pub host: String,

    /// Port to bind to (default: 3001)
    pub port: u16,

    /// The one origin allowed by CORS (default: "http://localhost:3000")
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}

impl From<&Args> for ServerConfig {
    fn from(args: &Args) -> Self {
        Self {
            database: args.database.clone(),
            host: args.host.clone(),
            port: args.port,
            cors_origin: args.cors_origin.clone(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// CORS policy admitting only the configured origin. Requests from any
    /// other origin get no `Access-Control-Allow-Origin` header.
    pub fn cors_layer(&self) -> Result<CorsLayer> {
        let origin = HeaderValue::from_str(&self.cors_origin)
            .with_context(|| format!("Invalid CORS origin: {:?}", self.cors_origin))?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list([origin]))
            .allow_methods([
                Method::GET,
                Method::HEAD,
                Method::PUT,
                Method::PATCH,
                Method::POST,
                Method::DELETE,
            ])
            .allow_headers(AllowHeaders::mirror_request()))
    }
}
