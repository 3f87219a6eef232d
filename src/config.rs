//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default origin of the development frontend.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface the HTTP server binds to
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
    /// The one origin allowed to make cross-origin requests
    pub cors_origin: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_HOST` - Bind interface (default: 0.0.0.0)
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `CORS_ORIGIN` - Trusted frontend origin (default: http://localhost:3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            cors_origin: env::var("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
        }
    }

    /// Socket address to bind; an unparseable host falls back to all interfaces.
    pub fn bind_addr(&self) -> SocketAddr {
        let ip = self
            .server_host
            .parse::<IpAddr>()
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        SocketAddr::new(ip, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 5000,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}
