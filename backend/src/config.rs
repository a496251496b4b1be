//! Server configuration.
//!
//! Values come from CLI flags, falling back to environment variables
//! (a `.env` file is loaded at startup), then to the defaults below.

use clap::Args;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Default upload cap (1 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 1024 * 1024;

/// Options for the HTTP server
#[derive(Debug, Clone, Serialize, Deserialize, Args)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "MATRIX_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "MATRIX_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Maximum accepted request body, in bytes
    #[arg(long, env = "MATRIX_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
