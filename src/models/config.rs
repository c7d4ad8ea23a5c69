//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    /// Base URL of the marketplace backend, e.g. `https://api.example.com`.
    pub backend_url: String,
    pub templates_dir: String,
    /// Session signing key, at least 64 bytes.
    pub secret: String,
}
