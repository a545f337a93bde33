use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use super::errors::ConfigError;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port shared by the UDP and TCP listeners
    pub dns_port: u16,

    pub bind_address: String,

    /// Idle timeout for TCP connections
    pub tcp_timeout_secs: u64,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.bind_address.parse().map_err(|_| {
            ConfigError::Validation(format!("Invalid bind address: {}", self.bind_address))
        })?;
        Ok(SocketAddr::new(ip, self.dns_port))
    }

    pub fn tcp_timeout(&self) -> Duration {
        Duration::from_secs(self.tcp_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_port: 8053,
            bind_address: "0.0.0.0".to_string(),
            tcp_timeout_secs: 10,
        }
    }
}
