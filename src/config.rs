use std::env;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use crate::error::ListenError;

/// Bind target defaults. These match the deployed probe; override with
/// UDP_IP / UDP_PORT in the environment (or a .env file).
pub const DEFAULT_ADDR: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 139);
pub const DEFAULT_PORT: u16 = 8081;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerConfig {
    pub addr: Ipv4Addr,
    pub port: u16,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR,
            port: DEFAULT_PORT,
        }
    }
}

impl ListenerConfig {
    /// Reads UDP_IP / UDP_PORT from the environment, falling back to the
    /// built-in defaults when unset.
    pub fn from_env() -> Result<Self, ListenError> {
        let addr = env::var("UDP_IP").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let port = env::var("UDP_PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());

        let addr = addr
            .parse::<Ipv4Addr>()
            .map_err(|e| ListenError::Config(format!("invalid UDP_IP {addr:?}: {e}")))?;
        let port = port
            .parse::<u16>()
            .map_err(|e| ListenError::Config(format!("invalid UDP_PORT {port:?}: {e}")))?;

        Ok(Self { addr, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.addr, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_deployed_endpoint() {
        let config = ListenerConfig::default();
        assert_eq!(config.socket_addr(), "192.168.1.139:8081".parse().unwrap());
    }

    #[test]
    fn socket_addr_is_v4() {
        let config = ListenerConfig {
            addr: Ipv4Addr::LOCALHOST,
            port: 9999,
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9999");
    }
}
