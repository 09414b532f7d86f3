//! Forward DNS resolution using the system resolver.

use ipatlas_core::{AtlasError, Result};
use std::net::{IpAddr, Ipv4Addr};
use tracing::debug;

/// DNS resolver for domain queries
#[derive(Debug, Clone, Copy, Default)]
pub struct DnsResolver {
    _private: (),
}

impl DnsResolver {
    /// Create a resolver using the system configuration
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Resolve a domain name to a single IPv4 address.
    ///
    /// NXDOMAIN, transport failures, and answers with no A record all
    /// map to [`AtlasError::ResolutionFailed`], which is terminal for
    /// the current query.
    pub async fn resolve_ipv4(&self, domain: &str) -> Result<Ipv4Addr> {
        use tokio::net::lookup_host;

        // Port 0 satisfies the SocketAddr form lookup_host expects.
        let addr_str = format!("{domain}:0");
        let addrs = lookup_host(&addr_str)
            .await
            .map_err(|e| AtlasError::ResolutionFailed {
                domain: domain.to_string(),
                reason: e.to_string(),
            })?;

        let ipv4 = addrs
            .filter_map(|a| match a.ip() {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
            .next()
            .ok_or_else(|| AtlasError::ResolutionFailed {
                domain: domain.to_string(),
                reason: "no A record".to_string(),
            })?;

        debug!(domain = %domain, ip = %ipv4, "resolved");
        Ok(ipv4)
    }
}
