//! ipatlas - IP and domain lookup CLI
//!
//! Geolocates IPs and domains, with WHOIS registration data for domains.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    ipatlas_cli::run().await
}
