//! IP and domain lookup: geolocation, DNS resolution, and WHOIS in one pipeline.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ipatlas::{GeoClient, LookupOutcome, LookupRunner};
//!
//! #[tokio::main]
//! async fn main() -> ipatlas::Result<()> {
//!     let runner = LookupRunner::with_defaults(GeoClient::new()?)?;
//!
//!     match runner.run("example.com").await {
//!         LookupOutcome::Report(report) => {
//!             if let Ok(geo) = &report.geo {
//!                 println!("{} is in {}, {}", geo.ip, geo.city, geo.country);
//!             }
//!         }
//!         LookupOutcome::ResolutionFailed { domain, reason } => {
//!             eprintln!("could not resolve {domain}: {reason}");
//!         }
//!         LookupOutcome::EmptyInput => eprintln!("nothing to look up"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/ipatlas/0.1.0")]

// Re-export core types
pub use ipatlas_core::*;

// Re-export the geolocation client
pub use ipatlas_client::{GeoClient, GeoClientBuilder};

// Re-export the lookup pipeline
pub use ipatlas_lookup::{
    DnsResolver, GeoLookup, LookupOutcome, LookupReport, LookupRunner, ResolveHost, Target,
    WhoisClient, WhoisLookup,
};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
