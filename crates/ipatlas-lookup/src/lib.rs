//! DNS resolution, WHOIS lookup, and the per-query pipeline.
//!
//! The [`LookupRunner`] drives the whole flow for one submission:
//! classify the input, resolve a domain to an IPv4 address, query the
//! geolocation API, and (for domains) query WHOIS. Each stage's failure
//! is converted to data at its boundary; only DNS resolution failure
//! halts a query early.

#![doc(html_root_url = "https://docs.rs/ipatlas-lookup/0.1.0")]

pub mod dns;
pub mod pipeline;
pub mod whois;

pub use dns::DnsResolver;
pub use pipeline::{
    GeoLookup, LookupOutcome, LookupReport, LookupRunner, ResolveHost, Target, WhoisLookup,
};
pub use whois::WhoisClient;

pub use ipatlas_core::{AtlasError, Result};
