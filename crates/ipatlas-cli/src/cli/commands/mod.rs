//! Command implementations.

pub mod config;
pub mod lookup;
pub mod shell;

use ipatlas::{DnsResolver, GeoClient, LookupRunner, WhoisClient};

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,

    /// Whether to show educational explanations
    pub explain: bool,

    /// Verbose output
    pub verbose: bool,

    /// Disable colors
    pub no_color: bool,

    /// Geolocation endpoint override (flag, env, or config file)
    pub geo_endpoint: Option<String>,

    /// Whether pretty output includes the map pin link
    pub show_map: bool,
}

impl Context {
    /// Build the lookup pipeline with the configured geolocation endpoint.
    pub fn runner(&self) -> anyhow::Result<LookupRunner<GeoClient, DnsResolver, WhoisClient>> {
        let mut builder = GeoClient::builder();
        if let Some(endpoint) = &self.geo_endpoint {
            builder = builder.base_url(endpoint);
        }
        let geo = builder.build()?;
        Ok(LookupRunner::with_defaults(geo)?)
    }
}
