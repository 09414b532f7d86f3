//! Shared type definitions.

mod geo;
mod input;
mod whois;

pub use geo::{GeoIpResponse, GeoResult};
pub use input::{classify, InputKind};
pub use whois::{WhoisResult, NOT_AVAILABLE};
