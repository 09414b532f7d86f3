//! Core types for the ipatlas lookup tool.
//!
//! This crate provides the foundational pieces shared by the client and
//! lookup crates:
//!
//! - **Types**: the normalized [`GeoResult`] and [`WhoisResult`] records,
//!   plus the input classifier
//! - **Errors**: the per-stage error taxonomy in [`AtlasError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use ipatlas_core::{classify, InputKind};
//!
//! assert_eq!(classify("8.8.8.8"), InputKind::IpLiteral);
//! assert_eq!(classify("example.com"), InputKind::Domain);
//! ```

#![doc(html_root_url = "https://docs.rs/ipatlas-core/0.1.0")]

mod error;
pub mod types;

pub use error::{AtlasError, Result};
pub use types::*;
