//! HTTP client for the geolocation API.
//!
//! This crate provides the [`GeoClient`] that turns an IP address into a
//! normalized [`ipatlas_core::GeoResult`].

#![doc(html_root_url = "https://docs.rs/ipatlas-client/0.1.0")]

mod client;

pub use client::{GeoClient, GeoClientBuilder};
pub use ipatlas_core::{AtlasError, Result};
