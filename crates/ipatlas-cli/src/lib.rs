//! # ipatlas-cli
//!
//! Command-line interface for looking up where an IP or domain lives.
//!
//! ## Features
//!
//! - **One-shot lookups**: `ipatlas lookup example.com`
//! - **Interactive prompt**: `ipatlas shell` reads one query per line
//! - **Educational mode**: `--explain` describes each lookup stage
//! - **Multiple output formats**: Pretty tables, JSON, CSV, YAML
//! - **Map pin**: coordinates render as an OpenStreetMap link

pub mod cli;
pub mod config;
pub mod education;
pub mod output;

pub use cli::run;
