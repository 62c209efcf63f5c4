//! Command-line shell around the WMS client crates.
//!
//! This crate provides:
//! - An HTTP client that fetches GetCapabilities documents and lists layers
//! - Configuration merging (YAML file, flags, environment)
//! - Table and JSON output for layers, tile requests and active overlays

pub mod client;
pub mod config;
pub mod report;

pub use client::WmsClient;
pub use config::{load_config, ConfigOverrides};
pub use report::{OutputFormat, Report};
