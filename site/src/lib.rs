//! Async host for the Majestea site content.
//!
//! # Overview
//! `majestea-core` builds requests and parses responses; this crate performs
//! the I/O and owns the long-lived state:
//!
//! - `transport`: the `Transport` seam and its reqwest implementation.
//! - `api`: one logged async call per backend operation.
//! - `provider`: fallback-seeded content with concurrent load and refresh.
//! - `forms`: reservation / review submission with local validation.
//! - `daemon`: periodic refresh with explicit shutdown.
//! - `config`: environment configuration.

pub mod api;
pub mod config;
pub mod daemon;
pub mod forms;
pub mod provider;
pub mod transport;

pub use api::SiteApi;
pub use config::{ConfigError, SiteConfig};
pub use daemon::RefreshDaemon;
pub use forms::Notice;
pub use provider::{ContentSnapshot, DataProvider, Resource};
pub use transport::{ReqwestTransport, Transport};
