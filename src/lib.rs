//! HubSpot list sync - keeps a HubSpot portal in step with a local contact file.
//!
//! The library synchronizes contacts from a CSV source to HubSpot, builds
//! contact lists, and reports on list membership by email domain.
//!
//! # Architecture
//!
//! - **domain**: Value objects with validation (`Email`)
//! - **models**: Contact and contact list entities
//! - **batch**: Splitting collections into bounded request batches
//! - **client**: HTTP client for the HubSpot contacts v1 API
//! - **repositories**: Domain ports and their HubSpot and CSV adapters
//! - **services**: Commands, queries and the domain report
//! - **server**: MCP protocol server
//! - **config**: Configuration management from environment variables
//! - **error**: Error types for each layer
//! - **metrics**: HTTP and throughput counters

pub mod batch;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use batch::slice_into_chunks;
pub use client::HubSpotClient;
pub use config::Config;
pub use domain::{Email, ValidationError};
pub use error::{
    ConfigError, DomainReportError, HubSpotClientError, ImportContactsError,
    ImportListContactsError, PortError, RepositoryError, RepositoryErrorKind,
};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{Contact, ContactList};
pub use server::SyncMcpServer;
pub use services::{CommandResponse, DomainReport};
