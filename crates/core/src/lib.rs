//! # Contact Finder Core
//!
//! Agents, tools, and contact storage for the sales contact finder crew.
//!
//! ## Architecture
//!
//! - `storage/` - Contact storage tool (company + contacts via the hosted REST API)
//! - `skills/` - A2A-native skills for each crew agent, and the `#[tool]`s they call
//! - `crew/` - Sequential crew pipeline and task descriptions
//! - `models` - LLM provider configuration
//! - `config` - Contact database credentials and endpoint
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contact_finder_core::storage::ContactStorageTool;
//!
//! let tool = ContactStorageTool::from_env()?;
//! let summary = tool
//!     .store(r#"{"company_name": "Acme", "contacts": [{"name": "Ada", "title": "CTO"}]}"#)
//!     .await;
//! ```

pub mod config;
pub mod crew;
pub mod error;
pub mod models;
pub mod skills;
pub mod storage;

pub use config::StorageConfig;
pub use error::{ConfigError, StoreError};
pub use storage::ContactStorageTool;
