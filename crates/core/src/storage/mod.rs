//! # Contact Storage
//!
//! Persists discovered contacts to the hosted contact database.
//!
//! ```text
//! contact_info (JSON) → StorageRequest → POST /sales-company → POST /sales-contact (×N) → summary
//! ```
//!
//! - `request` - Input parsing and validation
//! - `tool` - HTTP sequencing against the contact database
//! - `report` - Per-contact outcomes and the summary text

pub mod report;
pub mod request;
pub mod tool;

pub use report::{ContactOutcome, StorageReport};
pub use request::{ContactInfo, ContactRecord, InvalidContact, StorageRequest, NOT_AVAILABLE};
pub use tool::{CompanyId, CompanyRef, ContactStorageTool};
