//! # Errors
//!
//! Typed failures for configuration and contact storage.
//! The `Display` text of each variant is exactly what the calling agent sees.

use thiserror::Error;

/// Failure to construct the storage tool
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing {0} environment variable. Please set this in your .env file or environment.")]
    MissingApiKey(&'static str),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Failure that aborts a whole `store` call
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Error: Failed to parse contact information as JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Error: Contact information must be a JSON object")]
    NotAnObject,

    #[error("Error: Missing 'company_name' in contact data")]
    MissingCompanyName,

    #[error("Error: 'company_name' must be a non-empty string")]
    InvalidCompanyName,

    #[error("Error: Missing or empty 'contacts' array in contact data")]
    MissingContacts,

    #[error("Error creating company record: {0}")]
    CompanyRequest(#[source] reqwest::Error),

    #[error("Error: Failed to get company ID from API response: {0}")]
    MissingCompanyId(serde_json::Value),

    #[error("Error: Unexpected error occurred while storing contacts: {0}")]
    Unexpected(String),
}
