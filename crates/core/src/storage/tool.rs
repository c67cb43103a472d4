//! # Contact Storage Tool
//!
//! Persists a company and its contacts to the hosted contact database.
//! Text in, text out: every outcome, including failures, is returned as
//! a summary the calling agent can read and act on.

use super::report::{ContactOutcome, StorageReport};
use super::request::{ContactInfo, ContactRecord, StorageRequest};
use crate::config::{StorageConfig, API_KEY_HEADER};
use crate::error::{ConfigError, StoreError};
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

const COMPANY_RESOURCE: &str = "sales-company";
const CONTACT_RESOURCE: &str = "sales-contact";

/// Opaque company identifier assigned by the remote service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(Value);

impl CompanyId {
    /// Pull the `id` out of a company response; null and "" count as absent
    fn from_response(body: &Value) -> Option<Self> {
        match body.get("id") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(id) => Some(CompanyId(id.clone())),
        }
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// A company record created (or matched) for one `store` call
#[derive(Debug, Clone)]
pub struct CompanyRef {
    pub id: CompanyId,
    pub name: String,
}

#[derive(Serialize)]
struct ContactPayload<'a> {
    company_id: &'a CompanyId,
    #[serde(flatten)]
    contact: &'a ContactRecord,
}

/// Client for the contact database's company and contact endpoints
///
/// ## Example
/// ```rust,ignore
/// let tool = ContactStorageTool::from_env()?;
/// let summary = tool
///     .store(r#"{"company_name": "Acme", "contacts": [{"name": "Ada", "title": "CTO"}]}"#)
///     .await;
/// println!("{}", summary);
/// ```
#[derive(Debug, Clone)]
pub struct ContactStorageTool {
    config: StorageConfig,
    client: reqwest::Client,
}

impl ContactStorageTool {
    pub fn new(config: StorageConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent("contact-finder/0.1")
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self { config, client })
    }

    /// Build from `GIBSONAI_API_KEY` (and optional base URL override)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(StorageConfig::from_env()?)
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Store a company and its contacts, returning a human-readable summary.
    ///
    /// Never fails: malformed input, HTTP errors, and partial failures are
    /// all described in the returned text.
    pub async fn store(&self, contact_info: impl Into<ContactInfo>) -> String {
        match catch_panics(self.try_store(contact_info.into())).await {
            Ok(report) => report.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "Contact storage aborted");
                e.to_string()
            }
        }
    }

    /// Typed variant of [`store`](Self::store) for callers that want the report.
    #[tracing::instrument(skip_all)]
    pub async fn try_store(&self, contact_info: ContactInfo) -> Result<StorageReport, StoreError> {
        let request = StorageRequest::parse(contact_info)?;
        let company = self.create_company(&request.company_name).await?;

        let mut report = StorageReport::new(&company.name);
        for contact in &request.contacts {
            let outcome = match contact {
                Err(invalid) => ContactOutcome::Failed {
                    name: invalid.label.clone(),
                    reason: invalid.to_string(),
                },
                Ok(record) => match self.create_contact(&company.id, record).await {
                    Ok(()) => {
                        tracing::info!(name = %record.name, title = %record.title, "Stored contact");
                        ContactOutcome::Stored {
                            name: record.name.clone(),
                        }
                    }
                    Err(e) => {
                        tracing::warn!(name = %record.name, error = %e, "Failed to store contact");
                        ContactOutcome::Failed {
                            name: record.name.clone(),
                            reason: e.to_string(),
                        }
                    }
                },
            };
            report.record(outcome);
        }

        if report.is_complete_success() {
            tracing::info!(company = %report.company_name, "Stored every contact");
        } else {
            tracing::warn!(
                company = %report.company_name,
                failed = report.failed().len(),
                "Some contacts were not stored"
            );
        }

        Ok(report)
    }

    /// Create or find the company record. The remote service dedups by name.
    pub async fn create_company(&self, name: &str) -> Result<CompanyRef, StoreError> {
        let body: Value = self
            .post(COMPANY_RESOURCE, &json!({ "name": name }))
            .await
            .map_err(StoreError::CompanyRequest)?
            .json()
            .await
            .map_err(StoreError::CompanyRequest)?;

        let id = CompanyId::from_response(&body).ok_or(StoreError::MissingCompanyId(body))?;
        tracing::info!(company = %name, id = %id, "Created/found company");

        Ok(CompanyRef {
            id,
            name: name.to_string(),
        })
    }

    /// Create one contact linked to `company_id`
    pub async fn create_contact(
        &self,
        company_id: &CompanyId,
        contact: &ContactRecord,
    ) -> Result<(), reqwest::Error> {
        let payload = ContactPayload {
            company_id,
            contact,
        };
        self.post(CONTACT_RESOURCE, &payload).await.map(|_| ())
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        resource: &str,
        payload: &T,
    ) -> Result<reqwest::Response, reqwest::Error> {
        self.client
            .post(self.config.endpoint(resource))
            .header(API_KEY_HEADER, self.config.api_key())
            .json(payload)
            .send()
            .await?
            .error_for_status()
    }
}

/// Turn a panic inside a store attempt into `StoreError::Unexpected`
async fn catch_panics<F>(attempt: F) -> Result<StorageReport, StoreError>
where
    F: Future<Output = Result<StorageReport, StoreError>>,
{
    AssertUnwindSafe(attempt)
        .catch_unwind()
        .await
        .unwrap_or_else(|panic| Err(StoreError::Unexpected(panic_message(panic.as_ref()))))
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
