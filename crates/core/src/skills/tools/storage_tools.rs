//! # Storage Tools
//!
//! Exposes the contact storage tool to agents.

use crate::error::ConfigError;
use crate::storage::ContactStorageTool;
use radkit::macros::tool;
use radkit::tools::ToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};

/// Arguments for storing contacts
#[derive(Deserialize, JsonSchema)]
pub struct StoreContactsArgs {
    /// Company and contacts, as a JSON object or a JSON-encoded string:
    /// {"company_name": "Company Name", "contacts": [{"name": "Name", "title": "Title",
    /// "linkedin_url": "URL or N/A", "phone": "Phone or N/A", "email": "Email or N/A"}]}
    pub contact_info: Value,
}

/// Save a company and its contacts to the contact database
#[tool(
    description = "Saves contact information in the contact database. Creates the company record first, \
                   then adds every contact for that company. Set phone, email and linkedin_url to \"N/A\" \
                   when unknown. Returns a summary of which contacts were stored and which failed."
)]
pub async fn store_contacts(args: StoreContactsArgs) -> ToolResult {
    match store_with(ContactStorageTool::from_env(), args.contact_info).await {
        Ok(output) => ToolResult::success(output),
        Err(message) => ToolResult::error(message),
    }
}

/// Tool body: a configuration error becomes the tool error, anything else a summary
async fn store_with(
    tool: Result<ContactStorageTool, ConfigError>,
    contact_info: Value,
) -> Result<Value, String> {
    let tool = tool.map_err(|e| e.to_string())?;
    let summary = tool.store(contact_info).await;
    Ok(json!({ "summary": summary }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{StorageConfig, API_KEY_ENV};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_missing_config_is_tool_error() {
        let message = store_with(
            Err(ConfigError::MissingApiKey(API_KEY_ENV)),
            json!({"company_name": "Acme", "contacts": [{"name": "Ada", "title": "CTO"}]}),
        )
        .await
        .unwrap_err();

        assert!(message.contains("GIBSONAI_API_KEY"));
    }

    #[tokio::test]
    async fn test_summary_is_wrapped() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sales-company"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "c-1"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/sales-contact"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let tool = ContactStorageTool::new(StorageConfig::new("key").with_base_url(server.uri()));
        let output = store_with(
            tool,
            json!(r#"{"company_name": "Acme", "contacts": [{"name": "Ada", "title": "CTO"}]}"#),
        )
        .await
        .unwrap();

        assert_eq!(
            output,
            json!({
                "summary": "Company 'Acme' processed successfully. Successfully stored 1 contacts: Ada"
            })
        );
    }

    #[tokio::test]
    async fn test_validation_errors_stay_in_summary() {
        let tool = ContactStorageTool::new(StorageConfig::new("key"));
        let output = store_with(tool, json!({"contacts": []})).await.unwrap();

        assert_eq!(output["summary"], "Error: Missing 'company_name' in contact data");
    }
}
