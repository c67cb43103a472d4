//! # Contact Finder Skill
//!
//! Third crew task. Finds buyer-side contacts and saves them through
//! the `store_contacts` tool.

use crate::models::ModelConfig;
use crate::run_llm_worker;
use crate::skills::prompts::CONTACT_FINDER;
use crate::skills::tools::{search_tools, storage_tools};
use async_trait::async_trait;
use radkit::agent::{Artifact, OnRequestResult, SkillHandler};
use radkit::errors::{AgentError, AgentResult};
use radkit::macros::{skill, LLMOutput};
use radkit::models::Content;
use radkit::runtime::context::{ProgressSender, State};
use radkit::runtime::AgentRuntime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A person worth contacting
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, LLMOutput)]
pub struct FoundContact {
    pub name: String,
    pub title: String,
    /// "N/A" when not found
    pub linkedin_url: String,
    /// "N/A" when not found
    pub phone: String,
    /// "N/A" when not found
    pub email: String,
    /// Why this person matters for the sale
    #[serde(default)]
    pub rationale: Option<String>,
}

/// Contacts found for the target company
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, LLMOutput)]
pub struct ContactList {
    pub company_name: String,
    #[serde(default)]
    pub contacts: Vec<FoundContact>,
    /// Summary returned by `store_contacts`
    pub storage_summary: String,
}

impl ContactList {
    /// Names in discovery order
    pub fn names(&self) -> Vec<&str> {
        self.contacts.iter().map(|c| c.name.as_str()).collect()
    }
}

#[skill(
    id = "contact_finder",
    name = "Contact Finder",
    description = "Finds decision makers and influencers at a company and stores them in the contact database.",
    tags = ["sales", "contacts", "prospecting"],
    examples = ["Find the engineering leadership at Acme and save them"],
    input_modes = ["text/plain"],
    output_modes = ["application/json"]
)]
pub struct ContactFinderSkill {
    config: ModelConfig,
}

impl ContactFinderSkill {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    pub async fn run(task: &str, config: &ModelConfig) -> anyhow::Result<ContactList> {
        run_llm_worker!(
            config,
            ContactList,
            CONTACT_FINDER,
            task.to_string(),
            search_tools::search_web,
            search_tools::scrape_website,
            storage_tools::store_contacts,
        )
    }
}

#[async_trait]
impl SkillHandler for ContactFinderSkill {
    async fn on_request(
        &self,
        _state: &mut State,
        progress: &ProgressSender,
        _runtime: &dyn AgentRuntime,
        content: Content,
    ) -> AgentResult<OnRequestResult> {
        let task = content.first_text().unwrap_or_default();

        progress.send_update("Searching for contacts...").await?;

        let list = Self::run(&task, &self.config)
            .await
            .map_err(|e| AgentError::Internal {
                component: "contact_finder_skill".to_string(),
                reason: e.to_string(),
            })?;

        progress
            .send_update(&format!("Found {} contacts.", list.contacts.len()))
            .await?;

        let artifact = Artifact::from_json("contacts.json", &list).map_err(|e| {
            AgentError::Internal {
                component: "contact_finder_skill".to_string(),
                reason: format!("Failed to create artifact: {}", e),
            }
        })?;

        Ok(OnRequestResult::Completed {
            message: Some(Content::from_text(&list.storage_summary)),
            artifacts: vec![artifact],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_list_deserializes_without_optional_fields() {
        let list: ContactList = serde_json::from_str(
            r#"{
                "company_name": "Acme",
                "contacts": [{
                    "name": "Ada", "title": "CTO",
                    "linkedin_url": "N/A", "phone": "N/A", "email": "N/A"
                }],
                "storage_summary": "Company 'Acme' processed successfully."
            }"#,
        )
        .unwrap();

        assert_eq!(list.names(), vec!["Ada"]);
        assert!(list.contacts[0].rationale.is_none());
    }
}
