//! # Org Structure Skill
//!
//! Second crew task. Maps departments and buying roles.

use crate::models::ModelConfig;
use crate::run_llm_worker;
use crate::skills::prompts::ORG_STRUCTURE_ANALYST;
use crate::skills::tools::search_tools;
use async_trait::async_trait;
use radkit::agent::{Artifact, OnRequestResult, SkillHandler};
use radkit::errors::{AgentError, AgentResult};
use radkit::macros::{skill, LLMOutput};
use radkit::models::Content;
use radkit::runtime::context::{ProgressSender, State};
use radkit::runtime::AgentRuntime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A department relevant to the sale
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, LLMOutput)]
pub struct Department {
    pub name: String,
    /// Department head, when a source names them
    #[serde(default)]
    pub leader: Option<String>,
    /// Why this department matters for the purchase
    pub relevance: String,
}

/// How the target company is organized around the purchase
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, LLMOutput)]
pub struct OrgStructure {
    #[serde(default)]
    pub departments: Vec<Department>,
    /// Roles that decide, influence, or approve the purchase
    #[serde(default)]
    pub buying_roles: Vec<String>,
    /// How purchasing likely works at this company
    pub buying_process: String,
    pub summary: String,
}

#[skill(
    id = "org_structure",
    name = "Org Structure Analysis",
    description = "Maps a company's departments, leaders, and buying roles relevant to a sale.",
    tags = ["research", "sales", "organization"],
    examples = ["Who decides on software purchases at Acme?"],
    input_modes = ["text/plain"],
    output_modes = ["application/json"]
)]
pub struct OrgStructureSkill {
    config: ModelConfig,
}

impl OrgStructureSkill {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    pub async fn run(task: &str, config: &ModelConfig) -> anyhow::Result<OrgStructure> {
        run_llm_worker!(
            config,
            OrgStructure,
            ORG_STRUCTURE_ANALYST,
            task.to_string(),
            search_tools::search_web,
            search_tools::scrape_website,
        )
    }
}

#[async_trait]
impl SkillHandler for OrgStructureSkill {
    async fn on_request(
        &self,
        _state: &mut State,
        progress: &ProgressSender,
        _runtime: &dyn AgentRuntime,
        content: Content,
    ) -> AgentResult<OnRequestResult> {
        let task = content.first_text().unwrap_or_default();

        progress.send_update("Mapping organization...").await?;

        let structure = Self::run(&task, &self.config)
            .await
            .map_err(|e| AgentError::Internal {
                component: "org_structure_skill".to_string(),
                reason: e.to_string(),
            })?;

        let artifact = Artifact::from_json("org_structure.json", &structure).map_err(|e| {
            AgentError::Internal {
                component: "org_structure_skill".to_string(),
                reason: format!("Failed to create artifact: {}", e),
            }
        })?;

        Ok(OnRequestResult::Completed {
            message: Some(Content::from_text(&structure.summary)),
            artifacts: vec![artifact],
        })
    }
}
