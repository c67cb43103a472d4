//! # Sales Strategy Skill
//!
//! Final crew task. Drafts the outreach plan; uses no tools.

use crate::models::ModelConfig;
use crate::run_llm_function;
use crate::skills::prompts::SALES_STRATEGIST;
use async_trait::async_trait;
use radkit::agent::{Artifact, OnRequestResult, SkillHandler};
use radkit::errors::{AgentError, AgentResult};
use radkit::macros::{skill, LLMOutput};
use radkit::models::Content;
use radkit::runtime::context::{ProgressSender, State};
use radkit::runtime::AgentRuntime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The outreach plan
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, LLMOutput)]
pub struct OutreachStrategy {
    /// Full markdown report
    pub report: String,
    /// Contacts to approach first, in order
    #[serde(default)]
    pub first_contacts: Vec<String>,
}

#[skill(
    id = "sales_strategy",
    name = "Sales Strategy",
    description = "Turns company, org, and contact research into a prioritized outreach plan.",
    tags = ["sales", "strategy", "outreach"],
    examples = ["Plan outreach to Acme for our analytics product"],
    input_modes = ["text/plain"],
    output_modes = ["text/markdown", "application/json"]
)]
pub struct SalesStrategySkill {
    config: ModelConfig,
}

impl SalesStrategySkill {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    pub async fn run(task: &str, config: &ModelConfig) -> anyhow::Result<OutreachStrategy> {
        run_llm_function!(config, OutreachStrategy, SALES_STRATEGIST, task.to_string())
    }
}

#[async_trait]
impl SkillHandler for SalesStrategySkill {
    async fn on_request(
        &self,
        _state: &mut State,
        progress: &ProgressSender,
        _runtime: &dyn AgentRuntime,
        content: Content,
    ) -> AgentResult<OnRequestResult> {
        let task = content.first_text().unwrap_or_default();

        progress.send_update("Drafting outreach strategy...").await?;

        let strategy = Self::run(&task, &self.config)
            .await
            .map_err(|e| AgentError::Internal {
                component: "sales_strategy_skill".to_string(),
                reason: e.to_string(),
            })?;

        let artifact = Artifact::from_json("strategy.json", &strategy).map_err(|e| {
            AgentError::Internal {
                component: "sales_strategy_skill".to_string(),
                reason: format!("Failed to create artifact: {}", e),
            }
        })?;

        Ok(OnRequestResult::Completed {
            message: Some(Content::from_text(&strategy.report)),
            artifacts: vec![artifact],
        })
    }
}
