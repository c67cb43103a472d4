//! # Company Research Skill
//!
//! First crew task. Profiles the target company from the web.

use crate::models::ModelConfig;
use crate::run_llm_worker;
use crate::skills::prompts::COMPANY_RESEARCHER;
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

/// What the researcher learned about the target company
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, LLMOutput)]
pub struct CompanyProfile {
    /// Official company name
    pub company_name: String,
    /// What the company does and for whom
    pub overview: String,
    /// Primary industry
    pub industry: String,
    /// Headquarters location, if found
    #[serde(default)]
    pub headquarters: Option<String>,
    /// Approximate headcount, if found
    #[serde(default)]
    pub employee_count: Option<String>,
    /// Main products or service lines
    #[serde(default)]
    pub products: Vec<String>,
    /// Recent launches, funding, leadership changes
    #[serde(default)]
    pub recent_news: Vec<String>,
    /// URLs relied on
    #[serde(default)]
    pub sources: Vec<String>,
}

#[skill(
    id = "company_research",
    name = "Company Research",
    description = "Researches a target company: what it does, its industry, products, and recent news.",
    tags = ["research", "sales", "company"],
    examples = ["Research Acme Corp", "Profile the company Stripe"],
    input_modes = ["text/plain"],
    output_modes = ["application/json"]
)]
pub struct CompanyResearchSkill {
    config: ModelConfig,
}

impl CompanyResearchSkill {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    /// Direct call used by the crew pipeline
    pub async fn run(task: &str, config: &ModelConfig) -> anyhow::Result<CompanyProfile> {
        run_llm_worker!(
            config,
            CompanyProfile,
            COMPANY_RESEARCHER,
            task.to_string(),
            search_tools::search_web,
            search_tools::scrape_website,
        )
    }
}

#[async_trait]
impl SkillHandler for CompanyResearchSkill {
    async fn on_request(
        &self,
        _state: &mut State,
        progress: &ProgressSender,
        _runtime: &dyn AgentRuntime,
        content: Content,
    ) -> AgentResult<OnRequestResult> {
        let task = content.first_text().unwrap_or_default();

        progress.send_update("Researching company...").await?;

        let profile = Self::run(&task, &self.config)
            .await
            .map_err(|e| AgentError::Internal {
                component: "company_research_skill".to_string(),
                reason: e.to_string(),
            })?;

        progress.send_update("Company research complete.").await?;

        let artifact = Artifact::from_json("company_profile.json", &profile).map_err(|e| {
            AgentError::Internal {
                component: "company_research_skill".to_string(),
                reason: format!("Failed to create artifact: {}", e),
            }
        })?;

        Ok(OnRequestResult::Completed {
            message: Some(Content::from_text(&profile.overview)),
            artifacts: vec![artifact],
        })
    }
}
