//! # Sales Crew
//!
//! Runs the four crew tasks in order and writes the outreach report.

use super::stage::CrewStage;
use super::tasks::{self, CrewInputs};
use crate::models::ModelConfig;
use crate::skills::{
    CompanyProfile, CompanyResearchSkill, ContactFinderSkill, ContactList, OrgStructure,
    OrgStructureSkill, OutreachStrategy, SalesStrategySkill,
};
use crate::storage::ContactStorageTool;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Where the strategy report lands by default
pub const DEFAULT_REPORT_PATH: &str = "output/buyer_contact.md";

#[derive(Debug, Clone)]
pub struct CrewConfig {
    pub model: ModelConfig,
    pub report_path: PathBuf,
}

impl Default for CrewConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}

/// Everything the crew produced
#[derive(Debug, Clone)]
pub struct CrewOutput {
    pub profile: CompanyProfile,
    pub org: OrgStructure,
    pub contacts: ContactList,
    pub strategy: OutreachStrategy,
    pub report_path: PathBuf,
}

/// Sequential crew: Company Researcher → Org Structure Analyst → Contact Finder → Sales Strategist
pub struct SalesCrew {
    config: CrewConfig,
    stage: CrewStage,
}

impl SalesCrew {
    pub fn new(config: CrewConfig) -> Self {
        Self {
            config,
            stage: CrewStage::CompanyResearch,
        }
    }

    pub fn stage(&self) -> CrewStage {
        self.stage
    }

    /// Run every task for `inputs`.
    ///
    /// Contact storage must be configured before any agent runs.
    #[tracing::instrument(skip(self), fields(company = %inputs.target_company))]
    pub async fn kickoff(&mut self, inputs: &CrewInputs) -> Result<CrewOutput> {
        ContactStorageTool::from_env().context("Contact storage is not configured")?;

        self.stage = CrewStage::CompanyResearch;
        let result = self.run_tasks(inputs).await;
        if result.is_err() {
            tracing::warn!(stage = %self.stage, "Crew failed");
            self.stage = CrewStage::Failed;
        }
        result
    }

    async fn run_tasks(&mut self, inputs: &CrewInputs) -> Result<CrewOutput> {
        let model = self.config.model.clone();

        self.begin(CrewStage::CompanyResearch);
        let profile = CompanyResearchSkill::run(&tasks::research_company_task(inputs), &model)
            .await
            .context("Company research failed")?;

        self.begin(CrewStage::OrgStructure);
        let org = OrgStructureSkill::run(
            &tasks::analyze_org_structure_task(inputs, &profile),
            &model,
        )
        .await
        .context("Org structure analysis failed")?;

        self.begin(CrewStage::ContactFinding);
        let contacts = ContactFinderSkill::run(
            &tasks::find_key_contacts_task(inputs, &profile, &org),
            &model,
        )
        .await
        .context("Contact finding failed")?;
        tracing::info!(
            found = contacts.contacts.len(),
            storage = %contacts.storage_summary,
            "Contacts found"
        );

        self.begin(CrewStage::Strategy);
        let strategy = SalesStrategySkill::run(
            &tasks::develop_approach_strategy_task(inputs, &profile, &org, &contacts),
            &model,
        )
        .await
        .context("Strategy drafting failed")?;

        write_report(&self.config.report_path, &strategy.report).await?;
        self.stage = CrewStage::Complete;

        Ok(CrewOutput {
            profile,
            org,
            contacts,
            strategy,
            report_path: self.config.report_path.clone(),
        })
    }

    fn begin(&mut self, stage: CrewStage) {
        self.stage = stage;
        tracing::info!(
            stage = %stage,
            agent = stage.agent_name().unwrap_or_default(),
            "Starting task"
        );
    }
}

async fn write_report(path: &Path, report: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    tokio::fs::write(path, report)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "Wrote outreach report");
    Ok(())
}
