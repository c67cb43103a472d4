//! # Crew Agent Definitions
//!
//! Composes the crew's agents from skills using radkit's Agent::builder().
//! Each agent can run as an A2A server exposing its skill.

use crate::models::ModelConfig;
use radkit::agent::{Agent, AgentDefinition};

use crate::skills::{
    CompanyResearchSkill, ContactFinderSkill, OrgStructureSkill, SalesStrategySkill,
};

/// Researches the target company's business, products, and news.
pub fn company_researcher_agent(config: ModelConfig) -> AgentDefinition {
    Agent::builder()
        .with_name("Company Researcher")
        .with_description(
            "Researches the target company: what it does, its market, products, \
             and recent developments relevant to a sale.",
        )
        .with_skill(CompanyResearchSkill::new(config))
        .build()
}

/// Maps departments, leaders, and buying roles.
pub fn org_structure_analyst_agent(config: ModelConfig) -> AgentDefinition {
    Agent::builder()
        .with_name("Org Structure Analyst")
        .with_description(
            "Maps the target company's organization: relevant departments, their leaders, \
             and the roles that decide or influence a purchase.",
        )
        .with_skill(OrgStructureSkill::new(config))
        .build()
}

/// Finds buyer-side contacts and stores them in the contact database.
pub fn contact_finder_agent(config: ModelConfig) -> AgentDefinition {
    Agent::builder()
        .with_name("Contact Finder")
        .with_description(
            "Finds named decision makers and influencers with their contact details \
             and saves them to the contact database.",
        )
        .with_skill(ContactFinderSkill::new(config))
        .build()
}

/// Turns the research into an outreach plan.
pub fn sales_strategist_agent(config: ModelConfig) -> AgentDefinition {
    Agent::builder()
        .with_name("Sales Strategist")
        .with_description(
            "Drafts a prioritized outreach strategy: who to contact, in what order, \
             and with which message.",
        )
        .with_skill(SalesStrategySkill::new(config))
        .build()
}

/// All crew agents in task order:
/// Company Researcher → Org Structure Analyst → Contact Finder → Sales Strategist
pub fn create_crew(config: ModelConfig) -> Vec<AgentDefinition> {
    vec![
        company_researcher_agent(config.clone()),
        org_structure_analyst_agent(config.clone()),
        contact_finder_agent(config.clone()),
        sales_strategist_agent(config),
    ]
}
