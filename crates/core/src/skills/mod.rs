//! # Crew Skills
//!
//! A2A-native skills and tools for the sales contact finder crew.
//!
//! ## Architecture
//!
//! ```text
//! Agent (A2A server)
//!   └── Skills (#[skill] + SkillHandler)
//!         └── Tools (#[tool] functions)
//! ```
//!
//! ## Skills (in crew order)
//!
//! - `CompanyResearchSkill` - Profile the target company
//! - `OrgStructureSkill` - Map departments and buying roles
//! - `ContactFinderSkill` - Find and store buyer-side contacts
//! - `SalesStrategySkill` - Draft the outreach plan

pub mod llm_helpers;
pub mod prompts;
pub mod tools;

pub mod company_research_skill;
pub mod contact_finder_skill;
pub mod org_structure_skill;
pub mod sales_strategy_skill;

pub mod agent_definitions;

pub use company_research_skill::{CompanyProfile, CompanyResearchSkill};
pub use contact_finder_skill::{ContactFinderSkill, ContactList, FoundContact};
pub use org_structure_skill::{Department, OrgStructure, OrgStructureSkill};
pub use sales_strategy_skill::{OutreachStrategy, SalesStrategySkill};

pub use agent_definitions::{
    company_researcher_agent, contact_finder_agent, create_crew, org_structure_analyst_agent,
    sales_strategist_agent,
};
