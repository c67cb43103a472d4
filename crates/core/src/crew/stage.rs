//! # Crew Stages
//!
//! The crew runs its tasks strictly in sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrewStage {
    /// Profiling the target company
    CompanyResearch,
    /// Mapping departments and buying roles
    OrgStructure,
    /// Finding and storing contacts
    ContactFinding,
    /// Drafting the outreach plan
    Strategy,
    Complete,
    Failed,
}

impl CrewStage {
    /// Stage that follows this one. Terminal stages stay put.
    pub fn next(self) -> Self {
        match self {
            CrewStage::CompanyResearch => CrewStage::OrgStructure,
            CrewStage::OrgStructure => CrewStage::ContactFinding,
            CrewStage::ContactFinding => CrewStage::Strategy,
            CrewStage::Strategy => CrewStage::Complete,
            CrewStage::Complete => CrewStage::Complete,
            CrewStage::Failed => CrewStage::Failed,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, CrewStage::Complete | CrewStage::Failed)
    }

    /// Agent responsible for the stage
    pub fn agent_name(self) -> Option<&'static str> {
        match self {
            CrewStage::CompanyResearch => Some("Company Researcher"),
            CrewStage::OrgStructure => Some("Org Structure Analyst"),
            CrewStage::ContactFinding => Some("Contact Finder"),
            CrewStage::Strategy => Some("Sales Strategist"),
            CrewStage::Complete | CrewStage::Failed => None,
        }
    }
}

impl fmt::Display for CrewStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CrewStage::CompanyResearch => "company_research",
            CrewStage::OrgStructure => "org_structure",
            CrewStage::ContactFinding => "contact_finding",
            CrewStage::Strategy => "strategy",
            CrewStage::Complete => "complete",
            CrewStage::Failed => "failed",
        };
        f.write_str(s)
    }
}
