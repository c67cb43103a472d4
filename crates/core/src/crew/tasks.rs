//! # Crew Tasks
//!
//! Task descriptions handed to each agent. Every task sees the crew inputs
//! plus the outputs of the tasks before it.

use crate::skills::{CompanyProfile, ContactList, OrgStructure};
use serde::{Deserialize, Serialize};

/// What the crew is asked to work on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrewInputs {
    pub target_company: String,
    pub our_product: String,
}

impl CrewInputs {
    pub fn new(target_company: impl Into<String>, our_product: impl Into<String>) -> Self {
        Self {
            target_company: target_company.into(),
            our_product: our_product.into(),
        }
    }
}

fn context<T: Serialize>(label: &str, value: &T) -> String {
    let body = serde_json::to_string_pretty(value).unwrap_or_default();
    format!("## {}\n\n```json\n{}\n```\n", label, body)
}

pub fn research_company_task(inputs: &CrewInputs) -> String {
    format!(
        "Research {company} thoroughly. We sell: {product}\n\n\
         Find what {company} does, its industry, size, headquarters, main products, \
         and recent news. Highlight anything that suggests a need for what we sell.",
        company = inputs.target_company,
        product = inputs.our_product,
    )
}

pub fn analyze_org_structure_task(inputs: &CrewInputs, profile: &CompanyProfile) -> String {
    format!(
        "Analyze the organizational structure of {company} as it relates to buying: {product}\n\n\
         Identify the relevant departments, who leads them, and which roles decide, \
         influence, or approve such a purchase.\n\n{profile}",
        company = inputs.target_company,
        product = inputs.our_product,
        profile = context("Company Profile", profile),
    )
}

pub fn find_key_contacts_task(
    inputs: &CrewInputs,
    profile: &CompanyProfile,
    org: &OrgStructure,
) -> String {
    format!(
        "Find the key people at {company} to contact about: {product}\n\n\
         For each person provide name, title, LinkedIn URL, phone, and email \
         (\"N/A\" when unknown). Save them with the store_contacts tool using \
         company_name \"{company}\", then report the storage summary.\n\n{profile}\n{org}",
        company = inputs.target_company,
        product = inputs.our_product,
        profile = context("Company Profile", profile),
        org = context("Org Structure", org),
    )
}

pub fn develop_approach_strategy_task(
    inputs: &CrewInputs,
    profile: &CompanyProfile,
    org: &OrgStructure,
    contacts: &ContactList,
) -> String {
    format!(
        "Develop an outreach strategy for selling {product} to {company}.\n\n\
         Use the research below. Produce the full markdown report.\n\n{profile}\n{org}\n{contacts}",
        company = inputs.target_company,
        product = inputs.our_product,
        profile = context("Company Profile", profile),
        org = context("Org Structure", org),
        contacts = context("Contacts", contacts),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::{Department, FoundContact};

    fn inputs() -> CrewInputs {
        CrewInputs::new("Acme Corp", "AI-powered sales tools")
    }

    fn profile() -> CompanyProfile {
        CompanyProfile {
            company_name: "Acme Corp".to_string(),
            overview: "Makes widgets for industrial buyers.".to_string(),
            industry: "Manufacturing".to_string(),
            headquarters: Some("Springfield".to_string()),
            employee_count: None,
            products: vec!["Widgets".to_string()],
            recent_news: vec![],
            sources: vec!["https://acme.test".to_string()],
        }
    }

    fn org() -> OrgStructure {
        OrgStructure {
            departments: vec![Department {
                name: "Sales".to_string(),
                leader: Some("Grace Hopper".to_string()),
                relevance: "Primary user of sales tooling".to_string(),
            }],
            buying_roles: vec!["VP Sales".to_string()],
            buying_process: "Team-led with CFO sign-off".to_string(),
            summary: "Sales org owns tooling decisions.".to_string(),
        }
    }

    #[test]
    fn test_research_task_mentions_inputs() {
        let task = research_company_task(&inputs());
        assert!(task.contains("Acme Corp"));
        assert!(task.contains("AI-powered sales tools"));
    }

    #[test]
    fn test_tasks_carry_prior_outputs() {
        let task = find_key_contacts_task(&inputs(), &profile(), &org());
        assert!(task.contains("store_contacts"));
        assert!(task.contains("Makes widgets"));
        assert!(task.contains("Grace Hopper"));

        let contacts = ContactList {
            company_name: "Acme Corp".to_string(),
            contacts: vec![FoundContact {
                name: "Grace Hopper".to_string(),
                title: "VP Sales".to_string(),
                linkedin_url: "N/A".to_string(),
                phone: "N/A".to_string(),
                email: "N/A".to_string(),
                rationale: None,
            }],
            storage_summary: "Company 'Acme Corp' processed successfully.".to_string(),
        };
        let task = develop_approach_strategy_task(&inputs(), &profile(), &org(), &contacts);
        assert!(task.contains("## Contacts"));
        assert!(task.contains("processed successfully"));
    }
}
