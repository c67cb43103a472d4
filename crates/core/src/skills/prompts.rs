//! Default system prompts for the crew's agents, bundled at compile time.

/// Company researcher - profiles the target company
pub const COMPANY_RESEARCHER: &str = include_str!("defaults/company_researcher.md");

/// Org structure analyst - maps departments and buying roles
pub const ORG_STRUCTURE_ANALYST: &str = include_str!("defaults/org_structure_analyst.md");

/// Contact finder - finds and stores buyer-side contacts
pub const CONTACT_FINDER: &str = include_str!("defaults/contact_finder.md");

/// Sales strategist - drafts the outreach plan
pub const SALES_STRATEGIST: &str = include_str!("defaults/sales_strategist.md");

#[cfg(test)]
mod tests {
    use super::*;

    fn all_defaults() -> Vec<(&'static str, &'static str)> {
        vec![
            ("company_researcher", COMPANY_RESEARCHER),
            ("org_structure_analyst", ORG_STRUCTURE_ANALYST),
            ("contact_finder", CONTACT_FINDER),
            ("sales_strategist", SALES_STRATEGIST),
        ]
    }

    #[test]
    fn test_all_prompts_non_empty() {
        for (slug, content) in all_defaults() {
            assert!(content.len() > 50, "Prompt '{}' seems too short", slug);
        }
    }

    #[test]
    fn test_contact_finder_documents_storage_payload() {
        assert!(CONTACT_FINDER.contains("store_contacts"));
        assert!(CONTACT_FINDER.contains("company_name"));
        assert!(CONTACT_FINDER.contains("N/A"));
    }
}
