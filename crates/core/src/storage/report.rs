//! # Storage Report
//!
//! Per-contact outcomes folded into the single summary the agent reads.

use std::fmt;

/// Result of storing one contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    Stored { name: String },
    Failed { name: String, reason: String },
}

/// Outcome of a `store` call that got past company creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageReport {
    pub company_name: String,
    pub outcomes: Vec<ContactOutcome>,
}

impl StorageReport {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: ContactOutcome) {
        self.outcomes.push(outcome);
    }

    /// Names of stored contacts, in input order
    pub fn stored(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                ContactOutcome::Stored { name } => Some(name.as_str()),
                ContactOutcome::Failed { .. } => None,
            })
            .collect()
    }

    /// `name: reason` for each failed contact, in input order
    pub fn failed(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                ContactOutcome::Failed { name, reason } => Some(format!("{}: {}", name, reason)),
                ContactOutcome::Stored { .. } => None,
            })
            .collect()
    }

    pub fn is_complete_success(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| matches!(o, ContactOutcome::Stored { .. }))
    }
}

impl fmt::Display for StorageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Company '{}' processed successfully.", self.company_name)?;

        let stored = self.stored();
        if !stored.is_empty() {
            write!(
                f,
                " Successfully stored {} contacts: {}",
                stored.len(),
                stored.join(", ")
            )?;
        }

        let failed = self.failed();
        if !failed.is_empty() {
            write!(
                f,
                " Failed to store {} contacts: {}",
                failed.len(),
                failed.join("; ")
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(name: &str) -> ContactOutcome {
        ContactOutcome::Stored {
            name: name.to_string(),
        }
    }

    fn failed(name: &str, reason: &str) -> ContactOutcome {
        ContactOutcome::Failed {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    #[test]
    fn test_all_stored() {
        let mut report = StorageReport::new("Acme");
        report.record(stored("Ada"));
        report.record(stored("Grace"));

        assert!(report.is_complete_success());
        assert_eq!(
            report.to_string(),
            "Company 'Acme' processed successfully. Successfully stored 2 contacts: Ada, Grace"
        );
    }

    #[test]
    fn test_mixed_outcomes_keep_input_order() {
        let mut report = StorageReport::new("Acme");
        report.record(failed("Ada", "Missing title"));
        report.record(stored("Grace"));
        report.record(failed("Linus", "timed out"));
        report.record(stored("Ken"));

        assert!(!report.is_complete_success());
        assert_eq!(report.stored(), vec!["Grace", "Ken"]);
        assert_eq!(
            report.to_string(),
            "Company 'Acme' processed successfully. \
             Successfully stored 2 contacts: Grace, Ken \
             Failed to store 2 contacts: Ada: Missing title; Linus: timed out"
        );
    }

    #[test]
    fn test_all_failed() {
        let mut report = StorageReport::new("Acme");
        report.record(failed("Unknown", "Missing name, title"));

        let text = report.to_string();
        assert!(!text.contains("Successfully stored"));
        assert!(text.ends_with("Failed to store 1 contacts: Unknown: Missing name, title"));
    }
}
