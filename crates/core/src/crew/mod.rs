//! # Sales Crew
//!
//! ```text
//! Company Researcher → Org Structure Analyst → Contact Finder → Sales Strategist
//!                                                   └── store_contacts
//! ```

pub mod runner;
pub mod stage;
pub mod tasks;

pub use runner::{CrewConfig, CrewOutput, SalesCrew, DEFAULT_REPORT_PATH};
pub use stage::CrewStage;
pub use tasks::CrewInputs;
