//! # Radkit-Compatible Tools
//!
//! Tools annotated with `#[tool]` macro for use in Skills.
//! These are how the crew's agents reach the web and the contact database.

pub mod search_tools;
pub mod storage_tools;
