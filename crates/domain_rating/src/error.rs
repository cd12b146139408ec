//! Rating domain errors
//!
//! Rating a profile cannot fail; these errors are raised while assembling
//! an engine from a custom rule list.

use thiserror::Error;

/// Errors that can occur when building a rating engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    /// A rule that scales the base rate is placed before any rule that sets it
    #[error("Rule '{rule}' at position {position} reads the base rate before any rule sets it")]
    BaseRateNotSet {
        rule: String,
        position: usize,
    },

    /// Two rules share a name
    #[error("Duplicate rule name: {0}")]
    DuplicateRule(String),
}

impl RatingError {
    /// Creates a base rate ordering error
    pub fn base_rate_not_set(rule: impl Into<String>, position: usize) -> Self {
        RatingError::BaseRateNotSet {
            rule: rule.into(),
            position,
        }
    }
}
