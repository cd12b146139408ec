//! Rating engine
//!
//! Owns the rate table and the ordered rule list, and rates driver
//! profiles against them. An engine is immutable once built: every call to
//! [`RatingEngine::calculate_premium`] starts from a fresh [`Premium`], so a
//! single engine can be shared across threads by reference.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, instrument};

use crate::driver::DriverProfile;
use crate::error::RatingError;
use crate::premium::Premium;
use crate::rates::RateTable;
use crate::rules::{standard_rules, RatingRule, RuleDependency};

/// Evaluates pricing rules against driver profiles
pub struct RatingEngine {
    rates: RateTable,
    rules: Vec<Box<dyn RatingRule>>,
}

impl RatingEngine {
    /// Creates an engine with the standard rate table and rule set
    pub fn new() -> Self {
        Self {
            rates: RateTable::standard(),
            rules: standard_rules(),
        }
    }

    /// Starts building an engine with a custom rate table or rule list
    pub fn builder() -> RatingEngineBuilder {
        RatingEngineBuilder::new()
    }

    /// The rate table consulted by the rules
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Rule names in evaluation order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Rates a driver profile
    ///
    /// Runs every rule in order; each rule whose condition matches the
    /// profile updates the premium in place.
    ///
    /// # Example
    ///
    /// ```
    /// use domain_rating::{DriverProfile, RatingEngine};
    /// use rust_decimal_macros::dec;
    ///
    /// let engine = RatingEngine::new();
    /// let profile = DriverProfile::builder()
    ///     .age(18)
    ///     .vehicle("Ferrari", "Roma")
    ///     .accidents_in_last_five_years(2)
    ///     .build();
    ///
    /// let premium = engine.calculate_premium(&profile);
    /// assert_eq!(premium.total().amount(), dec!(4200));
    /// ```
    #[instrument(skip_all, fields(driver = %profile.name()))]
    pub fn calculate_premium(&self, profile: &DriverProfile) -> Premium {
        let mut premium = Premium::new();

        for rule in &self.rules {
            if rule.matches(profile) {
                rule.apply(profile, &self.rates, &mut premium);
                debug!(rule = rule.name(), "rule applied");
            } else {
                debug!(rule = rule.name(), "rule skipped");
            }
        }

        debug!(total = %premium.total(), "premium calculated");
        premium
    }
}

impl Default for RatingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RatingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingEngine")
            .field("rates", &self.rates)
            .field("rules", &self.rule_names())
            .finish()
    }
}

/// Builder for rating engines
///
/// Starts with the standard rate table and an empty rule list.
pub struct RatingEngineBuilder {
    rates: RateTable,
    rules: Vec<Box<dyn RatingRule>>,
}

impl Default for RatingEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RatingEngineBuilder {
    pub fn new() -> Self {
        Self {
            rates: RateTable::standard(),
            rules: Vec::new(),
        }
    }

    /// Replaces the rate table
    pub fn rates(mut self, rates: RateTable) -> Self {
        self.rates = rates;
        self
    }

    /// Appends the standard rules
    pub fn standard_rules(mut self) -> Self {
        self.rules.extend(standard_rules());
        self
    }

    /// Appends a rule after those already added
    pub fn rule(mut self, rule: impl RatingRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Builds the engine after checking the rule order
    ///
    /// # Errors
    ///
    /// * [`RatingError::BaseRateNotSet`] if a rule that reads the base rate
    ///   comes before every rule that sets it
    /// * [`RatingError::DuplicateRule`] if two rules share a name
    pub fn build(self) -> Result<RatingEngine, RatingError> {
        let mut names = HashSet::new();
        let mut base_rate_set = false;

        for (position, rule) in self.rules.iter().enumerate() {
            if !names.insert(rule.name()) {
                return Err(RatingError::DuplicateRule(rule.name().to_string()));
            }

            match rule.dependency() {
                RuleDependency::SetsBaseRate => base_rate_set = true,
                RuleDependency::ReadsBaseRate if !base_rate_set => {
                    return Err(RatingError::base_rate_not_set(rule.name(), position));
                }
                _ => {}
            }
        }

        Ok(RatingEngine {
            rates: self.rates,
            rules: self.rules,
        })
    }
}
