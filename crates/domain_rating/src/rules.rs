//! Pricing rules
//!
//! A rule is a named pair of a condition over the driver profile and an
//! action that reads the profile and the rate table and updates the
//! premium. Rules hold no state and do not call each other; the engine runs
//! them in list order.
//!
//! Rules whose action scales the current base rate declare
//! [`RuleDependency::ReadsBaseRate`] so the engine can refuse a list that
//! runs them before the base rate has been set.

use rust_decimal::Decimal;
use tracing::trace;

use crate::driver::DriverProfile;
use crate::premium::Premium;
use crate::rates::{AccidentTier, AgeBracket, RateTable};
use crate::vehicle::classify_vehicle;

/// Label used for the age adjustment
pub const AGE_FACTOR_LABEL: &str = "Age factor";

/// Label used for the accident surcharge
pub const ACCIDENT_HISTORY_LABEL: &str = "Accident history";

/// How a rule relates to the premium's base rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleDependency {
    /// Neither sets nor reads the base rate
    Independent,
    /// Sets the base rate
    SetsBaseRate,
    /// Computes its adjustment from the base rate already set
    ReadsBaseRate,
}

/// A single pricing rule
pub trait RatingRule: Send + Sync {
    /// Name used in logs and for duplicate detection
    fn name(&self) -> &str;

    /// Relationship to the base rate; used to validate rule order
    fn dependency(&self) -> RuleDependency {
        RuleDependency::Independent
    }

    /// Whether the rule applies to this profile
    fn matches(&self, profile: &DriverProfile) -> bool;

    /// Applies the rule to the premium being built
    fn apply(&self, profile: &DriverProfile, rates: &RateTable, premium: &mut Premium);
}

type Condition = dyn Fn(&DriverProfile) -> bool + Send + Sync;
type Action = dyn Fn(&DriverProfile, &RateTable, &mut Premium) + Send + Sync;

/// A rule assembled from two closures
///
/// # Example
///
/// ```
/// use core_kernel::Money;
/// use domain_rating::rules::FnRule;
/// use rust_decimal_macros::dec;
///
/// let roadside = FnRule::new(
///     "roadside",
///     |profile| profile.coverage.includes_roadside,
///     |_, _, premium| {
///         premium.add_adjustment("Roadside", Money::new(dec!(45)), "Roadside assistance add-on")
///     },
/// );
/// ```
pub struct FnRule {
    name: String,
    dependency: RuleDependency,
    condition: Box<Condition>,
    action: Box<Action>,
}

impl FnRule {
    pub fn new<C, A>(name: impl Into<String>, condition: C, action: A) -> Self
    where
        C: Fn(&DriverProfile) -> bool + Send + Sync + 'static,
        A: Fn(&DriverProfile, &RateTable, &mut Premium) + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            dependency: RuleDependency::Independent,
            condition: Box::new(condition),
            action: Box::new(action),
        }
    }

    /// Declares how the rule relates to the base rate
    pub fn with_dependency(mut self, dependency: RuleDependency) -> Self {
        self.dependency = dependency;
        self
    }
}

impl RatingRule for FnRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn dependency(&self) -> RuleDependency {
        self.dependency
    }

    fn matches(&self, profile: &DriverProfile) -> bool {
        (self.condition)(profile)
    }

    fn apply(&self, profile: &DriverProfile, rates: &RateTable, premium: &mut Premium) {
        (self.action)(profile, rates, premium)
    }
}

/// Sets the base rate from the vehicle category
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseRateRule;

impl RatingRule for BaseRateRule {
    fn name(&self) -> &str {
        "base rate"
    }

    fn dependency(&self) -> RuleDependency {
        RuleDependency::SetsBaseRate
    }

    fn matches(&self, _profile: &DriverProfile) -> bool {
        true
    }

    fn apply(&self, profile: &DriverProfile, rates: &RateTable, premium: &mut Premium) {
        let category = classify_vehicle(profile.vehicle_make(), profile.vehicle_model());
        let base_rate = rates.base_rate(category);
        trace!(%category, %base_rate, "vehicle classified");
        premium.set_base_rate(base_rate);
    }
}

/// Scales the base rate by the driver's age factor
///
/// The adjustment is `base_rate * (factor - 1)`, so it is zero for the
/// standard bracket and is always appended.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgeFactorRule;

impl RatingRule for AgeFactorRule {
    fn name(&self) -> &str {
        "age factor"
    }

    fn dependency(&self) -> RuleDependency {
        RuleDependency::ReadsBaseRate
    }

    fn matches(&self, _profile: &DriverProfile) -> bool {
        true
    }

    fn apply(&self, profile: &DriverProfile, rates: &RateTable, premium: &mut Premium) {
        let bracket = AgeBracket::for_age(profile.age());
        let factor = rates.age_factor(bracket);
        let adjustment = premium.base_rate().multiply(factor - Decimal::ONE);
        trace!(?bracket, %factor, "age bracket resolved");
        premium.add_adjustment(AGE_FACTOR_LABEL, adjustment, bracket.rationale());
    }
}

/// Flat surcharge for accidents in the last five years
#[derive(Debug, Clone, Copy, Default)]
pub struct AccidentHistoryRule;

impl RatingRule for AccidentHistoryRule {
    fn name(&self) -> &str {
        "accident history"
    }

    fn matches(&self, profile: &DriverProfile) -> bool {
        profile.accidents_in_last_five_years() > 0
    }

    fn apply(&self, profile: &DriverProfile, rates: &RateTable, premium: &mut Premium) {
        let tier = AccidentTier::for_count(profile.accidents_in_last_five_years());
        let Some(rationale) = tier.rationale() else {
            return;
        };
        premium.add_adjustment(ACCIDENT_HISTORY_LABEL, rates.accident_surcharge(tier), rationale);
    }
}

/// The standard rule list, in evaluation order
pub fn standard_rules() -> Vec<Box<dyn RatingRule>> {
    vec![
        Box::new(BaseRateRule) as Box<dyn RatingRule>,
        Box::new(AgeFactorRule),
        Box::new(AccidentHistoryRule),
    ]
}
