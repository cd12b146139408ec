//! Rate tables
//!
//! The knowledge base consulted by the rating rules. Every lookup is keyed
//! by an enum, so a rule can never ask for a rate that does not exist. The
//! dotted key of each entry (`baseRate.sedan`, `ageFactor.20-24`, ...) is
//! kept for display and introspection.

use core_kernel::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::vehicle::VehicleCategory;

/// Age brackets used for the age risk factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    /// Younger than 20 (including any negative age)
    Under20,
    /// 20 through 24
    From20To24,
    /// 25 through 65
    From25To65,
    /// 66 and older
    Over65,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 4] = [
        AgeBracket::Under20,
        AgeBracket::From20To24,
        AgeBracket::From25To65,
        AgeBracket::Over65,
    ];

    /// Places an age in its bracket
    pub fn for_age(age: i32) -> Self {
        if age < 20 {
            AgeBracket::Under20
        } else if age < 25 {
            AgeBracket::From20To24
        } else if age < 66 {
            AgeBracket::From25To65
        } else {
            AgeBracket::Over65
        }
    }

    /// Rationale shown next to the age adjustment
    pub fn rationale(&self) -> &'static str {
        match self {
            AgeBracket::Under20 => "Drivers under 20 have higher statistical risk",
            AgeBracket::From20To24 => "Drivers 20-24 have moderately higher risk",
            AgeBracket::From25To65 => "Standard rate for drivers 25-65",
            AgeBracket::Over65 => "Slight increase for senior drivers",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            AgeBracket::Under20 => "ageFactor.16-19",
            AgeBracket::From20To24 => "ageFactor.20-24",
            AgeBracket::From25To65 => "ageFactor.25-65",
            AgeBracket::Over65 => "ageFactor.66+",
        }
    }
}

/// Accident count tiers used for the accident surcharge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccidentTier {
    None,
    One,
    TwoOrMore,
}

impl AccidentTier {
    pub const ALL: [AccidentTier; 3] = [AccidentTier::None, AccidentTier::One, AccidentTier::TwoOrMore];

    /// Places an accident count in its tier; zero and below count as none
    pub fn for_count(accidents: i32) -> Self {
        match accidents {
            i32::MIN..=0 => AccidentTier::None,
            1 => AccidentTier::One,
            _ => AccidentTier::TwoOrMore,
        }
    }

    /// Rationale shown next to the accident surcharge
    ///
    /// `None` for a clean record, which never produces a surcharge line.
    pub fn rationale(&self) -> Option<&'static str> {
        match self {
            AccidentTier::None => None,
            AccidentTier::One => Some("Surcharge for 1 accident in past 5 years"),
            AccidentTier::TwoOrMore => Some("Major surcharge for 2+ accidents in past 5 years"),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            AccidentTier::None => "accidentSurcharge.0",
            AccidentTier::One => "accidentSurcharge.1",
            AccidentTier::TwoOrMore => "accidentSurcharge.2+",
        }
    }
}

/// Annual base rate per vehicle category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRates {
    pub sedan: Money,
    pub suv: Money,
    pub luxury: Money,
    pub sports: Money,
}

/// Multiplicative risk factor per age bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeFactors {
    pub under_20: Decimal,
    pub age_20_to_24: Decimal,
    pub age_25_to_65: Decimal,
    pub age_66_plus: Decimal,
}

/// Flat surcharge per accident tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccidentSurcharges {
    pub none: Money,
    pub one: Money,
    pub two_or_more: Money,
}

/// The complete knowledge base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    pub base_rates: BaseRates,
    pub age_factors: AgeFactors,
    pub accident_surcharges: AccidentSurcharges,
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RateTable {
    /// The standard rate table
    pub fn standard() -> Self {
        Self {
            base_rates: BaseRates {
                sedan: Money::new(dec!(1000)),
                suv: Money::new(dec!(1200)),
                luxury: Money::new(dec!(1500)),
                sports: Money::new(dec!(1800)),
            },
            age_factors: AgeFactors {
                under_20: dec!(2.0),
                age_20_to_24: dec!(1.5),
                age_25_to_65: dec!(1.0),
                age_66_plus: dec!(1.3),
            },
            accident_surcharges: AccidentSurcharges {
                none: Money::zero(),
                one: Money::new(dec!(300)),
                two_or_more: Money::new(dec!(600)),
            },
        }
    }

    pub fn base_rate(&self, category: VehicleCategory) -> Money {
        match category {
            VehicleCategory::Sedan => self.base_rates.sedan,
            VehicleCategory::Suv => self.base_rates.suv,
            VehicleCategory::Luxury => self.base_rates.luxury,
            VehicleCategory::Sports => self.base_rates.sports,
        }
    }

    pub fn age_factor(&self, bracket: AgeBracket) -> Decimal {
        match bracket {
            AgeBracket::Under20 => self.age_factors.under_20,
            AgeBracket::From20To24 => self.age_factors.age_20_to_24,
            AgeBracket::From25To65 => self.age_factors.age_25_to_65,
            AgeBracket::Over65 => self.age_factors.age_66_plus,
        }
    }

    pub fn accident_surcharge(&self, tier: AccidentTier) -> Money {
        match tier {
            AccidentTier::None => self.accident_surcharges.none,
            AccidentTier::One => self.accident_surcharges.one,
            AccidentTier::TwoOrMore => self.accident_surcharges.two_or_more,
        }
    }

    /// Lists every entry as `(dotted key, value)`
    ///
    /// Order is fixed: base rates, then age factors, then accident
    /// surcharges, each in ascending risk order.
    pub fn entries(&self) -> Vec<(String, Decimal)> {
        let base = VehicleCategory::ALL
            .iter()
            .map(|c| (format!("baseRate.{}", c), self.base_rate(*c).amount()));
        let age = AgeBracket::ALL
            .iter()
            .map(|b| (b.key().to_string(), self.age_factor(*b)));
        let accidents = AccidentTier::ALL
            .iter()
            .map(|t| (t.key().to_string(), self.accident_surcharge(*t).amount()));

        base.chain(age).chain(accidents).collect()
    }
}
