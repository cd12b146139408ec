//! Vehicle category classification
//!
//! The category drives the base rate. Matching is case-insensitive and runs
//! in a fixed priority order: luxury makes, then sports makes, then SUV
//! models, falling back to sedan. The first match wins.

use serde::{Deserialize, Serialize};
use std::fmt;

const LUXURY_MAKES: [&str; 4] = ["bmw", "mercedes", "lexus", "audi"];
const SPORTS_MAKES: [&str; 4] = ["ferrari", "porsche", "mustang", "corvette"];
const SUV_MODELS: [&str; 4] = ["suv", "explorer", "tahoe", "highlander"];

/// Rating category of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Sedan,
    Suv,
    Luxury,
    Sports,
}

impl VehicleCategory {
    /// All categories, in rate table order
    pub const ALL: [VehicleCategory; 4] = [
        VehicleCategory::Sedan,
        VehicleCategory::Suv,
        VehicleCategory::Luxury,
        VehicleCategory::Sports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Sedan => "sedan",
            VehicleCategory::Suv => "suv",
            VehicleCategory::Luxury => "luxury",
            VehicleCategory::Sports => "sports",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_one_of(value: &str, candidates: &[&str]) -> bool {
    candidates.iter().any(|c| value.eq_ignore_ascii_case(c))
}

/// Classifies a vehicle by make and model
///
/// # Example
///
/// ```
/// use domain_rating::vehicle::{classify_vehicle, VehicleCategory};
///
/// // Make-based checks win over the model-based SUV check
/// assert_eq!(classify_vehicle("BMW", "Explorer"), VehicleCategory::Luxury);
/// assert_eq!(classify_vehicle("Ford", "Explorer"), VehicleCategory::Suv);
/// ```
pub fn classify_vehicle(make: &str, model: &str) -> VehicleCategory {
    if is_one_of(make, &LUXURY_MAKES) {
        VehicleCategory::Luxury
    } else if is_one_of(make, &SPORTS_MAKES) {
        VehicleCategory::Sports
    } else if is_one_of(model, &SUV_MODELS) {
        VehicleCategory::Suv
    } else {
        VehicleCategory::Sedan
    }
}
