//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating driver profiles. Ranges
//! deliberately include out-of-range values (negative ages and counts)
//! because the rating rules accept them unchanged.

use domain_rating::DriverProfile;
use proptest::prelude::*;

/// Strategy for ages, including negative and implausibly high values
pub fn age_strategy() -> impl Strategy<Value = i32> {
    -10i32..120i32
}

/// Strategy for accident counts, including negative values
pub fn accident_count_strategy() -> impl Strategy<Value = i32> {
    -2i32..10i32
}

const KNOWN_MAKES: &[&str] = &[
    "BMW", "mercedes", "Lexus", "AUDI", "Ferrari", "porsche", "Mustang", "CORVETTE",
    "Toyota", "Ford", "Chevrolet",
];

const KNOWN_MODELS: &[&str] = &["SUV", "Explorer", "tahoe", "Highlander", "Camry", "Civic"];

/// Strategy for vehicle makes, mixing known makes in various cases with unknown ones
pub fn make_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(KNOWN_MAKES).prop_map(|s| s.to_string()),
        1 => "[A-Za-z]{1,12}",
    ]
}

/// Strategy for vehicle models, mixing SUV models with others
pub fn model_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(KNOWN_MODELS).prop_map(|s| s.to_string()),
        1 => "[A-Za-z0-9]{1,12}",
    ]
}

/// Strategy for complete driver profiles
pub fn driver_profile_strategy() -> impl Strategy<Value = DriverProfile> {
    (
        age_strategy(),
        accident_count_strategy(),
        make_strategy(),
        model_strategy(),
        0i32..10i32,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(age, accidents, make, model, violations, roadside, rental)| {
            DriverProfile::builder()
                .name("Generated Driver")
                .age(age)
                .accidents_in_last_five_years(accidents)
                .violations_in_last_three_years(violations)
                .vehicle(make, model)
                .add_ons(roadside, rental)
                .build()
        })
}
