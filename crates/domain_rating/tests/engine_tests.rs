//! Rating Engine Tests
//!
//! End-to-end tests that rate complete driver profiles with the standard
//! engine:
//! - Vehicle classification priority
//! - Age bracket boundaries
//! - Accident surcharge tiers
//! - Explanation line order
//! - Custom rule lists and ordering validation
//!
//! # Test Organization
//!
//! - `end_to_end` - Worked examples with exact totals
//! - `classification` - Base rate selected by vehicle category
//! - `age_brackets` - Age factor boundaries
//! - `accident_history` - Accident rule presence and tiers
//! - `explanation` - Rendered breakdown
//! - `custom_rules` - Builder and extension rules

use core_kernel::Money;
use domain_rating::rules::{AccidentHistoryRule, AgeFactorRule, BaseRateRule, FnRule, RuleDependency};
use domain_rating::{
    DriverProfile, RatingEngine, RatingError, ACCIDENT_HISTORY_LABEL, AGE_FACTOR_LABEL,
};
use rust_decimal_macros::dec;
use test_utils::{
    assert_adjustment_labels, assert_money_eq, assert_premium_consistent, ProfileFixtures,
    RateFixtures,
};

// ============================================================================
// END-TO-END EXAMPLES
// ============================================================================

mod end_to_end_tests {
    use super::*;

    /// Verifies a standard-age sedan driver pays exactly the sedan base rate
    #[test]
    fn test_standard_sedan_driver() {
        let engine = RatingEngine::new();
        let premium = engine.calculate_premium(&ProfileFixtures::standard_sedan_driver());

        assert_money_eq(premium.base_rate(), RateFixtures::sedan_base_rate());
        assert_adjustment_labels(&premium, &[AGE_FACTOR_LABEL]);
        assert!(premium.adjustments()[0].amount.is_zero(), "Age adjustment should be zero");
        assert_money_eq(premium.total(), RateFixtures::sedan_base_rate());
    }

    /// Verifies a teenage sports car driver with two accidents
    #[test]
    fn test_young_sports_driver_with_two_accidents() {
        let engine = RatingEngine::new();
        let premium = engine.calculate_premium(&ProfileFixtures::young_sports_driver());

        assert_money_eq(premium.base_rate(), RateFixtures::sports_base_rate());
        assert_adjustment_labels(&premium, &[AGE_FACTOR_LABEL, ACCIDENT_HISTORY_LABEL]);
        assert_money_eq(premium.adjustments()[0].amount, RateFixtures::sports_base_rate());
        assert_money_eq(
            premium.adjustments()[1].amount,
            RateFixtures::two_plus_accident_surcharge(),
        );
        assert_eq!(premium.total().amount(), dec!(4200));
        assert_premium_consistent(&premium);
    }

    /// Verifies a 22 year old SUV driver with one accident
    #[test]
    fn test_young_suv_driver_with_one_accident() {
        let engine = RatingEngine::new();
        let premium = engine.calculate_premium(&ProfileFixtures::young_suv_driver());

        assert_money_eq(premium.base_rate(), RateFixtures::suv_base_rate());
        assert_eq!(premium.adjustments()[0].amount.amount(), dec!(600));
        assert_money_eq(premium.adjustments()[1].amount, RateFixtures::one_accident_surcharge());
        assert_eq!(premium.total().amount(), dec!(2100));
    }

    /// Verifies a senior luxury driver gets the 1.3 factor on the luxury base rate
    #[test]
    fn test_senior_luxury_driver() {
        let engine = RatingEngine::new();
        let premium = engine.calculate_premium(&ProfileFixtures::senior_luxury_driver());

        assert_money_eq(premium.base_rate(), RateFixtures::luxury_base_rate());
        assert_eq!(premium.adjustments()[0].amount.amount(), dec!(450));
        assert_eq!(premium.total().amount(), dec!(1950));
    }

    /// Verifies rating the same profile twice gives identical premiums
    #[test]
    fn test_rating_is_deterministic() {
        let engine = RatingEngine::new();
        let profile = ProfileFixtures::young_sports_driver();

        assert_eq!(engine.calculate_premium(&profile), engine.calculate_premium(&profile));
    }

    /// Verifies a shared engine rates profiles from several threads independently
    #[test]
    fn test_shared_engine_across_threads() {
        let engine = RatingEngine::new();
        let profiles = vec![
            ProfileFixtures::standard_sedan_driver(),
            ProfileFixtures::young_sports_driver(),
            ProfileFixtures::young_suv_driver(),
            ProfileFixtures::senior_luxury_driver(),
        ];

        let totals: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = profiles
                .iter()
                .map(|profile| {
                    let engine = &engine;
                    scope.spawn(move || engine.calculate_premium(profile).total().amount())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(totals, vec![dec!(1000), dec!(4200), dec!(2100), dec!(1950)]);
    }
}

// ============================================================================
// VEHICLE CLASSIFICATION
// ============================================================================

mod classification_tests {
    use super::*;

    fn base_rate_for(make: &str, model: &str) -> Money {
        let profile = DriverProfile::builder().vehicle(make, model).build();
        RatingEngine::new().calculate_premium(&profile).base_rate()
    }

    /// Verifies make-based luxury check wins over the model-based SUV check
    #[test]
    fn test_luxury_make_beats_suv_model() {
        assert_money_eq(base_rate_for("BMW", "Explorer"), RateFixtures::luxury_base_rate());
    }

    /// Verifies classification ignores case
    #[test]
    fn test_case_insensitive_matching() {
        assert_money_eq(base_rate_for("mErCeDeS", "C300"), RateFixtures::luxury_base_rate());
        assert_money_eq(base_rate_for("MUSTANG", "GT"), RateFixtures::sports_base_rate());
        assert_money_eq(base_rate_for("Toyota", "HIGHLANDER"), RateFixtures::suv_base_rate());
    }

    /// Verifies unknown vehicles fall back to the sedan rate
    #[test]
    fn test_unknown_vehicle_is_sedan() {
        assert_money_eq(base_rate_for("Kia", "Soul"), RateFixtures::sedan_base_rate());
    }
}

// ============================================================================
// AGE BRACKETS
// ============================================================================

mod age_bracket_tests {
    use super::*;

    fn age_adjustment(age: i32) -> (rust_decimal::Decimal, String) {
        let premium = RatingEngine::new().calculate_premium(&ProfileFixtures::sedan_driver(age, 0));
        let adjustment = &premium.adjustments()[0];
        (adjustment.amount.amount(), adjustment.explanation.clone())
    }

    /// Verifies 19 is in the under-20 bracket
    #[test]
    fn test_age_19() {
        assert_eq!(
            age_adjustment(19),
            (dec!(1000), "Drivers under 20 have higher statistical risk".to_string())
        );
    }

    /// Verifies 20 starts the 20-24 bracket
    #[test]
    fn test_age_20() {
        assert_eq!(
            age_adjustment(20),
            (dec!(500), "Drivers 20-24 have moderately higher risk".to_string())
        );
    }

    /// Verifies 65 is still the standard bracket
    #[test]
    fn test_age_65() {
        assert_eq!(
            age_adjustment(65),
            (dec!(0), "Standard rate for drivers 25-65".to_string())
        );
    }

    /// Verifies 66 starts the senior bracket
    #[test]
    fn test_age_66() {
        assert_eq!(
            age_adjustment(66),
            (dec!(300), "Slight increase for senior drivers".to_string())
        );
    }

    /// Verifies negative ages are rated as under 20 rather than rejected
    #[test]
    fn test_negative_age() {
        assert_eq!(age_adjustment(-5).0, dec!(1000));
    }
}

// ============================================================================
// ACCIDENT HISTORY
// ============================================================================

mod accident_history_tests {
    use super::*;

    fn rate(accidents: i32) -> domain_rating::Premium {
        RatingEngine::new().calculate_premium(&ProfileFixtures::sedan_driver(40, accidents))
    }

    /// Verifies no accident line for a clean record
    #[test]
    fn test_no_accidents() {
        let premium = rate(0);
        assert!(!premium.has_adjustment(ACCIDENT_HISTORY_LABEL));
        assert!(!premium.explanation().contains("Accident history"));
    }

    /// Verifies exactly one accident uses the lower surcharge
    #[test]
    fn test_one_accident() {
        let premium = rate(1);
        assert_money_eq(premium.adjustments()[1].amount, RateFixtures::one_accident_surcharge());
    }

    /// Verifies the surcharge is a step function, not proportional
    #[test]
    fn test_two_or_more_accidents_share_surcharge() {
        for accidents in [2, 3, 7] {
            let premium = rate(accidents);
            assert_money_eq(
                premium.adjustments()[1].amount,
                RateFixtures::two_plus_accident_surcharge(),
            );
        }
    }

    /// Verifies negative counts are treated like a clean record
    #[test]
    fn test_negative_accident_count() {
        assert!(!rate(-1).has_adjustment(ACCIDENT_HISTORY_LABEL));
    }
}

// ============================================================================
// EXPLANATION
// ============================================================================

mod explanation_tests {
    use super::*;

    /// Verifies the exact rendered breakdown for the worked sports example
    #[test]
    fn test_full_explanation() {
        let premium = RatingEngine::new().calculate_premium(&ProfileFixtures::young_sports_driver());

        assert_eq!(
            premium.explanation(),
            "Base Rate: $1800.00\n\
             Age factor Adjustment: $1800.00 - Drivers under 20 have higher statistical risk\n\
             Accident history Adjustment: $600.00 - Major surcharge for 2+ accidents in past 5 years\n\
             Total Premium: $4200.00\n"
        );
    }

    /// Verifies line count is base + adjustments + total
    #[test]
    fn test_line_count() {
        let premium = RatingEngine::new().calculate_premium(&ProfileFixtures::standard_sedan_driver());
        assert_eq!(premium.explanation().lines().count(), 3);
    }
}

// ============================================================================
// CUSTOM RULES
// ============================================================================

mod custom_rules_tests {
    use super::*;

    /// Verifies an appended closure rule runs after the standard rules
    #[test]
    fn test_appended_rule_runs_last() {
        let engine = RatingEngine::builder()
            .standard_rules()
            .rule(FnRule::new(
                "anti-theft discount",
                |profile| profile.vehicle.has_anti_theft_device,
                |_, _, premium| {
                    premium.add_adjustment(
                        "Anti-theft",
                        Money::new(dec!(-50)),
                        "Discount for anti-theft device",
                    )
                },
            ))
            .build()
            .expect("Rule order should be valid");

        let premium = engine.calculate_premium(&ProfileFixtures::senior_luxury_driver());

        assert_eq!(
            engine.rule_names(),
            ["base rate", "age factor", "accident history", "anti-theft discount"]
        );
        assert_adjustment_labels(&premium, &[AGE_FACTOR_LABEL, "Anti-theft"]);
        assert_eq!(premium.total().amount(), dec!(1900));
        assert_premium_consistent(&premium);
    }

    /// Verifies a proportional closure rule is rejected when placed before the base rate
    #[test]
    fn test_proportional_fn_rule_needs_base_rate() {
        let result = RatingEngine::builder()
            .rule(
                FnRule::new("violation loading", |_| true, |_, _, _| {})
                    .with_dependency(RuleDependency::ReadsBaseRate),
            )
            .rule(BaseRateRule)
            .build();

        assert!(matches!(
            result,
            Err(RatingError::BaseRateNotSet { position: 0, .. })
        ));
    }

    /// Verifies a custom rule list without the age rule
    #[test]
    fn test_engine_without_age_rule() {
        let engine = RatingEngine::builder()
            .rule(BaseRateRule)
            .rule(AccidentHistoryRule)
            .build()
            .unwrap();

        let premium = engine.calculate_premium(&ProfileFixtures::young_sports_driver());
        assert_adjustment_labels(&premium, &[ACCIDENT_HISTORY_LABEL]);
        assert_eq!(premium.total().amount(), dec!(2400));
    }

    /// Verifies a custom rate table flows through the standard rules
    #[test]
    fn test_custom_rate_table() {
        let mut rates = domain_rating::RateTable::standard();
        rates.base_rates.sedan = Money::new(dec!(900));

        let engine = RatingEngine::builder()
            .rates(rates)
            .rule(BaseRateRule)
            .rule(AgeFactorRule)
            .build()
            .unwrap();

        let premium = engine.calculate_premium(&ProfileFixtures::sedan_driver(21, 0));
        assert_eq!(premium.total().amount(), dec!(1350));
    }
}
