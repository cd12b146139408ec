//! Pre-built Test Fixtures
//!
//! Provides ready-to-use driver profiles and rate values. The profiles
//! cover each vehicle category and the interesting age and accident
//! boundaries.

use core_kernel::Money;
use domain_rating::DriverProfile;
use rust_decimal_macros::dec;

/// Fixture for driver profiles
pub struct ProfileFixtures;

impl ProfileFixtures {
    /// 30 year old with a clean record driving a Toyota Camry (sedan)
    pub fn standard_sedan_driver() -> DriverProfile {
        DriverProfile::builder()
            .name("Morgan Reyes")
            .age(30)
            .years_of_driving_experience(12)
            .occupation("Teacher")
            .vehicle("Toyota", "Camry")
            .vehicle_year(2019)
            .build()
    }

    /// 18 year old with two accidents driving a Ferrari (sports)
    pub fn young_sports_driver() -> DriverProfile {
        DriverProfile::builder()
            .name("Riley Chen")
            .age(18)
            .years_of_driving_experience(2)
            .occupation("Student")
            .accidents_in_last_five_years(2)
            .violations_in_last_three_years(1)
            .insurance(true, 1)
            .vehicle("Ferrari", "488")
            .vehicle_year(2021)
            .build()
    }

    /// 22 year old with one accident driving a Ford Explorer (SUV)
    pub fn young_suv_driver() -> DriverProfile {
        DriverProfile::builder()
            .name("Jamie Ortiz")
            .age(22)
            .years_of_driving_experience(5)
            .occupation("Nurse")
            .accidents_in_last_five_years(1)
            .vehicle("Ford", "Explorer")
            .vehicle_year(2018)
            .build()
    }

    /// 70 year old with a clean record driving a Lexus (luxury)
    pub fn senior_luxury_driver() -> DriverProfile {
        DriverProfile::builder()
            .name("Pat Okafor")
            .age(70)
            .years_of_driving_experience(50)
            .occupation("Retired")
            .insurance(true, 40)
            .vehicle("Lexus", "LS")
            .vehicle_year(2022)
            .safety_features(true, true, true)
            .add_ons(true, true)
            .build()
    }

    /// A driver with the given age and accident count in a sedan
    pub fn sedan_driver(age: i32, accidents: i32) -> DriverProfile {
        DriverProfile::builder()
            .name("Test Driver")
            .age(age)
            .accidents_in_last_five_years(accidents)
            .vehicle("Honda", "Accord")
            .build()
    }
}

/// Fixture for the standard rate values
pub struct RateFixtures;

impl RateFixtures {
    pub fn sedan_base_rate() -> Money {
        Money::new(dec!(1000))
    }

    pub fn suv_base_rate() -> Money {
        Money::new(dec!(1200))
    }

    pub fn luxury_base_rate() -> Money {
        Money::new(dec!(1500))
    }

    pub fn sports_base_rate() -> Money {
        Money::new(dec!(1800))
    }

    pub fn one_accident_surcharge() -> Money {
        Money::new(dec!(300))
    }

    pub fn two_plus_accident_surcharge() -> Money {
        Money::new(dec!(600))
    }
}
