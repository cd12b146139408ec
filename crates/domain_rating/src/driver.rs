//! Driver profile
//!
//! A passive record of everything the rating rules may look at: who the
//! driver is, their history, the vehicle and the coverage they selected.
//! No range or cross-field validation is performed here; a negative age,
//! accident count or deductible is carried through as given.

use serde::{Deserialize, Serialize};

/// Identity and experience of the driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverInfo {
    pub name: String,
    pub age: i32,
    pub years_of_driving_experience: i32,
    pub occupation: String,
}

/// Accident, violation and insurance continuity history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrivingHistory {
    pub accidents_in_last_five_years: i32,
    pub violations_in_last_three_years: i32,
    pub has_current_insurance: bool,
    pub years_with_continuous_insurance: i32,
}

/// The insured vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInfo {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub has_anti_theft_device: bool,
    pub has_anti_lock_brakes: bool,
    pub has_daytime_running_lights: bool,
}

/// Coverage options chosen by the driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageSelection {
    pub liability_limit: i32,
    pub collision_deductible: i32,
    pub comprehensive_deductible: i32,
    pub includes_roadside: bool,
    pub includes_rental_car: bool,
}

/// Complete driver profile submitted for rating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverProfile {
    pub driver: DriverInfo,
    pub history: DrivingHistory,
    pub vehicle: VehicleInfo,
    pub coverage: CoverageSelection,
}

impl DriverProfile {
    /// Starts a builder with neutral defaults for every field
    pub fn builder() -> DriverProfileBuilder {
        DriverProfileBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.driver.name
    }

    pub fn age(&self) -> i32 {
        self.driver.age
    }

    pub fn accidents_in_last_five_years(&self) -> i32 {
        self.history.accidents_in_last_five_years
    }

    pub fn vehicle_make(&self) -> &str {
        &self.vehicle.make
    }

    pub fn vehicle_model(&self) -> &str {
        &self.vehicle.model
    }
}

/// Builder for driver profiles
///
/// Every field starts from a neutral default (a 30 year old with a clean
/// record driving a generic sedan), so callers only set what matters.
///
/// # Example
///
/// ```
/// use domain_rating::DriverProfile;
///
/// let profile = DriverProfile::builder()
///     .name("Jordan")
///     .age(18)
///     .vehicle("Ferrari", "F8")
///     .accidents_in_last_five_years(2)
///     .build();
///
/// assert_eq!(profile.age(), 18);
/// ```
#[derive(Debug, Clone)]
pub struct DriverProfileBuilder {
    profile: DriverProfile,
}

impl Default for DriverProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverProfileBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            profile: DriverProfile {
                driver: DriverInfo {
                    name: String::new(),
                    age: 30,
                    years_of_driving_experience: 10,
                    occupation: String::new(),
                },
                history: DrivingHistory {
                    accidents_in_last_five_years: 0,
                    violations_in_last_three_years: 0,
                    has_current_insurance: true,
                    years_with_continuous_insurance: 5,
                },
                vehicle: VehicleInfo {
                    make: "Toyota".to_string(),
                    model: "Camry".to_string(),
                    year: 2020,
                    has_anti_theft_device: false,
                    has_anti_lock_brakes: true,
                    has_daytime_running_lights: true,
                },
                coverage: CoverageSelection {
                    liability_limit: 100_000,
                    collision_deductible: 500,
                    comprehensive_deductible: 500,
                    includes_roadside: false,
                    includes_rental_car: false,
                },
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.profile.driver.name = name.into();
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.profile.driver.age = age;
        self
    }

    pub fn years_of_driving_experience(mut self, years: i32) -> Self {
        self.profile.driver.years_of_driving_experience = years;
        self
    }

    pub fn occupation(mut self, occupation: impl Into<String>) -> Self {
        self.profile.driver.occupation = occupation.into();
        self
    }

    pub fn accidents_in_last_five_years(mut self, accidents: i32) -> Self {
        self.profile.history.accidents_in_last_five_years = accidents;
        self
    }

    pub fn violations_in_last_three_years(mut self, violations: i32) -> Self {
        self.profile.history.violations_in_last_three_years = violations;
        self
    }

    /// Sets current insurance status and continuous years insured
    pub fn insurance(mut self, has_current_insurance: bool, continuous_years: i32) -> Self {
        self.profile.history.has_current_insurance = has_current_insurance;
        self.profile.history.years_with_continuous_insurance = continuous_years;
        self
    }

    /// Sets vehicle make and model
    pub fn vehicle(mut self, make: impl Into<String>, model: impl Into<String>) -> Self {
        self.profile.vehicle.make = make.into();
        self.profile.vehicle.model = model.into();
        self
    }

    pub fn vehicle_year(mut self, year: i32) -> Self {
        self.profile.vehicle.year = year;
        self
    }

    /// Sets the safety equipment flags: anti-theft, anti-lock brakes, daytime lights
    pub fn safety_features(mut self, anti_theft: bool, anti_lock_brakes: bool, daytime_lights: bool) -> Self {
        self.profile.vehicle.has_anti_theft_device = anti_theft;
        self.profile.vehicle.has_anti_lock_brakes = anti_lock_brakes;
        self.profile.vehicle.has_daytime_running_lights = daytime_lights;
        self
    }

    pub fn liability_limit(mut self, limit: i32) -> Self {
        self.profile.coverage.liability_limit = limit;
        self
    }

    /// Sets collision and comprehensive deductibles
    pub fn deductibles(mut self, collision: i32, comprehensive: i32) -> Self {
        self.profile.coverage.collision_deductible = collision;
        self.profile.coverage.comprehensive_deductible = comprehensive;
        self
    }

    /// Sets the optional roadside and rental car add-ons
    pub fn add_ons(mut self, roadside: bool, rental_car: bool) -> Self {
        self.profile.coverage.includes_roadside = roadside;
        self.profile.coverage.includes_rental_car = rental_car;
        self
    }

    pub fn build(self) -> DriverProfile {
        self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let profile = DriverProfile::builder().build();
        assert_eq!(profile.age(), 30);
        assert_eq!(profile.accidents_in_last_five_years(), 0);
        assert_eq!(profile.vehicle_make(), "Toyota");
        assert_eq!(profile.vehicle_model(), "Camry");
    }

    #[test]
    fn test_negative_values_are_accepted() {
        let profile = DriverProfile::builder()
            .age(-4)
            .accidents_in_last_five_years(-1)
            .liability_limit(-1)
            .deductibles(-500, -250)
            .build();
        assert_eq!(profile.age(), -4);
        assert_eq!(profile.accidents_in_last_five_years(), -1);
        assert_eq!(profile.coverage.liability_limit, -1);
        assert_eq!(profile.coverage.collision_deductible, -500);
        assert_eq!(profile.coverage.comprehensive_deductible, -250);
    }

    #[test]
    fn test_fields_are_writable() {
        let mut profile = DriverProfile::builder().name("Sam").build();
        profile.driver.name = "Alex".to_string();
        profile.coverage.includes_rental_car = true;
        assert_eq!(profile.name(), "Alex");
        assert!(profile.coverage.includes_rental_car);
    }
}
