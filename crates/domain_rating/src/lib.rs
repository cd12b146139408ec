//! Driver Rating Domain
//!
//! This crate prices a driver's insurance premium by running an ordered
//! list of named pricing rules over a driver profile. Each rule reads the
//! profile and a fixed rate table and builds up an itemized, explainable
//! premium.
//!
//! # Architecture
//!
//! - **Driver profile**: passive record of the driver, history, vehicle and coverage
//! - **Rate table**: enum-keyed base rates, age factors and accident surcharges
//! - **Rules**: (condition, action) pairs behind the `RatingRule` trait
//! - **Engine**: owns the rate table and rule list, produces a `Premium`
//!
//! # Rule Order
//!
//! ```text
//! base rate -> age factor -> accident history
//! ```
//!
//! The age factor scales whatever base rate is already set, so the engine
//! builder refuses any list that runs it first.
//!
//! # Example
//!
//! ```rust
//! use domain_rating::{DriverProfile, RatingEngine};
//!
//! let engine = RatingEngine::new();
//! let profile = DriverProfile::builder()
//!     .name("Casey")
//!     .age(30)
//!     .vehicle("Toyota", "Camry")
//!     .build();
//!
//! let premium = engine.calculate_premium(&profile);
//! print!("{}", premium.explanation());
//! ```

pub mod driver;
pub mod engine;
pub mod error;
pub mod premium;
pub mod rates;
pub mod rules;
pub mod vehicle;

pub use driver::{CoverageSelection, DriverInfo, DriverProfile, DriverProfileBuilder, DrivingHistory, VehicleInfo};
pub use engine::{RatingEngine, RatingEngineBuilder};
pub use error::RatingError;
pub use premium::{Adjustment, Premium};
pub use rates::{AccidentSurcharges, AccidentTier, AgeBracket, AgeFactors, BaseRates, RateTable};
pub use rules::{
    AccidentHistoryRule, AgeFactorRule, BaseRateRule, FnRule, RatingRule, RuleDependency,
    ACCIDENT_HISTORY_LABEL, AGE_FACTOR_LABEL,
};
pub use vehicle::{classify_vehicle, VehicleCategory};
