//! Itemized premium
//!
//! A premium is a base rate plus an ordered list of labeled adjustments.
//! Rules build it up in place; the total is always recomputed from the
//! parts, so `total == base_rate + sum(adjustments)` holds at every point.

use core_kernel::Money;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt::{self, Write as _};

/// A labeled, explained change to the base rate
///
/// The amount is signed: positive for surcharges, negative for discounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjustment {
    pub label: String,
    pub amount: Money,
    pub explanation: String,
}

/// Premium breakdown produced by the rating engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Premium {
    base_rate: Money,
    adjustments: Vec<Adjustment>,
}

impl Premium {
    /// Creates an empty premium with a zero base rate
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the base rate
    pub fn set_base_rate(&mut self, base_rate: Money) {
        self.base_rate = base_rate;
    }

    pub fn base_rate(&self) -> Money {
        self.base_rate
    }

    /// Appends an adjustment after any existing ones
    pub fn add_adjustment(
        &mut self,
        label: impl Into<String>,
        amount: Money,
        explanation: impl Into<String>,
    ) {
        self.adjustments.push(Adjustment {
            label: label.into(),
            amount,
            explanation: explanation.into(),
        });
    }

    /// Adjustments in the order they were added
    pub fn adjustments(&self) -> &[Adjustment] {
        &self.adjustments
    }

    /// Returns true if an adjustment with this label was added
    pub fn has_adjustment(&self, label: &str) -> bool {
        self.adjustments.iter().any(|a| a.label == label)
    }

    /// Base rate plus every adjustment
    pub fn total(&self) -> Money {
        self.base_rate + self.adjustments.iter().map(|a| a.amount).sum::<Money>()
    }

    /// Renders the breakdown as text
    ///
    /// One line for the base rate, one per adjustment in insertion order,
    /// then the total. Every line ends with a newline.
    ///
    /// ```text
    /// Base Rate: $1800.00
    /// Age factor Adjustment: $1800.00 - Drivers under 20 have higher statistical risk
    /// Accident history Adjustment: $600.00 - Major surcharge for 2+ accidents in past 5 years
    /// Total Premium: $4200.00
    /// ```
    pub fn explanation(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = writeln!(out, "Base Rate: {}", self.base_rate);
        for adjustment in &self.adjustments {
            let _ = writeln!(
                out,
                "{} Adjustment: {} - {}",
                adjustment.label, adjustment.amount, adjustment.explanation
            );
        }
        let _ = writeln!(out, "Total Premium: {}", self.total());
        out
    }
}

impl fmt::Display for Premium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.explanation())
    }
}

impl Serialize for Premium {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Premium", 3)?;
        state.serialize_field("base_rate", &self.base_rate)?;
        state.serialize_field("adjustments", &self.adjustments)?;
        state.serialize_field("total", &self.total())?;
        state.end()
    }
}
