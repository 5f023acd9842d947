//! # Unit Types
//!
//! Type-safe wrappers for the handful of units the framing engine mixes:
//! member lengths come in feet, lumber sections in inches, footing areas in
//! square inches, and soil and design loads in pounds per square foot.
//!
//! The wrappers serialize as bare numbers so JSON stays clean.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::units::{Feet, Inches, SquareFeet, SquareInches};
//!
//! let joist_depth: Feet = Inches(9.25).into();
//! assert!((joist_depth.0 - 0.7708).abs() < 1e-3);
//!
//! let area: SquareInches = SquareFeet(2.0).into();
//! assert_eq!(area.0, 288.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Square inches per square foot
pub const SQ_INCHES_PER_SQ_FOOT: f64 = 144.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * INCHES_PER_FOOT)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / INCHES_PER_FOOT)
    }
}

impl Add for Feet {
    type Output = Feet;
    fn add(self, rhs: Feet) -> Feet {
        Feet(self.0 + rhs.0)
    }
}

impl Sub for Feet {
    type Output = Feet;
    fn sub(self, rhs: Feet) -> Feet {
        Feet(self.0 - rhs.0)
    }
}

impl Mul for Feet {
    type Output = SquareFeet;
    fn mul(self, rhs: Feet) -> SquareFeet {
        SquareFeet(self.0 * rhs.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareFeet(pub f64);

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareInches(pub f64);

impl From<SquareFeet> for SquareInches {
    fn from(sf: SquareFeet) -> Self {
        SquareInches(sf.0 * SQ_INCHES_PER_SQ_FOOT)
    }
}

impl From<SquareInches> for SquareFeet {
    fn from(si: SquareInches) -> Self {
        SquareFeet(si.0 / SQ_INCHES_PER_SQ_FOOT)
    }
}

impl SquareInches {
    /// Diameter of the circle with this area, d = 2·√(A/π)
    pub fn circle_diameter(self) -> Inches {
        Inches(2.0 * (self.0 / std::f64::consts::PI).sqrt())
    }
}

// ============================================================================
// Pressure Units
// ============================================================================

/// Pressure in pounds per square foot (psf)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psf(pub f64);

impl Add for Psf {
    type Output = Psf;
    fn add(self, rhs: Psf) -> Psf {
        Psf(self.0 + rhs.0)
    }
}

impl Mul<SquareFeet> for Psf {
    type Output = Pounds;
    fn mul(self, rhs: SquareFeet) -> Pounds {
        Pounds(self.0 * rhs.0)
    }
}

/// Force in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

impl Pounds {
    /// Bearing area needed to spread this load at the given allowable pressure
    pub fn bearing_area(self, allowable: Psf) -> SquareFeet {
        SquareFeet(self.0 / allowable.0)
    }
}
