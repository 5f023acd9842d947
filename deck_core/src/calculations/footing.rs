//! # Footing Sizing
//!
//! Sizes a round concrete pier from the load it collects.
//!
//! ```text
//! P      = A_trib × (D + L)              (lb)
//! A_req  = P / q_soil × 144              (in²)
//! d_req  = 2·√(A_req / π)                (in)
//! d      = smallest standard ≥ d_req     (in), 24" when none is large enough
//! ```

use serde::{Deserialize, Serialize};

use crate::loads::DesignLoads;
use crate::units::{Psf, SquareFeet, SquareInches};

/// Standard pier form diameters (in), smallest first
pub const STANDARD_FOOTING_DIAMETERS_IN: [u32; 6] = [12, 14, 16, 18, 20, 24];

/// Diameter used when the required diameter exceeds every standard size (in)
pub const MAX_FOOTING_DIAMETER_IN: u32 = 24;

/// Footing design for one post.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootingDesign {
    /// Floor area carried by the footing (sq ft)
    pub tributary_area_sqft: f64,
    /// Load delivered to the footing (lb)
    pub load_lb: f64,
    /// Bearing area the soil requires (sq in)
    pub required_area_sqin: f64,
    /// Diameter of a circle with the required area (in)
    pub required_diameter_in: f64,
    /// Selected standard diameter (in)
    pub diameter_in: u32,
    /// True when the required diameter is larger than any standard size
    pub clamped: bool,
}

/// Round a required diameter up to the next standard form size.
///
/// Returns the size and whether it had to be clamped to the largest one.
pub fn standard_diameter(required_diameter_in: f64) -> (u32, bool) {
    STANDARD_FOOTING_DIAMETERS_IN
        .iter()
        .copied()
        .find(|&d| d as f64 >= required_diameter_in)
        .map(|d| (d, false))
        .unwrap_or((MAX_FOOTING_DIAMETER_IN, true))
}

/// Size a footing for a tributary area on soil of a given bearing capacity.
///
/// ```rust
/// use deck_core::calculations::footing::size_footing;
/// use deck_core::loads::DesignLoads;
///
/// // 8' beam span × 10' joist span on 1500 psf soil
/// let footing = size_footing(80.0, 1500, &DesignLoads::default());
/// assert!((footing.required_diameter_in - 23.19).abs() < 0.01);
/// assert_eq!(footing.diameter_in, 24);
/// ```
pub fn size_footing(tributary_area_sqft: f64, soil_bearing_psf: u32, loads: &DesignLoads) -> FootingDesign {
    let load = loads.total() * SquareFeet(tributary_area_sqft);
    let required_area: SquareInches = load.bearing_area(Psf(soil_bearing_psf as f64)).into();
    let required_diameter_in = required_area.circle_diameter().0;
    let (diameter_in, clamped) = standard_diameter(required_diameter_in);

    FootingDesign {
        tributary_area_sqft,
        load_lb: load.0,
        required_area_sqin: required_area.0,
        required_diameter_in,
        diameter_in,
        clamped,
    }
}
