//! Design loads for deck footings
//!
//! The prescriptive tables are built around a single uniform deck load: 15 psf
//! dead (framing and decking) plus 40 psf live. The same total is used to size
//! the footings from each post's tributary area.
//!
//! # Example
//!
//! ```
//! use deck_core::loads::{DesignLoads, LoadType};
//!
//! let loads = DesignLoads::default();
//! assert_eq!(loads.get(LoadType::Dead).0, 15.0);
//! assert_eq!(loads.total().0, 55.0);
//! ```

pub mod load_types;

pub use load_types::LoadType;

use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, DeckResult};
use crate::units::Psf;

/// Dead load for framing plus decking (psf)
pub const DEAD_LOAD_PSF: f64 = 15.0;

/// Residential deck live load (psf)
pub const LIVE_LOAD_PSF: f64 = 40.0;

/// Uniform area loads applied to the whole deck surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignLoads {
    /// Dead load (psf)
    pub dead_psf: f64,
    /// Live load (psf)
    pub live_psf: f64,
}

impl DesignLoads {
    /// Get the load for a single load type
    pub fn get(&self, load_type: LoadType) -> Psf {
        match load_type {
            LoadType::Dead => Psf(self.dead_psf),
            LoadType::Live => Psf(self.live_psf),
        }
    }

    /// Total service load D + L
    pub fn total(&self) -> Psf {
        LoadType::ALL
            .iter()
            .fold(Psf(0.0), |acc, &load_type| acc + self.get(load_type))
    }

    /// Reject negative components and a non-positive total.
    pub fn validate(&self) -> DeckResult<()> {
        for load_type in LoadType::ALL {
            let value = self.get(load_type).0;
            if !(value >= 0.0) {
                let field = match load_type {
                    LoadType::Dead => "loads.dead_psf",
                    LoadType::Live => "loads.live_psf",
                };
                return Err(DeckError::invalid_input(
                    field,
                    value.to_string(),
                    "Load cannot be negative",
                ));
            }
        }
        if self.total().0 <= 0.0 {
            return Err(DeckError::invalid_input(
                "loads",
                self.total().0.to_string(),
                "Total design load must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for DesignLoads {
    fn default() -> Self {
        DesignLoads {
            dead_psf: DEAD_LOAD_PSF,
            live_psf: LIVE_LOAD_PSF,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_total() {
        assert_eq!(DesignLoads::default().total(), Psf(55.0));
    }

    #[test]
    fn test_validate() {
        assert!(DesignLoads::default().validate().is_ok());

        let negative = DesignLoads { dead_psf: -1.0, live_psf: 40.0 };
        let err = negative.validate().unwrap_err();
        assert!(matches!(err, DeckError::InvalidInput { ref field, .. } if field == "loads.dead_psf"));

        let zero = DesignLoads { dead_psf: 0.0, live_psf: 0.0 };
        assert!(zero.validate().is_err());
    }
}
