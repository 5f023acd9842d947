//! # Site Input
//!
//! Measurements and selections gathered at the site visit. This is the only
//! input to the framing engine.
//!
//! ```text
//!                 house wall (ledger line, y = 0)
//!   x = -width/2 ──────────────┼────────────── x = +width/2
//!                              │ +Y (depth)
//!                              ▼
//! ```
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "width_ft": 16.0,
//!   "depth_ft": 12.0,
//!   "height_ft": 3.0,
//!   "ledger_attachment": "direct",
//!   "soil_bearing_psf": 1500,
//!   "frost_depth_in": 18
//! }
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, DeckResult};
use crate::materials::{DeckingType, RailingType};

/// Conservative presumptive soil bearing capacity (psf)
pub const DEFAULT_SOIL_BEARING_PSF: u32 = 1500;

/// Local frost depth (in)
pub const DEFAULT_FROST_DEPTH_IN: u32 = 18;

/// How the deck frame is supported at the house side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LedgerAttachment {
    /// Ledger bolted directly to the house rim joist
    #[default]
    Direct,
    /// Ledger on spacers for drainage
    Standoff,
    /// No ledger; beams carry both ends
    Freestanding,
}

impl LedgerAttachment {
    pub const ALL: [LedgerAttachment; 3] = [
        LedgerAttachment::Direct,
        LedgerAttachment::Standoff,
        LedgerAttachment::Freestanding,
    ];

    /// Wire value (e.g., "standoff")
    pub fn code(&self) -> &'static str {
        match self {
            LedgerAttachment::Direct => "direct",
            LedgerAttachment::Standoff => "standoff",
            LedgerAttachment::Freestanding => "freestanding",
        }
    }

    /// Whether a ledger ties the deck to the house
    pub fn has_ledger(&self) -> bool {
        !matches!(self, LedgerAttachment::Freestanding)
    }
}

impl std::fmt::Display for LedgerAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for LedgerAttachment {
    type Err = DeckError;

    fn from_str(s: &str) -> DeckResult<Self> {
        LedgerAttachment::ALL
            .iter()
            .copied()
            .find(|mode| mode.code() == s)
            .ok_or_else(|| {
                DeckError::invalid_input(
                    "ledger_attachment",
                    s,
                    "Expected one of: direct, standoff, freestanding",
                )
            })
    }
}

/// Customer and job details, passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub customer_name: String,
    pub site_address: String,
}

/// Site measurements and selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteInput {
    /// Deck width parallel to the house (ft)
    pub width_ft: f64,

    /// Deck depth perpendicular to the house (ft)
    pub depth_ft: f64,

    /// Grade to top of decking (ft)
    pub height_ft: f64,

    /// House-side support
    #[serde(default)]
    pub ledger_attachment: LedgerAttachment,

    /// Allowable soil bearing pressure (psf)
    #[serde(default = "default_soil_bearing")]
    pub soil_bearing_psf: u32,

    /// Footing depth below grade (in)
    #[serde(default = "default_frost_depth")]
    pub frost_depth_in: u32,

    /// Requested cantilever past the beam (ft). When absent the preferred
    /// cantilever is capped at the allowed fraction of depth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cantilever_ft: Option<f64>,

    /// Grade slope under the deck (%)
    #[serde(default)]
    pub slope_percent: f64,

    #[serde(default)]
    pub decking_type: DeckingType,

    #[serde(default)]
    pub railing_type: RailingType,

    /// Railing run (linear ft)
    #[serde(default)]
    pub railing_lf: f64,

    /// Number of stair treads
    #[serde(default)]
    pub stair_count: u32,

    #[serde(default)]
    pub project: ProjectInfo,
}

fn default_soil_bearing() -> u32 {
    DEFAULT_SOIL_BEARING_PSF
}

fn default_frost_depth() -> u32 {
    DEFAULT_FROST_DEPTH_IN
}

impl SiteInput {
    /// Site input with default site conditions and selections.
    ///
    /// ```rust
    /// use deck_core::site::{LedgerAttachment, SiteInput};
    ///
    /// let site = SiteInput::new(16.0, 12.0, 3.0).with_ledger(LedgerAttachment::Standoff);
    /// assert_eq!(site.soil_bearing_psf, 1500);
    /// assert!(site.ledger_attachment.has_ledger());
    /// ```
    pub fn new(width_ft: f64, depth_ft: f64, height_ft: f64) -> Self {
        SiteInput {
            width_ft,
            depth_ft,
            height_ft,
            ledger_attachment: LedgerAttachment::default(),
            soil_bearing_psf: DEFAULT_SOIL_BEARING_PSF,
            frost_depth_in: DEFAULT_FROST_DEPTH_IN,
            cantilever_ft: None,
            slope_percent: 0.0,
            decking_type: DeckingType::default(),
            railing_type: RailingType::default(),
            railing_lf: 0.0,
            stair_count: 0,
            project: ProjectInfo::default(),
        }
    }

    pub fn with_ledger(mut self, ledger: LedgerAttachment) -> Self {
        self.ledger_attachment = ledger;
        self
    }

    pub fn with_soil_bearing(mut self, psf: u32) -> Self {
        self.soil_bearing_psf = psf;
        self
    }

    pub fn with_frost_depth(mut self, inches: u32) -> Self {
        self.frost_depth_in = inches;
        self
    }

    pub fn with_cantilever(mut self, cantilever_ft: f64) -> Self {
        self.cantilever_ft = Some(cantilever_ft);
        self
    }

    /// Deck area (sq ft)
    pub fn area_sqft(&self) -> f64 {
        self.width_ft * self.depth_ft
    }

    /// Check the positivity constraints on the measurements.
    pub fn validate(&self) -> DeckResult<()> {
        let dims = [
            ("width_ft", self.width_ft),
            ("depth_ft", self.depth_ft),
            ("height_ft", self.height_ft),
        ];
        for (field, value) in dims {
            if !(value > 0.0) || !value.is_finite() {
                return Err(DeckError::invalid_input(
                    field,
                    value.to_string(),
                    "Dimension must be a positive number of feet",
                ));
            }
        }
        if self.soil_bearing_psf == 0 {
            return Err(DeckError::invalid_input(
                "soil_bearing_psf",
                "0",
                "Soil bearing capacity must be positive",
            ));
        }
        if self.frost_depth_in == 0 {
            return Err(DeckError::invalid_input(
                "frost_depth_in",
                "0",
                "Footings must extend below grade",
            ));
        }
        if let Some(cantilever) = self.cantilever_ft {
            if !(cantilever >= 0.0) {
                return Err(DeckError::invalid_input(
                    "cantilever_ft",
                    cantilever.to_string(),
                    "Cantilever cannot be negative",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_json_uses_defaults() {
        let site: SiteInput =
            serde_json::from_str(r#"{ "width_ft": 16, "depth_ft": 12, "height_ft": 3 }"#).unwrap();
        assert_eq!(site.ledger_attachment, LedgerAttachment::Direct);
        assert_eq!(site.soil_bearing_psf, 1500);
        assert_eq!(site.frost_depth_in, 18);
        assert_eq!(site.cantilever_ft, None);
        assert_eq!(site, SiteInput::new(16.0, 12.0, 3.0));
    }

    #[test]
    fn test_unknown_attachment_rejected() {
        let json = r#"{ "width_ft": 16, "depth_ft": 12, "height_ft": 3, "ledger_attachment": "hanging" }"#;
        assert!(serde_json::from_str::<SiteInput>(json).is_err());
        assert!("hanging".parse::<LedgerAttachment>().is_err());
        assert_eq!("standoff".parse::<LedgerAttachment>().unwrap(), LedgerAttachment::Standoff);
    }

    #[test]
    fn test_validate() {
        assert!(SiteInput::new(16.0, 12.0, 3.0).validate().is_ok());
        assert!(SiteInput::new(0.0, 12.0, 3.0).validate().is_err());
        assert!(SiteInput::new(16.0, -1.0, 3.0).validate().is_err());
        assert!(SiteInput::new(16.0, 12.0, f64::NAN).validate().is_err());
        assert!(SiteInput::new(16.0, 12.0, 3.0).with_soil_bearing(0).validate().is_err());
        assert!(SiteInput::new(16.0, 12.0, 3.0).with_cantilever(-1.0).validate().is_err());
    }

    #[test]
    fn test_ledger_presence() {
        assert!(LedgerAttachment::Direct.has_ledger());
        assert!(LedgerAttachment::Standoff.has_ledger());
        assert!(!LedgerAttachment::Freestanding.has_ledger());
    }
}
