//! Lumber Catalog
//!
//! The fixed set of pressure-treated lumber sizes the prescriptive deck tables
//! reference, with nominal-to-actual conversions per the AWC standard
//! dressed sizes.
//!
//! ## Nominal vs Actual Dimensions
//!
//! - 2x nominal = 1.5" actual
//! - 4x nominal = 3.5" actual
//! - 6x nominal = 5.5" actual
//!
//! ## Built-Up Beams
//!
//! Deck beams are normally doubled 2x members ("2-2x10"). The total width of
//! a built-up beam is the ply count times the single-ply width.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, DeckResult};
use crate::units::{Feet, Inches};

/// Catalog lumber size, keyed by nominal designation.
///
/// Variant order is the nominal order used by the size selectors, so the
/// derived `Ord` ranks 2x6 < 2x8 < 2x10 < 2x12 and 4x4 < 4x6 < 6x6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LumberSize {
    /// 2x6 (1.5" x 5.5")
    #[serde(rename = "2x6")]
    L2x6,
    /// 2x8 (1.5" x 7.25")
    #[serde(rename = "2x8")]
    L2x8,
    /// 2x10 (1.5" x 9.25")
    #[serde(rename = "2x10")]
    L2x10,
    /// 2x12 (1.5" x 11.25")
    #[serde(rename = "2x12")]
    L2x12,
    /// 4x4 (3.5" x 3.5")
    #[serde(rename = "4x4")]
    L4x4,
    /// 4x6 (3.5" x 5.5")
    #[serde(rename = "4x6")]
    L4x6,
    /// 4x8 (3.5" x 7.25")
    #[serde(rename = "4x8")]
    L4x8,
    /// 4x10 (3.5" x 9.25")
    #[serde(rename = "4x10")]
    L4x10,
    /// 4x12 (3.5" x 11.25")
    #[serde(rename = "4x12")]
    L4x12,
    /// 6x6 (5.5" x 5.5")
    #[serde(rename = "6x6")]
    L6x6,
}

impl LumberSize {
    /// Every catalog entry
    pub const ALL: [LumberSize; 10] = [
        LumberSize::L2x6,
        LumberSize::L2x8,
        LumberSize::L2x10,
        LumberSize::L2x12,
        LumberSize::L4x4,
        LumberSize::L4x6,
        LumberSize::L4x8,
        LumberSize::L4x10,
        LumberSize::L4x12,
        LumberSize::L6x6,
    ];

    /// 2x sizes tried for joists and doubled beams, smallest first
    pub const DIMENSION_2X: [LumberSize; 4] = [
        LumberSize::L2x6,
        LumberSize::L2x8,
        LumberSize::L2x10,
        LumberSize::L2x12,
    ];

    /// Solid 4x beam sizes (tabulated, not selected)
    pub const SOLID_4X: [LumberSize; 4] = [
        LumberSize::L4x6,
        LumberSize::L4x8,
        LumberSize::L4x10,
        LumberSize::L4x12,
    ];

    /// Post sizes, smallest first
    pub const POSTS: [LumberSize; 3] = [LumberSize::L4x4, LumberSize::L4x6, LumberSize::L6x6];

    /// Get the actual dimensions (width, height) in inches for a single ply
    pub fn actual_dimensions(&self) -> (f64, f64) {
        match self {
            LumberSize::L2x6 => (1.5, 5.5),
            LumberSize::L2x8 => (1.5, 7.25),
            LumberSize::L2x10 => (1.5, 9.25),
            LumberSize::L2x12 => (1.5, 11.25),
            LumberSize::L4x4 => (3.5, 3.5),
            LumberSize::L4x6 => (3.5, 5.5),
            LumberSize::L4x8 => (3.5, 7.25),
            LumberSize::L4x10 => (3.5, 9.25),
            LumberSize::L4x12 => (3.5, 11.25),
            LumberSize::L6x6 => (5.5, 5.5),
        }
    }

    /// Get nominal designation (e.g., "2x10")
    pub fn nominal(&self) -> &'static str {
        match self {
            LumberSize::L2x6 => "2x6",
            LumberSize::L2x8 => "2x8",
            LumberSize::L2x10 => "2x10",
            LumberSize::L2x12 => "2x12",
            LumberSize::L4x4 => "4x4",
            LumberSize::L4x6 => "4x6",
            LumberSize::L4x8 => "4x8",
            LumberSize::L4x10 => "4x10",
            LumberSize::L4x12 => "4x12",
            LumberSize::L6x6 => "6x6",
        }
    }

    /// Full catalog entry for this size
    pub fn spec(&self) -> LumberSpec {
        let (width_in, height_in) = self.actual_dimensions();
        LumberSpec {
            nominal: *self,
            width_in,
            height_in,
        }
    }
}

impl std::fmt::Display for LumberSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nominal())
    }
}

impl FromStr for LumberSize {
    type Err = DeckError;

    fn from_str(s: &str) -> DeckResult<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        LumberSize::ALL
            .iter()
            .copied()
            .find(|size| size.nominal() == wanted)
            .ok_or_else(|| DeckError::invalid_input("lumber", s, "Not a catalog lumber size"))
    }
}

// ============================================================================
// LUMBER SPEC
// ============================================================================

/// Catalog entry: nominal designation plus actual cross-section.
///
/// Every structural member in a generated deck carries one of these, so a
/// renderer can draw true sizes without its own lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LumberSpec {
    /// Nominal designation (serialized as "2x10")
    pub nominal: LumberSize,
    /// Actual width in inches
    pub width_in: f64,
    /// Actual height (depth) in inches
    pub height_in: f64,
}

impl LumberSpec {
    /// Look up a catalog entry by nominal designation
    ///
    /// ```rust
    /// use deck_core::materials::LumberSpec;
    ///
    /// let spec = LumberSpec::lookup("2x10").unwrap();
    /// assert_eq!(spec.height_in, 9.25);
    /// assert!(LumberSpec::lookup("2x14").is_err());
    /// ```
    pub fn lookup(nominal: &str) -> DeckResult<LumberSpec> {
        nominal.parse::<LumberSize>().map(|size| size.spec())
    }

    /// Actual width in feet
    pub fn width_ft(&self) -> f64 {
        Feet::from(Inches(self.width_in)).0
    }

    /// Actual height in feet
    pub fn height_ft(&self) -> f64 {
        Feet::from(Inches(self.height_in)).0
    }
}

impl From<LumberSize> for LumberSpec {
    fn from(size: LumberSize) -> Self {
        size.spec()
    }
}

// ============================================================================
// PLY COUNT
// ============================================================================

/// Number of plies for built-up beams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PlyCount {
    /// Solid or single member
    Single,
    /// Doubled (the prescriptive default for deck beams)
    #[default]
    Double,
}

impl PlyCount {
    /// Get the numeric ply count
    pub fn count(&self) -> u8 {
        match self {
            PlyCount::Single => 1,
            PlyCount::Double => 2,
        }
    }

    /// Get short label for beam designation (e.g., "2-", "")
    pub fn prefix(&self) -> &'static str {
        match self {
            PlyCount::Single => "",
            PlyCount::Double => "2-",
        }
    }
}

impl std::fmt::Display for PlyCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.count())
    }
}

// ============================================================================
// BUILT-UP BEAM DESIGNATION
// ============================================================================

/// Complete beam designation with size and ply count, e.g. "2-2x10" or "4x8".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BeamDesignation {
    /// The lumber size for each ply
    pub size: LumberSize,
    /// Number of plies
    pub plies: PlyCount,
}

impl BeamDesignation {
    /// Create a new beam designation
    pub fn new(size: LumberSize, plies: PlyCount) -> Self {
        Self { size, plies }
    }

    /// Doubled 2x beam
    pub fn doubled(size: LumberSize) -> Self {
        Self::new(size, PlyCount::Double)
    }

    /// Solid single-member beam
    pub fn solid(size: LumberSize) -> Self {
        Self::new(size, PlyCount::Single)
    }

    /// Get the total actual width (all plies combined) in inches
    pub fn total_width_in(&self) -> f64 {
        self.size.actual_dimensions().0 * self.plies.count() as f64
    }

    /// Get the depth in inches (same for all plies)
    pub fn depth_in(&self) -> f64 {
        self.size.actual_dimensions().1
    }

    /// Get display name (e.g., "2-2x10", "4x10")
    pub fn display_name(&self) -> String {
        format!("{}{}", self.plies.prefix(), self.size.nominal())
    }
}

impl std::fmt::Display for BeamDesignation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// TESTS
// ============================================================================
