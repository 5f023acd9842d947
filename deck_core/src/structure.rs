//! # Deck Structure
//!
//! The engine's output: every footing, post, beam and joist positioned in
//! deck coordinates, plus the ledger and rim joists, the selected sizes, and
//! the compliance verdict.
//!
//! ## Coordinates
//!
//! - Origin (0, 0) at the center of the house-wall attachment line
//! - +X along the house (width), +Y away from the house (depth)
//! - +Z up from grade; member `z_ft` is the member's bottom face
//!
//! ## Consumers
//!
//! - Drawing: render only when [`DeckStructure::is_renderable`] is true.
//! - Quoting: price only from [`DeckStructure::takeoff`], which is `None` for
//!   a non-compliant structure.

use serde::{Deserialize, Serialize};

use crate::calculations::Elevations;
use crate::errors::DeckError;
use crate::materials::{LumberSize, LumberSpec, PlyCount};
use crate::site::{LedgerAttachment, SiteInput};

// ============================================================================
// Members
// ============================================================================

/// Concrete pier footing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footing {
    pub x_ft: f64,
    pub y_ft: f64,
    pub diameter_in: u32,
    /// Depth below grade (in)
    pub depth_in: u32,
}

/// Vertical support post, grade to beam bottom
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub x_ft: f64,
    pub y_ft: f64,
    pub height_ft: f64,
    pub lumber: LumberSpec,
}

/// Horizontal beam carrying the joists
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    pub x_start_ft: f64,
    pub x_end_ft: f64,
    pub y_ft: f64,
    /// Beam bottom elevation
    pub z_ft: f64,
    pub lumber: LumberSpec,
    pub ply: PlyCount,
}

impl Beam {
    pub fn length_ft(&self) -> f64 {
        self.x_end_ft - self.x_start_ft
    }

    /// Board length including every ply
    pub fn board_length_ft(&self) -> f64 {
        self.length_ft() * self.ply.count() as f64
    }
}

/// Floor joist
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Joist {
    pub x_ft: f64,
    pub y_start_ft: f64,
    pub y_end_ft: f64,
    /// Joist bottom elevation
    pub z_ft: f64,
    pub lumber: LumberSpec,
}

impl Joist {
    pub fn length_ft(&self) -> f64 {
        self.y_end_ft - self.y_start_ft
    }
}

/// Ledger board along the house wall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub x_start_ft: f64,
    pub x_end_ft: f64,
    pub y_ft: f64,
    pub z_ft: f64,
    pub lumber: LumberSpec,
    pub attachment: LedgerAttachment,
}

impl Ledger {
    pub fn length_ft(&self) -> f64 {
        self.x_end_ft - self.x_start_ft
    }
}

/// Which edge of the frame a rim joist closes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RimLocation {
    Left,
    Right,
    Outer,
}

/// Perimeter joist. Side rims run along Y at a fixed X; the outer rim runs
/// along X at y = depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RimJoist {
    pub location: RimLocation,
    pub x_start_ft: f64,
    pub x_end_ft: f64,
    pub y_start_ft: f64,
    pub y_end_ft: f64,
    pub lumber: LumberSpec,
}

impl RimJoist {
    pub fn length_ft(&self) -> f64 {
        (self.x_end_ft - self.x_start_ft) + (self.y_end_ft - self.y_start_ft)
    }
}

// ============================================================================
// Summaries
// ============================================================================

/// Computed spans and elevations behind the layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramingSummary {
    pub cantilever_ft: f64,
    pub joist_span_ft: f64,
    pub beam_span_ft: f64,
    pub posts_per_row: usize,
    pub beam_rows_y_ft: Vec<f64>,
    pub tributary_area_sqft: f64,
    pub elevations: Elevations,
}

/// Member counts and lengths for the quoting layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialTakeoff {
    pub deck_area_sqft: f64,
    pub footing_count: usize,
    pub post_count: usize,
    pub post_lf: f64,
    pub beam_lf: f64,
    pub joist_count: usize,
    pub joist_lf: f64,
    pub ledger_lf: f64,
    pub rim_lf: f64,
}

// ============================================================================
// Deck structure
// ============================================================================

/// Complete structural model of one deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckStructure {
    /// The site description this structure was generated from
    pub input: SiteInput,

    pub footings: Vec<Footing>,
    pub posts: Vec<Post>,
    pub beams: Vec<Beam>,
    pub joists: Vec<Joist>,
    /// Present unless the deck is freestanding
    pub ledger: Option<Ledger>,
    /// Left, right and outer, in that order
    pub rim_joists: Vec<RimJoist>,

    pub joist_size: Option<LumberSize>,
    pub joist_spacing_in: u32,
    pub beam_size: Option<LumberSize>,
    pub beam_ply: Option<PlyCount>,
    pub post_size: Option<LumberSize>,
    pub footing_diameter_in: Option<u32>,

    pub framing: Option<FramingSummary>,

    pub compliant: bool,
    /// Informational, in generation order
    pub notes: Vec<String>,
    /// Blocking; non-empty exactly when not compliant
    pub errors: Vec<String>,
    /// Typed form of the first blocking error
    pub failure: Option<DeckError>,
}

impl DeckStructure {
    /// Empty, compliant structure for an input; the assembler fills it.
    pub fn new(input: SiteInput, joist_spacing_in: u32) -> Self {
        DeckStructure {
            input,
            footings: Vec::new(),
            posts: Vec::new(),
            beams: Vec::new(),
            joists: Vec::new(),
            ledger: None,
            rim_joists: Vec::new(),
            joist_size: None,
            joist_spacing_in,
            beam_size: None,
            beam_ply: None,
            post_size: None,
            footing_diameter_in: None,
            framing: None,
            compliant: true,
            notes: Vec::new(),
            errors: Vec::new(),
            failure: None,
        }
    }

    /// Record a blocking failure and mark the structure non-compliant.
    pub fn record_failure(&mut self, error: DeckError) {
        self.errors.push(error.to_string());
        self.compliant = false;
        if self.failure.is_none() {
            self.failure = Some(error);
        }
    }

    /// Safe to hand to the drawing renderer
    pub fn is_renderable(&self) -> bool {
        self.errors.is_empty()
    }

    /// Beam designation as drawn and quoted, e.g. "2-2x12"
    pub fn beam_designation(&self) -> Option<String> {
        let size = self.beam_size?;
        let ply = self.beam_ply.unwrap_or_default();
        Some(format!("{}{}", ply.prefix(), size))
    }

    /// Counts and linear footage for quoting; `None` when not compliant.
    pub fn takeoff(&self) -> Option<MaterialTakeoff> {
        if !self.compliant {
            return None;
        }
        Some(MaterialTakeoff {
            deck_area_sqft: self.input.area_sqft(),
            footing_count: self.footings.len(),
            post_count: self.posts.len(),
            post_lf: self.posts.iter().map(|p| p.height_ft).sum(),
            beam_lf: self.beams.iter().map(Beam::board_length_ft).sum(),
            joist_count: self.joists.len(),
            joist_lf: self.joists.iter().map(Joist::length_ft).sum(),
            ledger_lf: self.ledger.as_ref().map_or(0.0, Ledger::length_ft),
            rim_lf: self.rim_joists.iter().map(RimJoist::length_ft).sum(),
        })
    }

    /// Total number of positioned members, ledger and rims included
    pub fn member_count(&self) -> usize {
        self.footings.len()
            + self.posts.len()
            + self.beams.len()
            + self.joists.len()
            + usize::from(self.ledger.is_some())
            + self.rim_joists.len()
    }
}
