//! # Framing Geometry
//!
//! Spans, beam rows, post spacing and the elevation stack.
//!
//! ## Span policy
//!
//! | Attachment           | Cantilever               | Joist span     | Beam rows (y)          |
//! |----------------------|--------------------------|----------------|------------------------|
//! | direct / standoff    | min(2', 25% of depth)    | depth − cant.  | depth − cant.          |
//! | freestanding         | 0                        | depth / 2      | depth/3, 2·depth/3     |
//!
//! ## Elevation stack (grade up)
//!
//! ```text
//! deck top      = height
//! joist top     = height − decking
//! joist bottom  = joist top − joist depth   = beam top
//! beam bottom   = beam top − beam depth     = post top
//! grade         = 0
//! footing base  = −frost depth
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, DeckResult};
use crate::materials::LumberSpec;
use crate::settings::DesignSettings;
use crate::site::SiteInput;
use crate::units::{Feet, Inches};

/// Cantilever, joist span and beam row positions for one deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanPlan {
    /// Joist overhang past the outer beam (ft)
    pub cantilever_ft: f64,
    /// Joist span between supports (ft)
    pub joist_span_ft: f64,
    /// Beam row y positions, nearest the house first (ft)
    pub beam_rows_y_ft: Vec<f64>,
}

/// Work out cantilever, joist span and beam rows.
///
/// # Errors
///
/// `CantileverExceeded` when a requested cantilever is more than the allowed
/// fraction of the deck depth.
pub fn plan_spans(site: &SiteInput, settings: &DesignSettings) -> DeckResult<SpanPlan> {
    let depth = site.depth_ft;

    if !site.ledger_attachment.has_ledger() {
        return Ok(SpanPlan {
            cantilever_ft: 0.0,
            joist_span_ft: depth / 2.0,
            beam_rows_y_ft: vec![depth / 3.0, 2.0 * depth / 3.0],
        });
    }

    let max_cantilever_ft = depth * settings.max_cantilever_ratio;
    let cantilever_ft = site
        .cantilever_ft
        .unwrap_or_else(|| settings.preferred_cantilever_ft.min(max_cantilever_ft));

    if cantilever_ft > max_cantilever_ft {
        return Err(DeckError::CantileverExceeded {
            cantilever_ft,
            max_cantilever_ft,
            ratio_pct: settings.max_cantilever_ratio * 100.0,
            depth_ft: depth,
        });
    }

    Ok(SpanPlan {
        cantilever_ft,
        joist_span_ft: depth - cantilever_ft,
        beam_rows_y_ft: vec![depth - cantilever_ft],
    })
}

/// Post count and post-to-post span along each beam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PostSpacing {
    /// Posts in each beam row
    pub posts_per_row: usize,
    /// Even spacing between posts (ft)
    pub beam_span_ft: f64,
}

/// Most posts a single beam row may carry
pub const MAX_POSTS_PER_ROW: usize = 1_000;

/// Spread posts evenly across the width, no further apart than the target.
///
/// ```rust
/// use deck_core::calculations::framing::post_spacing;
///
/// let posts = post_spacing(20.0, 8.0).unwrap();
/// assert_eq!(posts.posts_per_row, 4);
/// assert!((posts.beam_span_ft - 6.667).abs() < 1e-3);
/// ```
///
/// # Errors
///
/// `InvalidInput` on `width_ft` when the width needs more than
/// [`MAX_POSTS_PER_ROW`] posts.
pub fn post_spacing(width_ft: f64, target_spacing_ft: f64) -> DeckResult<PostSpacing> {
    let too_wide = || {
        DeckError::invalid_input(
            "width_ft",
            width_ft.to_string(),
            format!("Width needs more than {MAX_POSTS_PER_ROW} posts per beam row"),
        )
    };

    let bays = (width_ft / target_spacing_ft).ceil();
    if !(bays < MAX_POSTS_PER_ROW as f64) {
        return Err(too_wide());
    }
    let posts_per_row = (bays as usize).checked_add(1).ok_or_else(too_wide)?.max(2);

    Ok(PostSpacing {
        posts_per_row,
        beam_span_ft: width_ft / (posts_per_row - 1) as f64,
    })
}

/// Vertical positions of the framing layers (ft above grade).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Elevations {
    pub deck_top_ft: f64,
    pub joist_top_ft: f64,
    pub joist_bottom_ft: f64,
    pub beam_top_ft: f64,
    pub beam_bottom_ft: f64,
    /// Grade to beam bottom
    pub post_height_ft: f64,
    /// Footing base, negative (below grade)
    pub footing_bottom_ft: f64,
}

impl Elevations {
    /// Stack joist, beam and post from the deck surface down.
    pub fn stack(
        height_ft: f64,
        decking_thickness_in: f64,
        joist: &LumberSpec,
        beam: &LumberSpec,
        frost_depth_in: u32,
    ) -> Self {
        let decking = Feet::from(Inches(decking_thickness_in));
        let joist_top = Feet(height_ft) - decking;
        let joist_bottom = joist_top - Feet(joist.height_ft());
        let beam_bottom = joist_bottom - Feet(beam.height_ft());
        let footing_bottom = Feet::from(Inches(-(frost_depth_in as f64)));

        Elevations {
            deck_top_ft: height_ft,
            joist_top_ft: joist_top.0,
            joist_bottom_ft: joist_bottom.0,
            beam_top_ft: joist_bottom.0,
            beam_bottom_ft: beam_bottom.0,
            post_height_ft: beam_bottom.0,
            footing_bottom_ft: footing_bottom.0,
        }
    }

    /// Top-to-bottom ordering holds with room for a post.
    pub fn is_ordered(&self) -> bool {
        self.deck_top_ft >= self.joist_top_ft
            && self.joist_top_ft > self.joist_bottom_ft
            && self.joist_bottom_ft == self.beam_top_ft
            && self.beam_top_ft > self.beam_bottom_ft
            && self.beam_bottom_ft > 0.0
            && 0.0 > self.footing_bottom_ft
    }

    /// Reject a stack with no room for posts below the beam.
    pub fn check_clearance(&self) -> DeckResult<()> {
        if self.post_height_ft > 0.0 {
            return Ok(());
        }
        Err(DeckError::invalid_input(
            "height_ft",
            self.deck_top_ft.to_string(),
            format!(
                "Deck is too low for the framing: beam bottom would be {:.2}' relative to grade",
                self.beam_bottom_ft
            ),
        ))
    }
}
