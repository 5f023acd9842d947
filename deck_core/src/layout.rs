//! # Layout Generator
//!
//! Positions every framing member once sizes and spans are known. Members
//! are emitted in a fixed order so identical plans give identical layouts:
//!
//! 1. footings and posts, by beam row then left to right
//! 2. one beam per row, full width
//! 3. joists left to right, centered on x = 0
//! 4. ledger (attached decks only), then left, right and outer rim joists
//!
//! Every vector is allocated at its final size before it is filled, so the
//! member counts are bounded before anything is allocated.

use crate::calculations::framing::MAX_POSTS_PER_ROW;
use crate::errors::{DeckError, DeckResult};
use crate::materials::{LumberSpec, PlyCount};
use crate::site::LedgerAttachment;
use crate::span_tables::JoistSpacing;
use crate::structure::{Beam, Footing, Joist, Ledger, Post, RimJoist, RimLocation};

/// Everything the generator needs, already sized.
#[derive(Debug, Clone)]
pub struct LayoutPlan<'a> {
    pub width_ft: f64,
    pub depth_ft: f64,
    pub attachment: LedgerAttachment,
    pub beam_rows_y_ft: &'a [f64],
    pub posts_per_row: usize,
    pub beam_span_ft: f64,
    pub joist_spacing: JoistSpacing,
    pub joist_bottom_ft: f64,
    pub beam_bottom_ft: f64,
    pub post_height_ft: f64,
    pub joist: LumberSpec,
    pub beam: LumberSpec,
    pub beam_ply: PlyCount,
    pub post: LumberSpec,
    pub footing_diameter_in: u32,
    pub footing_depth_in: u32,
}

/// Positioned members of one deck frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    pub footings: Vec<Footing>,
    pub posts: Vec<Post>,
    pub beams: Vec<Beam>,
    pub joists: Vec<Joist>,
    pub ledger: Option<Ledger>,
    pub rim_joists: Vec<RimJoist>,
}

/// Most joists a single frame may carry
pub const MAX_JOISTS: usize = 10_000;

/// Number of joists across the width: one every spacing plus the first.
///
/// Counted in whole inches so exact multiples of the spacing do not lose a
/// joist to floating-point division.
///
/// # Errors
///
/// `InvalidInput` on `width_ft` when the width needs more than
/// [`MAX_JOISTS`] joists.
pub fn joist_count(width_ft: f64, spacing: JoistSpacing) -> DeckResult<usize> {
    let width_in = width_ft * 12.0;
    let intervals = (width_in / spacing.inches() as f64).floor();
    if !(intervals >= 0.0 && intervals < MAX_JOISTS as f64) {
        return Err(DeckError::invalid_input(
            "width_ft",
            width_ft.to_string(),
            format!("Width needs more than {MAX_JOISTS} joists at {spacing}"),
        ));
    }
    Ok(intervals as usize + 1)
}

/// X positions of the joists, symmetric about x = 0.
pub fn joist_positions(width_ft: f64, spacing: JoistSpacing) -> DeckResult<Vec<f64>> {
    let count = joist_count(width_ft, spacing)?;
    let center = (count - 1) as f64 / 2.0;
    let spacing_ft = spacing.feet();
    Ok((0..count)
        .map(|i| (i as f64 - center) * spacing_ft)
        .collect())
}

/// Position every member for a sized plan.
///
/// # Errors
///
/// `InvalidInput` when the plan asks for more posts or joists than a frame
/// may carry.
pub fn generate_layout(plan: &LayoutPlan<'_>) -> DeckResult<FrameLayout> {
    if plan.posts_per_row > MAX_POSTS_PER_ROW {
        return Err(DeckError::invalid_input(
            "posts_per_row",
            plan.posts_per_row.to_string(),
            format!("At most {MAX_POSTS_PER_ROW} posts per beam row"),
        ));
    }
    let joist_xs = joist_positions(plan.width_ft, plan.joist_spacing)?;

    let half_width = plan.width_ft / 2.0;
    let support_count = plan.beam_rows_y_ft.len() * plan.posts_per_row;

    let mut footings = Vec::with_capacity(support_count);
    let mut posts = Vec::with_capacity(support_count);
    for &beam_y in plan.beam_rows_y_ft {
        for i in 0..plan.posts_per_row {
            let x = -half_width + i as f64 * plan.beam_span_ft;
            footings.push(Footing {
                x_ft: x,
                y_ft: beam_y,
                diameter_in: plan.footing_diameter_in,
                depth_in: plan.footing_depth_in,
            });
            posts.push(Post {
                x_ft: x,
                y_ft: beam_y,
                height_ft: plan.post_height_ft,
                lumber: plan.post,
            });
        }
    }

    let beams = plan
        .beam_rows_y_ft
        .iter()
        .map(|&beam_y| Beam {
            x_start_ft: -half_width,
            x_end_ft: half_width,
            y_ft: beam_y,
            z_ft: plan.beam_bottom_ft,
            lumber: plan.beam,
            ply: plan.beam_ply,
        })
        .collect();

    // TODO: freestanding decks still run joists from y = 0; confirm whether
    // they should start at the near beam row instead.
    let joists = joist_xs
        .into_iter()
        .map(|x| Joist {
            x_ft: x,
            y_start_ft: 0.0,
            y_end_ft: plan.depth_ft,
            z_ft: plan.joist_bottom_ft,
            lumber: plan.joist,
        })
        .collect();

    let ledger = plan.attachment.has_ledger().then(|| Ledger {
        x_start_ft: -half_width,
        x_end_ft: half_width,
        y_ft: 0.0,
        z_ft: plan.joist_bottom_ft,
        lumber: plan.joist,
        attachment: plan.attachment,
    });

    let side_rim = |location, x| RimJoist {
        location,
        x_start_ft: x,
        x_end_ft: x,
        y_start_ft: 0.0,
        y_end_ft: plan.depth_ft,
        lumber: plan.joist,
    };
    let rim_joists = vec![
        side_rim(RimLocation::Left, -half_width),
        side_rim(RimLocation::Right, half_width),
        RimJoist {
            location: RimLocation::Outer,
            x_start_ft: -half_width,
            x_end_ft: half_width,
            y_start_ft: plan.depth_ft,
            y_end_ft: plan.depth_ft,
            lumber: plan.joist,
        },
    ];

    Ok(FrameLayout {
        footings,
        posts,
        beams,
        joists,
        ledger,
        rim_joists,
    })
}
