//! # Structure Assembler
//!
//! Turns a [`SiteInput`] into a [`DeckStructure`] in one linear pass:
//!
//! ```text
//! spans → joist size → beam span / posts → beam size → elevations
//!       → post size → footing → layout
//! ```
//!
//! The first blocking failure stops the pass. Whatever was already recorded
//! (selected sizes, notes) stays on the structure, the error is appended to
//! `errors`, and no geometry is emitted.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::engine::generate_structure;
//! use deck_core::materials::LumberSize;
//! use deck_core::site::SiteInput;
//!
//! let deck = generate_structure(&SiteInput::new(16.0, 12.0, 3.0));
//! assert!(deck.compliant);
//! assert_eq!(deck.joist_size, Some(LumberSize::L2x8));
//! assert_eq!(deck.posts.len(), 3);
//! ```

use tracing::{debug, info, warn};

use crate::calculations::{
    plan_spans, post_spacing, select_beam_size, select_joist_size, select_post_size, size_footing,
    Elevations,
};
use crate::errors::DeckResult;
use crate::layout::{generate_layout, LayoutPlan};
use crate::settings::DesignSettings;
use crate::site::SiteInput;
use crate::structure::{DeckStructure, FramingSummary};
use crate::units::Feet;

/// Generate a deck structure with the published prescriptive settings.
pub fn generate_structure(site: &SiteInput) -> DeckStructure {
    generate_structure_with(site, &DesignSettings::default())
}

/// Generate a deck structure with explicit design settings.
pub fn generate_structure_with(site: &SiteInput, settings: &DesignSettings) -> DeckStructure {
    let mut structure = DeckStructure::new(site.clone(), settings.joist_spacing.inches());

    if let Err(error) = assemble(&mut structure, site, settings) {
        warn!(code = error.error_code(), %error, "deck generation halted");
        structure.record_failure(error);
        return structure;
    }

    info!(
        width_ft = site.width_ft,
        depth_ft = site.depth_ft,
        footings = structure.footings.len(),
        joists = structure.joists.len(),
        "deck structure generated"
    );
    structure
}

fn assemble(structure: &mut DeckStructure, site: &SiteInput, settings: &DesignSettings) -> DeckResult<()> {
    settings.validate()?;
    site.validate()?;

    let spacing = settings.joist_spacing;

    let spans = plan_spans(site, settings)?;
    debug!(
        cantilever_ft = spans.cantilever_ft,
        joist_span_ft = spans.joist_span_ft,
        beam_rows = spans.beam_rows_y_ft.len(),
        "spans planned"
    );
    if site.cantilever_ft.is_some() && !site.ledger_attachment.has_ledger() {
        structure
            .notes
            .push("Requested cantilever ignored for freestanding deck".to_string());
    }

    let joist = select_joist_size(spans.joist_span_ft, spacing)?;
    structure.joist_size = Some(joist.size);
    structure.notes.push(format!(
        "Joists: {} at {} (span {:.1}')",
        joist.size, spacing, spans.joist_span_ft
    ));
    debug!(size = %joist.size, max_span_ft = joist.max_span_ft, "joist selected");

    let supports = post_spacing(site.width_ft, settings.target_post_spacing_ft)?;
    let beam = select_beam_size(supports.beam_span_ft, spans.joist_span_ft)?;
    structure.beam_size = Some(beam.designation.size);
    structure.beam_ply = Some(beam.designation.plies);
    structure.notes.push(format!(
        "Beam: {} (span {:.1}', {} posts)",
        beam.designation, supports.beam_span_ft, supports.posts_per_row
    ));
    debug!(
        beam = %beam.designation,
        category = %beam.category,
        beam_span_ft = supports.beam_span_ft,
        "beam selected"
    );

    let joist_lumber = joist.size.spec();
    let beam_lumber = beam.designation.size.spec();
    let elevations = Elevations::stack(
        site.height_ft,
        settings.decking_thickness_in,
        &joist_lumber,
        &beam_lumber,
        site.frost_depth_in,
    );
    elevations.check_clearance()?;
    debug!(
        joist_bottom_ft = elevations.joist_bottom_ft,
        beam_bottom_ft = elevations.beam_bottom_ft,
        "elevations stacked"
    );

    let post = select_post_size(elevations.post_height_ft);
    structure.post_size = Some(post.size);
    if post.needs_engineer_review() {
        warn!(height_ft = post.height_ft, limit_ft = post.limit_ft, "post height beyond table");
        structure.notes.push(format!(
            "Posts: {} at {:.1}' height (verify with engineer)",
            post.size, post.height_ft
        ));
    } else {
        structure
            .notes
            .push(format!("Posts: {} at {:.1}' height", post.size, post.height_ft));
    }

    let tributary = Feet(supports.beam_span_ft) * Feet(spans.joist_span_ft);
    let footing = size_footing(tributary.0, site.soil_bearing_psf, &settings.loads);
    structure.footing_diameter_in = Some(footing.diameter_in);
    structure.notes.push(format!(
        "Footings: {}\" diameter x {}\" deep (tributary area {:.0} SF)",
        footing.diameter_in, site.frost_depth_in, footing.tributary_area_sqft
    ));
    if footing.clamped {
        warn!(required_in = footing.required_diameter_in, "footing clamped to largest standard size");
        structure.notes.push(format!(
            "Footings: required {:.1}\" diameter exceeds largest standard size; using {}\"",
            footing.required_diameter_in, footing.diameter_in
        ));
    }

    let layout = generate_layout(&LayoutPlan {
        width_ft: site.width_ft,
        depth_ft: site.depth_ft,
        attachment: site.ledger_attachment,
        beam_rows_y_ft: &spans.beam_rows_y_ft,
        posts_per_row: supports.posts_per_row,
        beam_span_ft: supports.beam_span_ft,
        joist_spacing: spacing,
        joist_bottom_ft: elevations.joist_bottom_ft,
        beam_bottom_ft: elevations.beam_bottom_ft,
        post_height_ft: elevations.post_height_ft,
        joist: joist_lumber,
        beam: beam_lumber,
        beam_ply: beam.designation.plies,
        post: post.size.spec(),
        footing_diameter_in: footing.diameter_in,
        footing_depth_in: site.frost_depth_in,
    })?;

    structure.notes.push(format!("Joists: {} total", layout.joists.len()));

    structure.footings = layout.footings;
    structure.posts = layout.posts;
    structure.beams = layout.beams;
    structure.joists = layout.joists;
    structure.ledger = layout.ledger;
    structure.rim_joists = layout.rim_joists;
    structure.framing = Some(FramingSummary {
        cantilever_ft: spans.cantilever_ft,
        joist_span_ft: spans.joist_span_ft,
        beam_span_ft: supports.beam_span_ft,
        posts_per_row: supports.posts_per_row,
        beam_rows_y_ft: spans.beam_rows_y_ft,
        tributary_area_sqft: footing.tributary_area_sqft,
        elevations,
    });

    Ok(())
}
