//! Property-based tests for sizing and layout guarantees

use deck_core::calculations::footing::{size_footing, STANDARD_FOOTING_DIAMETERS_IN};
use deck_core::calculations::joist::select_joist_size;
use deck_core::calculations::beam::select_beam_size;
use deck_core::layout::joist_positions;
use deck_core::loads::DesignLoads;
use deck_core::materials::{BeamDesignation, LumberSize};
use deck_core::span_tables::{beam_max_span, joist_max_span, JoistSpacing, JoistSpanCategory};
use deck_core::{generate_structure, LedgerAttachment, SiteInput};
use proptest::prelude::*;

fn spacing() -> impl Strategy<Value = JoistSpacing> {
    prop_oneof![
        Just(JoistSpacing::Oc12),
        Just(JoistSpacing::Oc16),
        Just(JoistSpacing::Oc24),
    ]
}

fn attachment() -> impl Strategy<Value = LedgerAttachment> {
    prop_oneof![
        Just(LedgerAttachment::Direct),
        Just(LedgerAttachment::Standoff),
        Just(LedgerAttachment::Freestanding),
    ]
}

fn site() -> impl Strategy<Value = SiteInput> {
    (4.0..40.0f64, 4.0..24.0f64, 2.5..16.0f64, attachment(), 500u32..4000, 12u32..48).prop_map(
        |(w, d, h, ledger, soil, frost)| {
            SiteInput::new(w, d, h)
                .with_ledger(ledger)
                .with_soil_bearing(soil)
                .with_frost_depth(frost)
        },
    )
}

proptest! {
    /// The selected joist covers the span and the next size down would not.
    #[test]
    fn joist_selection_is_minimal(span in 0.5..21.5f64, spacing in spacing()) {
        if let Ok(selection) = select_joist_size(span, spacing) {
            prop_assert!(selection.max_span_ft >= span);
            let smaller = LumberSize::DIMENSION_2X
                .iter()
                .take_while(|&&size| size != selection.size)
                .filter_map(|&size| joist_max_span(size, spacing));
            for max in smaller {
                prop_assert!(max < span);
            }
        } else {
            prop_assert!(joist_max_span(LumberSize::L2x12, spacing).unwrap() < span);
        }
    }

    /// A longer span never gets a smaller joist.
    #[test]
    fn joist_selection_is_monotonic(a in 0.5..19.5f64, b in 0.5..19.5f64) {
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        let short_size = select_joist_size(short, JoistSpacing::Oc16).unwrap().size;
        let long_size = select_joist_size(long, JoistSpacing::Oc16).unwrap().size;
        prop_assert!(short_size <= long_size);
    }

    /// Same for beams: the choice is the smallest doubled size in its column.
    #[test]
    fn beam_selection_is_minimal(beam_span in 1.0..11.0f64, joist_span in 1.0..20.0f64) {
        let category = JoistSpanCategory::from_span(joist_span);
        if let Ok(selection) = select_beam_size(beam_span, joist_span) {
            prop_assert!(selection.max_span_ft >= beam_span);
            prop_assert_eq!(selection.category, category);
            for &size in LumberSize::DIMENSION_2X.iter().take_while(|&&s| s != selection.designation.size) {
                let max = beam_max_span(BeamDesignation::doubled(size), category).unwrap();
                prop_assert!(max < beam_span);
            }
        }
    }

    /// Footings are a standard size at least as large as required, unless clamped.
    #[test]
    fn footing_rounds_up(area in 1.0..300.0f64, soil in 500u32..5000) {
        let footing = size_footing(area, soil, &DesignLoads::default());
        prop_assert!(STANDARD_FOOTING_DIAMETERS_IN.contains(&footing.diameter_in));
        if footing.clamped {
            prop_assert_eq!(footing.diameter_in, 24);
            prop_assert!(footing.required_diameter_in > 24.0);
        } else {
            prop_assert!(footing.diameter_in as f64 >= footing.required_diameter_in);
        }
        // No smaller standard size would do
        for &smaller in STANDARD_FOOTING_DIAMETERS_IN.iter().filter(|&&d| d < footing.diameter_in) {
            prop_assert!((smaller as f64) < footing.required_diameter_in);
        }
    }

    /// Joists are centered on x = 0 and evenly spaced.
    #[test]
    fn joists_are_symmetric(width in 1.0..60.0f64, spacing in spacing()) {
        let xs = joist_positions(width, spacing).unwrap();
        prop_assert!(!xs.is_empty());
        for (a, b) in xs.iter().zip(xs.iter().rev()) {
            prop_assert!((a + b).abs() < 1e-9);
        }
        for pair in xs.windows(2) {
            prop_assert!((pair[1] - pair[0] - spacing.feet()).abs() < 1e-9);
        }
        prop_assert!(xs[xs.len() - 1] - xs[0] <= width + 1e-9);
    }

    /// Compliant structures have an ordered elevation stack and complete
    /// geometry; non-compliant ones have errors and no geometry.
    #[test]
    fn structure_is_consistent(site in site()) {
        let deck = generate_structure(&site);
        prop_assert_eq!(deck.compliant, deck.errors.is_empty());

        if deck.compliant {
            let framing = deck.framing.as_ref().unwrap();
            prop_assert!(framing.elevations.is_ordered());
            prop_assert_eq!(deck.footings.len(), deck.posts.len());
            prop_assert_eq!(deck.posts.len(), framing.posts_per_row * framing.beam_rows_y_ft.len());
            prop_assert_eq!(deck.ledger.is_some(), site.ledger_attachment.has_ledger());
            prop_assert_eq!(deck.rim_joists.len(), 3);
            prop_assert!(framing.beam_span_ft <= 8.0 + 1e-9);
            prop_assert!(framing.cantilever_ft >= 0.0);
            prop_assert!(framing.cantilever_ft <= 0.25 * site.depth_ft + 1e-9);
            for post in &deck.posts {
                prop_assert!(post.height_ft > 0.0);
            }
            for beam in &deck.beams {
                prop_assert!(beam.z_ft + beam.lumber.height_ft() <= deck.joists[0].z_ft + 1e-9);
            }
        } else {
            prop_assert_eq!(deck.member_count(), 0);
            prop_assert!(deck.takeoff().is_none());
        }
    }
}

/// Identical input gives an identical structure
#[test]
fn test_generation_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&site(), |site| {
            let first = generate_structure(&site);
            let second = generate_structure(&site);
            assert_eq!(first, second);
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
            Ok(())
        })
        .unwrap();
}
