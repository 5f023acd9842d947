//! End-to-end deck scenarios through the public API

use deck_core::calculations::size_footing;
use deck_core::loads::DesignLoads;
use deck_core::materials::{LumberSize, PlyCount};
use deck_core::structure::RimLocation;
use deck_core::{generate_structure, DeckError, LedgerAttachment, SiteInput};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// 16' x 12' deck at 3', ledger on the house
#[test]
fn test_typical_attached_deck() {
    let site = SiteInput::new(16.0, 12.0, 3.0).with_ledger(LedgerAttachment::Direct);
    let deck = generate_structure(&site);

    assert!(deck.compliant);
    assert!(deck.is_renderable());

    let framing = deck.framing.as_ref().expect("framing summary");
    assert_eq!(framing.cantilever_ft, 2.0);
    assert_eq!(framing.joist_span_ft, 10.0);
    assert_eq!(framing.posts_per_row, 3);
    assert_eq!(framing.beam_span_ft, 8.0);

    assert_eq!(deck.joist_size, Some(LumberSize::L2x8));
    assert_eq!(deck.beam_size, Some(LumberSize::L2x12));
    assert_eq!(deck.beam_ply, Some(PlyCount::Double));
    assert_eq!(deck.post_size, Some(LumberSize::L4x4));
    assert_eq!(deck.footing_diameter_in, Some(24));

    assert!(close(framing.elevations.joist_bottom_ft, 2.3125));
    assert!(close(framing.elevations.beam_bottom_ft, 1.375));

    assert_eq!(deck.footings.len(), 3);
    assert_eq!(deck.posts.len(), 3);
    assert!(deck.posts.iter().all(|p| p.y_ft == 10.0 && close(p.height_ft, 1.375)));
    assert_eq!(deck.joists.len(), 13);
    assert!(deck.joists.iter().all(|j| j.length_ft() == 12.0));

    let ledger = deck.ledger.as_ref().expect("attached deck has a ledger");
    assert_eq!(ledger.lumber.nominal, LumberSize::L2x8);
    assert_eq!(deck.rim_joists[2].location, RimLocation::Outer);

    let takeoff = deck.takeoff().expect("compliant deck has a takeoff");
    assert_eq!(takeoff.deck_area_sqft, 192.0);
    assert_eq!(takeoff.joist_count, 13);
    assert_eq!(takeoff.beam_lf, 32.0);
    assert_eq!(takeoff.ledger_lf, 16.0);
    assert_eq!(takeoff.rim_lf, 40.0);
}

/// 20' x 8' freestanding deck at 3'
#[test]
fn test_freestanding_deck() {
    let site = SiteInput::new(20.0, 8.0, 3.0).with_ledger(LedgerAttachment::Freestanding);
    let deck = generate_structure(&site);

    assert!(deck.compliant, "{:?}", deck.errors);
    let framing = deck.framing.as_ref().unwrap();
    assert_eq!(framing.cantilever_ft, 0.0);
    assert_eq!(framing.joist_span_ft, 4.0);
    assert_eq!(framing.posts_per_row, 4);
    assert!((framing.beam_span_ft - 20.0 / 3.0).abs() < 1e-9);

    assert_eq!(deck.joist_size, Some(LumberSize::L2x6));
    assert_eq!(deck.beam_designation().as_deref(), Some("2-2x8"));
    assert_eq!(deck.footing_diameter_in, Some(14));

    assert_eq!(deck.beams.len(), 2);
    assert!(close(deck.beams[0].y_ft, 8.0 / 3.0));
    assert!(close(deck.beams[1].y_ft, 16.0 / 3.0));
    assert_eq!(deck.footings.len(), 8);
    assert_eq!(deck.posts.len(), 8);
    assert!(deck.ledger.is_none());
    assert_eq!(deck.joists.len(), 16);
}

/// 16' x 30' deck: 28' of joist span is beyond every table entry
#[test]
fn test_joist_span_exceeded() {
    let deck = generate_structure(&SiteInput::new(16.0, 30.0, 3.0));

    assert!(!deck.compliant);
    assert!(!deck.is_renderable());
    assert_eq!(deck.errors.len(), 1);
    assert!(deck.errors[0].contains("28.0"));
    assert!(deck.errors[0].contains("19.5"));
    match deck.failure {
        Some(DeckError::SpanExceeded { span_ft, limit_ft, .. }) => {
            assert_eq!(span_ft, 28.0);
            assert_eq!(limit_ft, 19.5);
        }
        ref other => panic!("expected span failure, got {other:?}"),
    }

    assert_eq!(deck.member_count(), 0);
    assert!(deck.joist_size.is_none());
    assert!(deck.takeoff().is_none());
}

/// 10' x 4' deck: the cantilever is capped at a quarter of the depth
#[test]
fn test_shallow_deck() {
    let deck = generate_structure(&SiteInput::new(10.0, 4.0, 3.0));

    assert!(deck.compliant);
    let framing = deck.framing.as_ref().unwrap();
    assert_eq!(framing.cantilever_ft, 1.0);
    assert_eq!(framing.joist_span_ft, 3.0);
    assert_eq!(deck.joist_size, Some(LumberSize::L2x6));
    assert_eq!(deck.beam_designation().as_deref(), Some("2-2x6"));
    assert_eq!(deck.footing_diameter_in, Some(12));
    assert_eq!(deck.joists.len(), 8);
}

/// 8' beam span x 10' joist span on 1500 psf soil
#[test]
fn test_footing_rounds_up_to_24() {
    let footing = size_footing(80.0, 1500, &DesignLoads::default());
    assert!((footing.load_lb - 4400.0).abs() < 1e-9);
    assert!((footing.required_area_sqin - 422.4).abs() < 1e-9);
    assert!((footing.required_diameter_in - 23.19).abs() < 0.01);
    assert_eq!(footing.diameter_in, 24);
    assert!(!footing.clamped);
}

/// 16' x 14' deck: joists fit but no doubled beam reaches 8' in the 12' column
#[test]
fn test_beam_span_exceeded_after_joist_selection() {
    let deck = generate_structure(&SiteInput::new(16.0, 14.0, 4.0));

    assert!(!deck.compliant);
    assert_eq!(deck.joist_size, Some(LumberSize::L2x8));
    assert!(deck.beam_size.is_none());
    assert_eq!(
        deck.errors,
        vec!["Beam span 8.0' exceeds maximum 7.5' for joist span category 12'. Consider adding intermediate posts.".to_string()]
    );
    assert!(deck.footings.is_empty());
}

#[test]
fn test_structure_json_shape() {
    let site = SiteInput::new(16.0, 12.0, 3.0).with_ledger(LedgerAttachment::Standoff);
    let deck = generate_structure(&site);

    let json = serde_json::to_value(&deck).unwrap();
    assert_eq!(json["joist_size"], "2x8");
    assert_eq!(json["joist_spacing_in"], 16);
    assert_eq!(json["beam_ply"], "Double");
    assert_eq!(json["input"]["ledger_attachment"], "standoff");
    assert_eq!(json["ledger"]["attachment"], "standoff");
    assert_eq!(json["rim_joists"][0]["location"], "left");
    assert!(json["failure"].is_null());
}
