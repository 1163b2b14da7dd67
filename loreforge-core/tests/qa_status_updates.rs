//! QA scenarios for the status channel display pipeline.

use loreforge_core::testing::{assert_percent, assert_step, StatusHarness};

#[test]
fn qa_events_apply_in_arrival_order() {
    let mut harness = StatusHarness::new();
    harness
        .feed_json(r#"{"type":"progress","progress":80,"step":"Drafting bios"}"#)
        .feed_json(r#"{"type":"progress","progress":30,"step":"Retrying a section"}"#);

    // No reordering or smoothing: the later, lower value wins
    assert_percent(&harness, 30.0);
    assert_step(&harness, "Retrying a section");
}

#[test]
fn qa_every_payload_shape_lands_in_the_log() {
    let mut harness = StatusHarness::new();
    harness
        .feed_json(r#"{"type":"log","message":"Drafted Mira"}"#)
        .feed_json(r#""plain milestone""#)
        .feed_json(r#"{"unexpected":{"shape":1}}"#);

    let visible = harness.visible();
    assert_eq!(
        visible,
        vec![
            "Drafted Mira".to_string(),
            "plain milestone".to_string(),
            r#"{"unexpected":{"shape":1}}"#.to_string(),
        ]
    );
}

#[test]
fn qa_internal_chatter_hidden_but_retained() {
    let mut harness = StatusHarness::new();
    harness
        .feed_json(r#"{"type":"log","message":"Attempt 1 of 3"}"#)
        .feed_json(r#"{"type":"log","message":"Broadcasting update to clients"}"#)
        .feed_json(r#"{"type":"log","message":"Message sent"}"#)
        .feed_json(r#"{"type":"log","message":"Cast complete"}"#);

    assert_eq!(harness.visible(), vec!["Cast complete".to_string()]);
    assert_eq!(harness.state.log.len(), 4);
}

#[test]
fn qa_new_submission_starts_from_a_clean_slate() {
    let mut harness = StatusHarness::new();
    harness
        .feed_json(r#"{"type":"progress","progress":100,"step":"Done"}"#)
        .feed_json(r#"{"type":"log","message":"Cast complete"}"#);

    harness.state.reset();

    assert_percent(&harness, 0.0);
    assert_step(&harness, "");
    assert!(harness.visible().is_empty());
}
