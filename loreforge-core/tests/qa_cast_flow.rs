//! End-to-end QA for the cast pipeline: validation, graph construction,
//! and renderer degradation.

use loreforge_core::testing::{assert_visible_line, MockRenderer, StatusHarness};
use loreforge_core::{
    build_relationship_graph, deduped_edges, sanitize_name, CastForm, CharacterRecord,
    DiagramRenderer, FormError, RelationshipEdge,
};

fn sample_cast() -> Vec<CharacterRecord> {
    vec![
        CharacterRecord {
            name: "Mira Vale".to_string(),
            bio: vec![
                "Raised among the salt flats.".to_string(),
                "Her occupation is glass-singing. She keeps it secret.".to_string(),
            ],
            knowledge: vec![
                "Founded the Vale workshop. Later abandoned it.".to_string(),
                "Specializes in resonance glass".to_string(),
            ],
            relationships: Some(vec![
                RelationshipEdge {
                    name: "Oren Kade".to_string(),
                    relationship: "estranged brother".to_string(),
                    details: "Shared a workshop. Quarreled over the forge.".to_string(),
                },
                RelationshipEdge {
                    name: "The Archivist".to_string(),
                    relationship: "informant".to_string(),
                    details: String::new(),
                },
            ]),
        },
        CharacterRecord {
            name: "Oren Kade".to_string(),
            bio: vec!["A brooding ferryman. Rows at night.".to_string()],
            knowledge: vec!["Known for silence".to_string()],
            relationships: Some(vec![RelationshipEdge {
                name: "Mira Vale".to_string(),
                relationship: "rival".to_string(),
                details: "Blames her for the fire.".to_string(),
            }]),
        },
        CharacterRecord {
            name: "The Archivist".to_string(),
            bio: Vec::new(),
            knowledge: Vec::new(),
            relationships: None,
        },
    ]
}

#[test]
fn qa_full_cast_produces_nodes_and_deduped_edges() {
    let cast = sample_cast();
    let diagram = build_relationship_graph(&cast);

    // One node per character, sanitized ids
    assert!(diagram.contains("Mira_Vale[\""));
    assert!(diagram.contains("Oren_Kade[\""));
    assert!(diagram.contains("The_Archivist[\"<b>The Archivist</b>\"]"));

    // Derived labels
    assert!(diagram.contains("Her occupation is glass-singing"));
    assert!(diagram.contains("Founded the Vale workshop"));
    assert!(diagram.contains("• Specializes in resonance glass"));
    assert!(diagram.contains("• Known for silence"));

    // Mira's declaration wins over Oren's reverse edge
    let edges = deduped_edges(&cast);
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0].1.relationship, "estranged brother");
    assert!(!diagram.contains("rival"));
    assert!(!diagram.contains("Blames her"));

    // Empty details edge carries only the bold label
    assert!(diagram.contains("Mira_Vale -->|\"<b>informant</b>\"| The_Archivist"));

    // Styling tail
    assert!(diagram.ends_with("linkStyle default stroke:#4f8fba,stroke-width:2px"));
}

#[test]
fn qa_validation_blocks_submission_before_any_request() {
    let form = CastForm {
        names_text: "Alice\nBob\n\n".to_string(),
        num_characters: 3,
        ..CastForm::default()
    };

    match form.to_request() {
        Err(FormError::InsufficientNames {
            available,
            requested,
        }) => {
            assert_eq!((available, requested), (2, 3));
        }
        other => panic!("expected InsufficientNames, got {other:?}"),
    }
}

#[test]
fn qa_renderer_failure_degrades_without_panicking() {
    let cast = sample_cast();
    let definition = build_relationship_graph(&cast);

    let renderer = MockRenderer::failing("malformed description");
    let result = renderer.render(&definition);

    assert!(result.is_err());
    assert_eq!(renderer.call_count(), 1);
    assert_eq!(renderer.definitions()[0], definition);
}

#[test]
fn qa_sanitized_ids_are_diagram_safe_for_whole_cast() {
    for character in sample_cast() {
        let id = sanitize_name(&character.name);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        assert!(!id.is_empty());
    }
}

#[test]
fn qa_status_scenario_matches_channel_contract() {
    let mut harness = StatusHarness::new();
    harness
        .feed_json(r#"{"type":"progress","progress":10,"step":"Reading lore"}"#)
        .feed_json(r#"{"type":"log","message":"Sending request to model"}"#)
        .feed_json(r#"{"type":"progress","progress":42,"step":"Analyzing lore"}"#)
        .feed_json(r#"{"type":"log","message":"Drafted Mira Vale"}"#);

    assert_eq!(harness.state.percent, 42.0);
    assert_eq!(harness.state.step, "Analyzing lore");

    // Internal step hidden, milestone shown
    let visible = harness.visible();
    assert!(!visible.iter().any(|line| line.contains("Sending")));
    assert_visible_line(&harness, "Drafted Mira Vale");
}
