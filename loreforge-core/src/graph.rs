//! Relationship graph construction in Mermaid syntax.
//!
//! Derives a deduplicated undirected relationship graph from a cast of
//! characters and serializes it as a `graph TD` description for an external
//! Mermaid renderer.

use std::collections::HashSet;

use genapi::{CharacterRecord, RelationshipEdge};

use crate::sanitize::sanitize_name;

const TITLE_MARKERS: [&str; 3] = ["role", "profession", "occupation"];
const ORIGIN_MARKERS: [&str; 3] = ["created", "founded", "pioneered"];
const TRAIT_MARKERS: [&str; 3] = ["specializes", "known for", "expert in"];

/// Build the Mermaid description for a cast's relationship graph.
///
/// Emits one node per character and one arc per unordered character pair,
/// first declaration wins. Safe on an empty cast, though callers normally
/// guard on a non-empty list before invoking.
pub fn build_relationship_graph(characters: &[CharacterRecord]) -> String {
    let mut lines = vec!["graph TD".to_string()];

    for character in characters {
        let id = sanitize_name(&character.name);
        let label = node_label(character);
        lines.push(format!("    {id}[\"{label}\"]"));
    }

    for (source, edge) in deduped_edges(characters) {
        let source_id = sanitize_name(source);
        let target_id = sanitize_name(&edge.name);
        let label = edge_label(edge);
        lines.push(format!("    {source_id} -->|\"{label}\"| {target_id}"));
    }

    lines.push(String::new());
    lines.push("    classDef default fill:#1b1b2f,stroke:#4f8fba,color:#e8e8e8".to_string());
    lines.push("    linkStyle default stroke:#4f8fba,stroke-width:2px".to_string());

    lines.join("\n")
}

/// Relationship edges deduplicated by unordered endpoint pair, in
/// character-iteration order. Returns `(source name, edge)` pairs.
///
/// When two characters both declare an edge to each other, only the first
/// declaration survives; the reverse direction's text is discarded.
pub fn deduped_edges(characters: &[CharacterRecord]) -> Vec<(&str, &RelationshipEdge)> {
    let mut emitted: HashSet<(String, String)> = HashSet::new();
    let mut edges = Vec::new();

    for character in characters {
        let Some(relationships) = &character.relationships else {
            continue;
        };
        let source_id = sanitize_name(&character.name);

        for edge in relationships {
            let target_id = sanitize_name(&edge.name);
            let key = if source_id <= target_id {
                (source_id.clone(), target_id)
            } else {
                (target_id, source_id.clone())
            };
            if !emitted.insert(key) {
                continue;
            }
            edges.push((character.name.as_str(), edge));
        }
    }

    edges
}

/// HTML-flavored node label: bold name, derived title, up to two key traits.
fn node_label(character: &CharacterRecord) -> String {
    let mut parts = vec![format!("<b>{}</b>", escape(&character.name))];

    let title = derive_title(character);
    if !title.is_empty() {
        parts.push(title);
    }

    for trait_line in key_traits(character) {
        parts.push(format!("• {}", escape(&trait_line)));
    }

    parts.join("<br/>")
}

/// Derive the title line: first bio line mentioning a role marker (first
/// sentence only), falling back to the first bio line, falling back to
/// empty; an origin line from knowledge is appended when present.
fn derive_title(character: &CharacterRecord) -> String {
    let base = character
        .bio
        .iter()
        .find(|line| contains_any_marker(line, &TITLE_MARKERS))
        .or_else(|| character.bio.first())
        .map(|line| first_sentence(line))
        .unwrap_or_default();

    let origin = character
        .knowledge
        .iter()
        .find(|line| contains_any_marker(line, &ORIGIN_MARKERS))
        .map(|line| first_sentence(line));

    match (base.is_empty(), origin) {
        (false, Some(origin)) => format!("{}<br/>{}", escape(&base), escape(&origin)),
        (false, None) => escape(&base),
        (true, Some(origin)) => escape(&origin),
        (true, None) => String::new(),
    }
}

/// Up to the first two knowledge lines describing key traits.
fn key_traits(character: &CharacterRecord) -> Vec<String> {
    character
        .knowledge
        .iter()
        .filter(|line| contains_any_marker(line, &TRAIT_MARKERS))
        .take(2)
        .map(|line| line.trim().to_string())
        .collect()
}

/// Edge label: bold relationship text plus details split into bullets.
/// Blank detail segments are dropped; empty details omit the bullet block.
fn edge_label(edge: &RelationshipEdge) -> String {
    let mut label = format!("<b>{}</b>", escape(&edge.relationship));

    for segment in edge.details.split('.') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        label.push_str("<br/>• ");
        label.push_str(&escape(segment));
    }

    label
}

fn contains_any_marker(line: &str, markers: &[&str]) -> bool {
    let lower = line.to_lowercase();
    markers.iter().any(|marker| lower.contains(marker))
}

fn first_sentence(line: &str) -> String {
    line.split('.').next().unwrap_or("").trim().to_string()
}

/// Escape double quotes for Mermaid label compatibility.
fn escape(text: &str) -> String {
    text.replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(name: &str) -> CharacterRecord {
        CharacterRecord {
            name: name.to_string(),
            bio: Vec::new(),
            knowledge: Vec::new(),
            relationships: None,
        }
    }

    fn edge(name: &str, relationship: &str, details: &str) -> RelationshipEdge {
        RelationshipEdge {
            name: name.to_string(),
            relationship: relationship.to_string(),
            details: details.to_string(),
        }
    }

    #[test]
    fn test_empty_cast_does_not_panic() {
        let diagram = build_relationship_graph(&[]);
        assert!(diagram.starts_with("graph TD"));
        assert!(diagram.contains("classDef default"));
    }

    #[test]
    fn test_node_per_character_with_sanitized_id() {
        let diagram = build_relationship_graph(&[character("Lady of the Lake")]);
        assert!(diagram.contains("Lady_of_the_Lake[\"<b>Lady of the Lake</b>\"]"));
    }

    #[test]
    fn test_title_prefers_role_line_first_sentence() {
        let mut alice = character("Alice");
        alice.bio = vec![
            "Born in the glass city.".to_string(),
            "Her profession is cartography. She hates maps anyway.".to_string(),
        ];
        let diagram = build_relationship_graph(&[alice]);
        assert!(diagram.contains("<b>Alice</b><br/>Her profession is cartography"));
        assert!(!diagram.contains("She hates maps"));
    }

    #[test]
    fn test_title_falls_back_to_first_bio_line() {
        let mut bob = character("Bob");
        bob.bio = vec!["A quiet smith. Rarely speaks.".to_string()];
        let diagram = build_relationship_graph(&[bob]);
        assert!(diagram.contains("<b>Bob</b><br/>A quiet smith\"]"));
    }

    #[test]
    fn test_origin_line_appended_to_title() {
        let mut carol = character("Carol");
        carol.bio = vec!["Role of archivist.".to_string()];
        carol.knowledge = vec!["Founded the night library. It burned.".to_string()];
        let diagram = build_relationship_graph(&[carol]);
        assert!(diagram.contains("Role of archivist<br/>Founded the night library"));
    }

    #[test]
    fn test_key_traits_limited_to_two() {
        let mut dane = character("Dane");
        dane.knowledge = vec![
            "Specializes in glasswork".to_string(),
            "Known for patience".to_string(),
            "Expert in star charts".to_string(),
        ];
        let diagram = build_relationship_graph(&[dane]);
        assert!(diagram.contains("• Specializes in glasswork"));
        assert!(diagram.contains("• Known for patience"));
        assert!(!diagram.contains("Expert in star charts"));
    }

    #[test]
    fn test_reciprocal_edges_collapse_to_first_declaration() {
        let mut alice = character("Alice");
        alice.relationships = Some(vec![edge("Bob", "mentor", "Taught him the craft.")]);
        let mut bob = character("Bob");
        bob.relationships = Some(vec![edge("Alice", "student", "Resents her lessons.")]);

        let characters = [alice.clone(), bob.clone()];
        let edges = deduped_edges(&characters);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].0, "Alice");
        assert_eq!(edges[0].1.relationship, "mentor");

        let diagram = build_relationship_graph(&[alice, bob]);
        assert!(diagram.contains("Alice -->|\"<b>mentor</b><br/>• Taught him the craft\"| Bob"));
        // The reverse direction's text is discarded entirely
        assert!(!diagram.contains("student"));
        assert!(!diagram.contains("Resents"));
    }

    #[test]
    fn test_empty_details_omits_bullet_block() {
        let mut alice = character("Alice");
        alice.relationships = Some(vec![edge("Bob", "rival", "")]);
        let bob = character("Bob");

        let diagram = build_relationship_graph(&[alice, bob]);
        assert!(diagram.contains("Alice -->|\"<b>rival</b>\"| Bob"));
    }

    #[test]
    fn test_blank_detail_segments_dropped() {
        let mut alice = character("Alice");
        alice.relationships = Some(vec![edge("Bob", "ally", "Fought together.. . Saved his life.")]);
        let bob = character("Bob");

        let diagram = build_relationship_graph(&[alice, bob]);
        assert!(diagram.contains("<b>ally</b><br/>• Fought together<br/>• Saved his life"));
    }

    #[test]
    fn test_quotes_escaped_in_labels() {
        let mut alice = character(r#"Alice "Shadow" Vane"#);
        alice.relationships = Some(vec![edge("Bob", r#"the "fixer""#, "")]);
        let bob = character("Bob");

        let diagram = build_relationship_graph(&[alice, bob]);
        assert!(diagram.contains("<b>Alice &quot;Shadow&quot; Vane</b>"));
        assert!(diagram.contains("<b>the &quot;fixer&quot;</b>"));
    }

    #[test]
    fn test_self_referencing_pair_keys_stay_distinct() {
        // Three characters, edges A->B and A->C: both survive
        let mut alice = character("Alice");
        alice.relationships = Some(vec![edge("Bob", "friend", ""), edge("Carol", "foe", "")]);
        let characters = [alice, character("Bob"), character("Carol")];
        let edges = deduped_edges(&characters);
        assert_eq!(edges.len(), 2);
    }
}
