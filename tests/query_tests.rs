// tests for intent tags and request shaping

use medcheck::{DrugQuery, QueryType};
use serde_json::json;

#[test]
fn test_placeholders_are_nonempty_and_intent_specific() {
    let mut seen = Vec::new();
    for query_type in QueryType::ALL {
        let placeholder = query_type.placeholder();
        assert!(!placeholder.is_empty());
        assert!(
            !seen.contains(&placeholder),
            "placeholder for {} duplicates another intent",
            query_type.tag()
        );
        seen.push(placeholder);
    }
}

#[test]
fn test_from_tag_roundtrip() {
    for query_type in QueryType::ALL {
        assert_eq!(QueryType::from_tag(query_type.tag()), query_type);
    }
}

#[test]
fn test_unrecognized_tag_defaults_to_interaction() {
    assert_eq!(QueryType::from_tag("nonsense"), QueryType::Interaction);
    assert_eq!(QueryType::from_tag(""), QueryType::Interaction);
    assert_eq!(
        QueryType::from_tag("nonsense").placeholder(),
        QueryType::Interaction.placeholder()
    );
}

#[test]
fn test_default_is_interaction() {
    assert_eq!(QueryType::default(), QueryType::Interaction);
}

#[test]
fn test_text_query_serializes_as_shape_a() {
    let query = DrugQuery::text("can I take tylenol with aspirin?", QueryType::SideEffects);
    let value = serde_json::to_value(&query).unwrap();
    assert_eq!(
        value,
        json!({
            "query": "can I take tylenol with aspirin?",
            "query_type": "side_effects",
        })
    );
}

#[test]
fn test_name_list_serializes_as_shape_b() {
    let query = DrugQuery::names(vec!["aspirin".to_string(), "ibuprofen".to_string()]);
    let value = serde_json::to_value(&query).unwrap();
    assert_eq!(value, json!({ "drugs": ["aspirin", "ibuprofen"] }));
}

#[test]
fn test_query_type_tags_match_wire_values() {
    assert_eq!(QueryType::Interaction.tag(), "interaction");
    assert_eq!(QueryType::SideEffects.tag(), "side_effects");
    assert_eq!(QueryType::Precautions.tag(), "precautions");
    assert_eq!(QueryType::Info.tag(), "info");
}
