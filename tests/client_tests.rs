// tests for response parsing and error-body handling

use medcheck::{InteractionResult, error_message};

#[test]
fn test_error_body_detail_is_surfaced() {
    let message = error_message(r#"{"detail": "drug not recognized"}"#);
    assert_eq!(message, "drug not recognized");
}

#[test]
fn test_unparseable_error_body_falls_back_to_generic() {
    let message = error_message("<html>Internal Server Error</html>");
    assert_eq!(message, "Failed to check drug interactions");
}

#[test]
fn test_error_body_without_detail_falls_back_to_generic() {
    let message = error_message("{}");
    assert_eq!(message, "Failed to check drug interactions");
}

#[test]
fn test_full_response_deserializes() {
    let body = r#"{
        "drugs": [{
            "name": "Aspirin",
            "info": "a salicylate pain reliever",
            "side_effects": "upset stomach",
            "warnings": "may cause stomach bleeding",
            "precautions": "avoid alcohol",
            "is_safe": true
        }],
        "safe": true,
        "interaction_message": "",
        "friendly_response": "Aspirin appears to be safe to use."
    }"#;

    let result: InteractionResult = serde_json::from_str(body).unwrap();
    assert!(result.safe);
    assert_eq!(result.drugs.len(), 1);
    assert_eq!(result.drugs[0].name, "Aspirin");
    assert_eq!(result.drugs[0].precautions.as_deref(), Some("avoid alcohol"));
    assert_eq!(result.drugs[0].is_safe, Some(true));
    assert_eq!(
        result.friendly_response.as_deref(),
        Some("Aspirin appears to be safe to use.")
    );
}

#[test]
fn test_minimal_response_deserializes_without_optional_fields() {
    // the alternate response shape omits precautions/is_safe and the
    // top-level messages entirely
    let body = r#"{
        "drugs": [{
            "name": "Ibuprofen",
            "info": "an NSAID",
            "side_effects": "nausea",
            "warnings": ""
        }],
        "safe": false
    }"#;

    let result: InteractionResult = serde_json::from_str(body).unwrap();
    assert!(!result.safe);
    assert_eq!(result.drugs[0].precautions, None);
    assert_eq!(result.drugs[0].is_safe, None);
    assert_eq!(result.interaction_message, None);
    assert_eq!(result.friendly_response, None);
}

#[test]
fn test_missing_required_field_is_a_deserialization_failure() {
    // no "safe" field
    let body = r#"{"drugs": []}"#;
    assert!(serde_json::from_str::<InteractionResult>(body).is_err());
}
