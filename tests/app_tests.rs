// tests for the submission state machine

use medcheck::tui::{App, Phase};
use medcheck::{DrugRecord, InteractionResult, QueryType};

fn app() -> App {
    App::new(
        "http://localhost:8000".to_string(),
        QueryType::Interaction,
    )
}

fn aspirin_result() -> InteractionResult {
    InteractionResult {
        drugs: vec![DrugRecord {
            name: "Aspirin".to_string(),
            info: "a salicylate".to_string(),
            side_effects: "upset stomach".to_string(),
            warnings: "stomach bleeding risk".to_string(),
            precautions: None,
            is_safe: Some(true),
        }],
        safe: true,
        interaction_message: None,
        friendly_response: None,
    }
}

#[test]
fn test_empty_query_is_inert() {
    let mut app = app();
    assert!(app.submit().is_none());
    assert_eq!(app.phase, Phase::Idle);
}

#[test]
fn test_whitespace_query_is_inert() {
    let mut app = app();
    app.query = "   \n  ".to_string();
    assert!(app.submit().is_none());
    assert_eq!(app.phase, Phase::Idle);
}

#[test]
fn test_submit_enters_submitting() {
    let mut app = app();
    app.query = "can I take aspirin with ibuprofen?".to_string();

    let (seq, query) = app.submit().unwrap();
    assert_eq!(seq, 1);
    assert_eq!(query, "can I take aspirin with ibuprofen?");
    assert_eq!(app.phase, Phase::Submitting);
    assert!(app.query.is_empty());
    assert!(app.error.is_none());
    assert!(app.result.is_none());
}

#[test]
fn test_second_submission_rejected_while_in_flight() {
    let mut app = app();
    app.query = "first question".to_string();
    let first = app.submit();
    assert!(first.is_some());

    app.query = "second question".to_string();
    assert!(app.submit().is_none(), "no second call while one is in flight");
    assert_eq!(app.request_seq, 1);
}

#[test]
fn test_success_resolves_and_allows_resubmission() {
    let mut app = app();
    app.query = "aspirin?".to_string();
    let (seq, _) = app.submit().unwrap();

    app.set_result(seq, aspirin_result());
    assert_eq!(app.phase, Phase::Success);
    assert!(app.result.is_some());
    assert_eq!(app.expanded, vec![false]);

    app.query = "another question".to_string();
    assert!(app.submit().is_some());
}

#[test]
fn test_error_clears_previous_result() {
    let mut app = app();
    app.query = "aspirin?".to_string();
    let (seq, _) = app.submit().unwrap();
    app.set_result(seq, aspirin_result());
    assert!(app.result.is_some());

    app.query = "bad query".to_string();
    let (seq, _) = app.submit().unwrap();
    app.set_error(seq, "drug not recognized".to_string());

    assert_eq!(app.phase, Phase::Failed);
    assert!(app.result.is_none(), "error state shows no partial results");
    assert_eq!(app.error.as_deref(), Some("drug not recognized"));
    assert!(app.expanded.is_empty());

    // failed resolves to no pending call
    app.query = "retry".to_string();
    assert!(app.submit().is_some());
}

#[test]
fn test_stale_resolution_is_ignored() {
    let mut app = app();
    app.query = "first".to_string();
    let (old_seq, _) = app.submit().unwrap();
    app.set_error(old_seq, "timeout".to_string());

    app.query = "second".to_string();
    let (new_seq, _) = app.submit().unwrap();
    assert_ne!(old_seq, new_seq);

    // a late arrival from the first call must not touch current state
    app.set_result(old_seq, aspirin_result());
    assert_eq!(app.phase, Phase::Submitting);
    assert!(app.result.is_none());

    // the current call's resolution still applies
    app.set_result(new_seq, aspirin_result());
    assert_eq!(app.phase, Phase::Success);
    assert!(app.result.is_some());
}

#[test]
fn test_multibyte_query_editing() {
    let mut app = app();

    // typing past a multibyte char must not split it
    for c in "café".chars() {
        app.insert_char(c);
    }
    app.insert_char('s');
    assert_eq!(app.query, "cafés");
    assert_eq!(app.query_cursor, app.query.len());

    app.delete_char();
    app.delete_char();
    assert_eq!(app.query, "caf");

    app.move_cursor_left();
    app.insert_char('é');
    assert_eq!(app.query, "caéf");

    app.move_cursor_right();
    assert_eq!(app.query_cursor, app.query.len());

    app.move_cursor_start();
    app.delete_char_forward();
    assert_eq!(app.query, "aéf");
}

#[test]
fn test_multibyte_endpoint_editing() {
    let mut app = app();
    app.open_endpoint_popup();
    app.endpoint_clear();

    for c in "http://köln".chars() {
        app.endpoint_insert_char(c);
    }
    app.endpoint_insert_char('x');
    assert_eq!(app.endpoint_input, "http://kölnx");

    app.endpoint_delete_char();
    assert_eq!(app.endpoint_input, "http://köln");

    app.endpoint_move_left();
    app.endpoint_move_left();
    app.endpoint_delete_char_forward();
    assert_eq!(app.endpoint_input, "http://kön");
}

#[test]
fn test_expansion_toggles_per_drug() {
    let mut app = app();
    app.query = "aspirin?".to_string();
    let (seq, _) = app.submit().unwrap();
    app.set_result(seq, aspirin_result());

    assert_eq!(app.expanded, vec![false]);
    app.toggle_expanded();
    assert_eq!(app.expanded, vec![true]);
    app.toggle_expanded();
    assert_eq!(app.expanded, vec![false]);
}
