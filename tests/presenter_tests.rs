// tests for verdict derivation and per-drug sections

use medcheck::presenter::{self, Tone};
use medcheck::{DrugRecord, InteractionResult};

fn record(name: &str) -> DrugRecord {
    DrugRecord {
        name: name.to_string(),
        info: format!("{name} description"),
        side_effects: "nausea".to_string(),
        warnings: "may cause drowsiness".to_string(),
        precautions: None,
        is_safe: None,
    }
}

fn result(drugs: Vec<DrugRecord>, safe: bool) -> InteractionResult {
    InteractionResult {
        drugs,
        safe,
        interaction_message: None,
        friendly_response: None,
    }
}

#[test]
fn test_safe_verdict() {
    let verdict = presenter::verdict(&result(vec![record("Aspirin")], true));
    assert_eq!(verdict.tone, Tone::Safe);
    assert_eq!(verdict.message, "Safe to use together");
}

#[test]
fn test_unsafe_verdict_says_consult_doctor() {
    let verdict = presenter::verdict(&result(vec![record("Aspirin")], false));
    assert_eq!(verdict.tone, Tone::Caution);
    assert_eq!(verdict.message, "Potential interactions - Consult your doctor");
}

#[test]
fn test_friendly_response_is_shown_verbatim() {
    let mut r = result(vec![record("Aspirin")], true);
    r.friendly_response = Some("Good news! These are fine together.".to_string());
    let verdict = presenter::verdict(&r);
    assert_eq!(verdict.message, "Good news! These are fine together.");
}

#[test]
fn test_blank_friendly_response_falls_back_to_local_text() {
    let mut r = result(vec![record("Aspirin")], true);
    r.friendly_response = Some("   ".to_string());
    assert_eq!(presenter::verdict(&r).message, "Safe to use together");
}

#[test]
fn test_top_level_safe_flag_overrides_per_drug_flags() {
    // the service's verdict is trusted as-is, even when every drug entry
    // claims to be safe on its own
    let mut drug = record("Aspirin");
    drug.is_safe = Some(true);
    let mut other = record("Warfarin");
    other.is_safe = Some(true);

    let verdict = presenter::verdict(&result(vec![drug, other], false));
    assert_eq!(verdict.tone, Tone::Caution);
}

#[test]
fn test_summary_with_no_drugs() {
    let r = result(vec![], true);
    assert_eq!(presenter::summary_line(&r), "No drugs found in your query.");
    assert!(presenter::drug_sections(&r).is_empty());
}

#[test]
fn test_summary_with_one_drug_names_it() {
    let r = result(vec![record("Aspirin")], true);
    assert_eq!(
        presenter::summary_line(&r),
        "Here's what I found about Aspirin:"
    );
}

#[test]
fn test_summary_with_several_drugs_states_the_count() {
    let r = result(
        vec![record("Aspirin"), record("Ibuprofen"), record("Metformin")],
        true,
    );
    assert_eq!(
        presenter::summary_line(&r),
        "I found information about 3 drugs:"
    );
}

#[test]
fn test_empty_precautions_are_not_rendered() {
    let mut drug = record("Aspirin");
    drug.precautions = Some(String::new());
    let sections = presenter::drug_sections(&result(vec![drug], true));
    assert_eq!(sections[0].precautions, None);
}

#[test]
fn test_nonempty_precautions_are_rendered() {
    let mut drug = record("Aspirin");
    drug.precautions = Some("avoid alcohol".to_string());
    let sections = presenter::drug_sections(&result(vec![drug], true));
    assert_eq!(sections[0].precautions.as_deref(), Some("avoid alcohol"));
}

#[test]
fn test_warning_callout_only_for_nonempty_warnings() {
    let mut quiet = record("Melatonin");
    quiet.warnings = String::new();
    let loud = record("Ibuprofen");

    let sections = presenter::drug_sections(&result(vec![quiet, loud], true));
    assert_eq!(sections[0].callout, None);
    assert_eq!(sections[1].callout.as_deref(), Some("may cause drowsiness"));
}

#[test]
fn test_sections_keep_service_order() {
    let r = result(vec![record("Aspirin"), record("Warfarin")], false);
    let sections = presenter::drug_sections(&r);
    assert_eq!(sections[0].name, "Aspirin");
    assert_eq!(sections[1].name, "Warfarin");
}
