// turns an InteractionResult into displayable pieces

use crate::core::{DrugRecord, InteractionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Safe,
    Caution,
}

/// The top-level banner. `message` is the service's friendly response
/// verbatim when it supplied one, otherwise locally composed text.
#[derive(Debug, Clone)]
pub struct Verdict {
    pub tone: Tone,
    pub message: String,
}

pub fn verdict(result: &InteractionResult) -> Verdict {
    let tone = if result.safe { Tone::Safe } else { Tone::Caution };

    let message = match result.friendly_response.as_deref() {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => {
            if result.safe {
                "Safe to use together".to_string()
            } else {
                "Potential interactions - Consult your doctor".to_string()
            }
        }
    };

    Verdict { tone, message }
}

/// Summary sentence chosen by drug count. Derived locally on every render,
/// never taken from the service.
pub fn summary_line(result: &InteractionResult) -> String {
    match result.drugs.len() {
        0 => "No drugs found in your query.".to_string(),
        1 => format!("Here's what I found about {}:", result.drugs[0].name),
        n => format!("I found information about {n} drugs:"),
    }
}

/// One expandable section per drug. Optional fields are carried only when
/// present and non-empty; absent means the line is not rendered at all.
#[derive(Debug, Clone)]
pub struct DrugSection {
    pub name: String,
    pub description: String,
    pub side_effects: String,
    pub warnings: String,
    /// per-drug warning callout, shown above the detail lines
    pub callout: Option<String>,
    pub precautions: Option<String>,
}

pub fn drug_sections(result: &InteractionResult) -> Vec<DrugSection> {
    result.drugs.iter().map(section).collect()
}

fn section(drug: &DrugRecord) -> DrugSection {
    DrugSection {
        name: drug.name.clone(),
        description: drug.info.clone(),
        side_effects: drug.side_effects.clone(),
        warnings: drug.warnings.clone(),
        callout: non_empty(Some(&drug.warnings)),
        precautions: non_empty(drug.precautions.as_ref()),
    }
}

// display predicate: present and non-empty after trimming
fn non_empty(field: Option<&String>) -> Option<String> {
    field
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
