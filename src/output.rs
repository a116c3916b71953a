// output formatting - readable report or raw json

use crate::core::InteractionResult;
use crate::core::presenter::{self, Tone};

pub struct Output;

impl Output {
    // readable report for humans
    pub fn pretty(result: &InteractionResult) {
        print!("{}", render_report(result));
    }

    // raw json for scripts
    pub fn raw(result: &InteractionResult) {
        println!("{}", serde_json::to_string(result).unwrap_or_default());
    }
}

/// Plain-text rendering of a result, shared by the one-shot CLI output and
/// the TUI export.
pub fn render_report(result: &InteractionResult) -> String {
    let mut out = String::new();

    out.push_str(&presenter::summary_line(result));
    out.push('\n');

    let verdict = presenter::verdict(result);
    let marker = match verdict.tone {
        Tone::Safe => "[SAFE]",
        Tone::Caution => "[CAUTION]",
    };
    out.push_str(&format!("{} {}\n", marker, verdict.message));

    for section in presenter::drug_sections(result) {
        out.push('\n');
        out.push_str(&format!("## {}\n", section.name));
        if let Some(callout) = &section.callout {
            out.push_str(&format!("!! {}\n", callout));
        }
        out.push_str(&format!("Description: {}\n", section.description));
        out.push_str(&format!("Side Effects: {}\n", section.side_effects));
        out.push_str(&format!("Warnings: {}\n", section.warnings));
        if let Some(precautions) = &section.precautions {
            out.push_str(&format!("Precautions: {}\n", precautions));
        }
    }

    out
}
