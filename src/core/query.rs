// intent tags and request shaping

use clap::ValueEnum;
use serde::Serialize;

/// What the user wants to know. The selection control keeps the value space
/// closed; anything else falls back to `Interaction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    #[default]
    Interaction,
    SideEffects,
    Precautions,
    Info,
}

impl QueryType {
    pub const ALL: [QueryType; 4] = [
        QueryType::Interaction,
        QueryType::SideEffects,
        QueryType::Precautions,
        QueryType::Info,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QueryType::Interaction => "Drug Interactions",
            QueryType::SideEffects => "Side Effects",
            QueryType::Precautions => "Precautions",
            QueryType::Info => "General Information",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            QueryType::Interaction => "interaction",
            QueryType::SideEffects => "side_effects",
            QueryType::Precautions => "precautions",
            QueryType::Info => "info",
        }
    }

    /// Inverse of `tag`. Unrecognized tags get interaction wording rather
    /// than failing.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "side_effects" => QueryType::SideEffects,
            "precautions" => QueryType::Precautions,
            "info" => QueryType::Info,
            _ => QueryType::Interaction,
        }
    }

    /// Example copy guiding the user's phrasing for this intent.
    pub fn placeholder(&self) -> &'static str {
        match self {
            QueryType::SideEffects => "Example: What are the side effects of ibuprofen?",
            QueryType::Precautions => "Example: What precautions should I take with amoxicillin?",
            QueryType::Info => "Example: Tell me about metformin",
            QueryType::Interaction => {
                "Example: I have a headache but took aspirin this morning - can I take Tylenol?"
            }
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

/// One outgoing request. The service accepts two body shapes; exactly one is
/// sent per call, so they live in a single untagged enum.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum DrugQuery {
    /// shape A: free text plus an intent tag
    Text {
        query: String,
        query_type: QueryType,
    },
    /// shape B: a bare list of drug names
    Names { drugs: Vec<String> },
}

impl DrugQuery {
    pub fn text(query: impl Into<String>, query_type: QueryType) -> Self {
        DrugQuery::Text {
            query: query.into(),
            query_type,
        }
    }

    pub fn names(drugs: Vec<String>) -> Self {
        DrugQuery::Names { drugs }
    }

    /// Short description for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            DrugQuery::Text { query_type, .. } => format!("free text ({})", query_type.tag()),
            DrugQuery::Names { drugs } => format!("{} drug name(s)", drugs.len()),
        }
    }
}
