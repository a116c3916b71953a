// core logic - query shaping, api client, result presentation

mod client;
pub mod presenter;
mod query;

pub use client::{ApiClient, DEFAULT_API_URL, DrugRecord, InteractionResult, error_message};
pub use query::{DrugQuery, QueryType};
