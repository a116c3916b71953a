// medcheck library - drug interaction lookups against a remote service

pub mod cli;
mod core;
mod error;
pub mod output;
pub mod tui;

pub use core::presenter;
pub use core::{ApiClient, DrugQuery, DrugRecord, InteractionResult, QueryType, error_message};
pub use error::Error;
