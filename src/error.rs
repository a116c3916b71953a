use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response from server: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Api(String),

    #[error("Terminal error: {0}")]
    Terminal(String),
}
