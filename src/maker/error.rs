use crate::domain::action::InvalidAction;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MakerError {
    #[error("request error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("request to the hub failed with status {status}")]
    Http { status: StatusCode, body: String },
    #[error("unable to parse the hub response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidResponse(String),
    #[error(transparent)]
    InvalidAction(#[from] InvalidAction),
}
