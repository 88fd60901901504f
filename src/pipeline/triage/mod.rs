pub mod types;
pub mod keywords;
pub mod matcher;
pub mod questions;
pub mod evaluate;
pub mod precheck;
pub mod session;

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Unknown symptom category: {0}")]
    UnknownCategory(String),

    #[error("Triage session already finished: {0}")]
    SessionFinished(Uuid),

    #[error("Answer for question {got}, but the session is waiting on {expected}")]
    UnexpectedQuestion { expected: String, got: String },
}
