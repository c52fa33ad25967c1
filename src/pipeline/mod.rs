pub mod document;
pub mod chunker;
pub mod parser;
pub mod client;
pub mod prompt;
pub mod validate;
pub mod recurrence;
pub mod orchestrator;
pub mod study;

pub use document::*;
pub use chunker::*;
pub use parser::*;
pub use client::*;
pub use prompt::*;
pub use validate::*;
pub use recurrence::*;
pub use orchestrator::*;
pub use study::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("document text too short to process ({0} characters after trimming)")]
    InsufficientText(usize),

    #[error("extraction service unavailable: {0}")]
    ServiceUnavailable(#[from] client::ServiceError),

    #[error("malformed service response: {0}")]
    MalformedResponse(String),

    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),
}
