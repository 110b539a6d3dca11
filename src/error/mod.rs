//! Error handling module for Screvi

use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::domain::model::Stage;

/// Main error type for a Screvi run
#[derive(Error, Debug)]
pub enum ScreviError {
    /// Input file not found or inaccessible
    #[error("Input file not found: {path}")]
    InputFileNotFound { path: String },

    /// Configuration file or environment override is invalid
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// A pipeline stage failed; `index` is absent for the probe stage
    #[error("{}", pipeline_label(.stage, .index))]
    Pipeline {
        stage: Stage,
        index: Option<usize>,
        #[source]
        source: DomainError,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

fn pipeline_label(stage: &Stage, index: &Option<usize>) -> String {
    match index {
        Some(index) => format!("Screenshot {} failed at {} stage", index, stage),
        None => format!("Run failed at {} stage", stage),
    }
}

impl ScreviError {
    /// Wrap a domain error, tagging it with the stage it belongs to
    pub fn pipeline(index: Option<usize>, source: DomainError) -> Self {
        ScreviError::Pipeline {
            stage: Stage::of(&source),
            index,
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        ScreviError::Config {
            message: message.into(),
        }
    }

    /// Stage and screenshot index of a pipeline failure
    pub fn failed_at(&self) -> Option<(Stage, Option<usize>)> {
        match self {
            ScreviError::Pipeline { stage, index, .. } => Some((*stage, *index)),
            _ => None,
        }
    }
}

/// Result type alias for Screvi operations
pub type ScreviResult<T> = std::result::Result<T, ScreviError>;
