// Domain errors - Error types for the screenshot pipeline

use std::fmt;

/// Domain-specific error types, one per pipeline stage
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Duration unavailable or unparseable
    Probe(String),
    /// Frame-grab process failed or produced no readable file
    Extraction(String),
    /// File size introspection failed
    Io(String),
    /// Re-encode or file replacement failed
    Compression(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Probe(msg) => write!(f, "Probe failed: {}", msg),
            DomainError::Extraction(msg) => write!(f, "Frame extraction failed: {}", msg),
            DomainError::Io(msg) => write!(f, "I/O error: {}", msg),
            DomainError::Compression(msg) => write!(f, "Compression failed: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
