//! Screvi Library
//!
//! Screenshot generation pipeline: duration probing, timestamp planning,
//! frame extraction and size-triggered re-compression, each external tool
//! reached through a port.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{
    PipelineSettings, PlanEntry, RunReport, ScreenshotOutcome, ScreenshotPlan, Stage, VideoAsset,
};
pub use domain::rules::{seconds_to_hhmmss, SizePolicy, TimestampPlanner};
pub use error::{ScreviError, ScreviResult};
