//! flyhelper-core: shared foundations for the FlyBase annotation helper.
//!
//! - Errors: one `thiserror` enum per subsystem, each with a stable error code
//! - Config: TOML-backed finder configuration with env overrides
//! - Tracing: `tracing` subscriber setup driven by `FLYHELPER_LOG`
//! - Constants: tag names, metric keys, and compiled defaults

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::FinderConfig;
pub use errors::{ErrorCode, PipelineError, PipelineResult};
