//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; level from RUST_LOG
//! - Logs go to stderr so the operator console owns stdout

pub mod logging;
