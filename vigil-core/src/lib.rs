//! Vigil Core
//!
//! Core types shared between the vigil poller, the mock status server and
//! the CLI.
//!
//! This crate contains:
//! - Status types: what a status endpoint reports and how it is classified
//! - `PollOutcome`: the tagged terminal result of a poll
//! - `PollRequest`: validated poll parameters plus the shared defaults

pub mod outcome;
pub mod request;
pub mod status;

// Re-export commonly used types
pub use outcome::PollOutcome;
pub use request::{DEFAULT_INTERVAL, DEFAULT_MAX_ATTEMPTS, PollRequest, ValidationError};
pub use status::{StatusKind, StatusPayload};
