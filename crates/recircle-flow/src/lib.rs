//! Item lifecycle orchestration.
//!
//! Ties the classifier, question bank, recommendation engine, facility
//! resolver and record store into the four-stage workflow:
//! submit image → collect answers → recommend → locate facilities.

mod error;
mod service;

pub use error::FlowError;
pub use service::{LifecycleService, SubmitOutcome, DEFAULT_RADIUS_M};
