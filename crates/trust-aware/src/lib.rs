//! Trust-aware decision layer for text classification.
//!
//! A classifier's label probabilities are combined with shallow textual cues
//! into a risk score; predictions that accumulate enough risk are deferred to
//! a human reviewer, and every decision comes with a narrative explanation.

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod error;
pub mod policy;
pub mod telemetry;
