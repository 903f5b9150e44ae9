//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `run.rs` — validate/fix flows and the auto-fix escalation.
//!
//! ## Principles
//! - Keep handlers thin; delegate rule evaluation and file discovery to
//!   `services/*`.
//! - Keep behavior and output schema stable.

pub mod run;

pub use run::{handle_fix, handle_validate};
