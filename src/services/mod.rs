//! Service layer containing the rule engine and side-effect helpers.
//!
//! ## Service map
//! - `rules.rs` — the ordered whitespace rule catalog.
//! - `validator.rs` — applies the catalog to a file's bytes.
//! - `discovery.rs` — git-aware candidate file selection + path filtering.
//! - `output.rs` — stderr diagnostics and JSON report helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod discovery;
pub mod output;
pub mod rules;
pub mod validator;
