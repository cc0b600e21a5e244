//! Orchestration layer
//!
//! ## Responsibilities
//!
//! Sequences one conversion end to end and applies the acceptance rule.
//!
//! ### `pipeline` - conversion pipeline
//! - text sources → prompt → extractor → validator
//! - fails fast on empty source text, before any backend call
//! - a record is accepted if and only if the error list is empty;
//!   warnings never block acceptance
//! - every run is independent, no state survives between runs
//!
//! ### `app` - application shell
//! - wires configuration, sources, and the production backend together
//! - logs the check report
//! - writes the accepted record as a UTF-8 JSON file
//!
//! ## Layering
//!
//! ```text
//! app (CLI lifecycle)
//!     ↓
//! pipeline::ConvertPipeline (one conversion)
//!     ↓
//! services (prompt / extractor / validator / llm)
//!     ↓
//! infrastructure (DocumentTextSource)
//! ```

pub mod app;
pub mod pipeline;

pub use app::App;
pub use pipeline::{ConvertOutcome, ConvertPipeline, FailureReason};
