//! # exam2json
//!
//! Converts a pair of exam documents (a question booklet and an answer key)
//! into a strictly-shaped JSON record of 25 Hebrew multiple-choice questions,
//! driven by a generative-text backend.
//!
//! ## Architecture
//!
//! The system is layered, each layer only depending on the ones below it:
//!
//! ### ① Infrastructure
//! - `infrastructure/` - external resource boundaries
//! - `DocumentTextSource` - supplies plain text for one document
//!
//! ### ② Services
//! - `services/` - single capabilities, no flow knowledge
//! - `build_extraction_prompt` - deterministic prompt rendering
//! - `LlmService` - generative backend calls (OpenAI-compatible API)
//! - `StructuredExtractor` - bounded-retry JSON recovery from model output
//! - `ExamValidator` - schema and content-quality checks
//!
//! ### ③ Orchestration
//! - `orchestrator/` - sequences the pipeline and applies the acceptance
//!   rule: no record is exposed unless the validator's error list is empty
//! - `ConvertPipeline` - one stateless conversion per invocation
//! - `App` - CLI application shell (report logging, JSON output file)

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

pub use config::Config;
pub use error::{ExtractError, LlmError};
pub use infrastructure::{DocumentTextSource, PlainTextFileSource};
pub use models::{ExamRecord, Question, OPTION_LABELS, QUESTION_COUNT};
pub use orchestrator::{App, ConvertOutcome, ConvertPipeline, FailureReason};
pub use services::{
    build_extraction_prompt, ExamValidator, GenerativeBackend, LlmService, StructuredExtractor,
};
