pub mod extractor;
pub mod llm_service;
pub mod prompt_builder;
pub mod validator;

pub use extractor::StructuredExtractor;
pub use llm_service::{GenerativeBackend, LlmService};
pub use prompt_builder::build_extraction_prompt;
pub use validator::ExamValidator;
