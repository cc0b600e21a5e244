/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    // --- LLM settings ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// Total backend call attempts per conversion
    pub max_extraction_attempts: usize,
    /// Per-attempt timeout for the backend call, in seconds
    pub llm_timeout_secs: u64,
    // --- Validation settings ---
    /// Minimum Hebrew characters in a question text before a warning fires
    pub hebrew_warn_threshold: usize,
    // --- Output settings ---
    /// Directory the accepted JSON file is written to
    pub output_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_key: String::new(),
            llm_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai"
                .to_string(),
            llm_model_name: "gemini-2.0-flash".to_string(),
            max_extraction_attempts: 3,
            llm_timeout_secs: 120,
            hebrew_warn_threshold: 5,
            output_dir: ".".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            llm_api_key: std::env::var("LLM_API_KEY").unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            max_extraction_attempts: std::env::var("MAX_EXTRACTION_ATTEMPTS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_extraction_attempts),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.llm_timeout_secs),
            hebrew_warn_threshold: std::env::var("HEBREW_WARN_THRESHOLD").ok().and_then(|v| v.parse().ok()).unwrap_or(default.hebrew_warn_threshold),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
        }
    }
}
