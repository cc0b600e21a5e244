//! Application shell
//!
//! Wires the production backend into the pipeline, runs one conversion, and
//! turns the outcome into a check report plus (on acceptance) a JSON file.

use anyhow::{bail, Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::infrastructure::PlainTextFileSource;
use crate::orchestrator::pipeline::{ConvertOutcome, ConvertPipeline};
use crate::services::LlmService;

/// Derive the output filename from the exam document's base name
///
/// The case-insensitive substring "test" becomes "exam", then `.json` is
/// appended, e.g. `test_aug1_v1_2024` → `exam_aug1_v1_2024.json`.
pub fn derive_output_name(base: &str) -> Result<String> {
    let re = Regex::new(r"(?i)test")?;
    Ok(format!("{}.json", re.replace_all(base, "exam")))
}

/// CLI application
pub struct App {
    config: Config,
    exam_path: PathBuf,
    answers_path: PathBuf,
}

impl App {
    pub fn new(config: Config, exam_path: impl Into<PathBuf>, answers_path: impl Into<PathBuf>) -> Self {
        Self {
            config,
            exam_path: exam_path.into(),
            answers_path: answers_path.into(),
        }
    }

    /// Run one conversion end to end
    pub async fn run(&self) -> Result<()> {
        info!("{}", "=".repeat(60));
        info!("🔄 exam → JSON conversion");
        info!("📄 exam document: {}", self.exam_path.display());
        info!("📋 answers document: {}", self.answers_path.display());
        info!("{}", "=".repeat(60));

        let exam_source = PlainTextFileSource::new(&self.exam_path);
        let answers_source = PlainTextFileSource::new(&self.answers_path);

        let backend = LlmService::new(&self.config);
        let pipeline = ConvertPipeline::new(backend, &self.config);

        let outcome = pipeline.convert(&exam_source, &answers_source).await;

        log_report(&outcome);

        if let Some(reason) = outcome.failure_reason {
            bail!("{}", reason);
        }
        let Some(record) = &outcome.record else {
            bail!("record rejected: {} validation errors", outcome.errors.len());
        };

        let output_path = self.output_path()?;
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&output_path, json)
            .with_context(|| format!("could not write {}", output_path.display()))?;

        info!("⬇️ JSON saved to {}", output_path.display());
        info!(
            "finished at: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );

        Ok(())
    }

    fn output_path(&self) -> Result<PathBuf> {
        let base = self
            .exam_path
            .file_stem()
            .and_then(|s| s.to_str())
            .context("exam document has no usable file name")?;
        let name = derive_output_name(base)?;
        Ok(Path::new(&self.config.output_dir).join(name))
    }
}

/// Log the check report the way the user reads it: errors first, then
/// warnings, then the verdict
fn log_report(outcome: &ConvertOutcome) {
    info!("{}", "─".repeat(60));
    info!("📊 check report");

    if outcome.errors.is_empty() {
        if outcome.failure_reason.is_none() {
            info!("✅ the record was checked and found valid");
        }
    } else {
        error!("found {} errors:", outcome.errors.len());
        for e in &outcome.errors {
            error!("  ❌ {}", e);
        }
    }

    if !outcome.warnings.is_empty() {
        warn!("warnings ({}):", outcome.warnings.len());
        for w in &outcome.warnings {
            warn!("  ⚠️ {}", w);
        }
    }

    info!("{}", "─".repeat(60));
}
