//! 결과 파일/원본 응답 덤프 기록 어댑터.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::ResultSink;
use crate::infrastructure::config::Config;

/// 고정 경로 파일에 결과를 덮어쓰는 어댑터.
pub struct FileResultSink {
    output_path: PathBuf,
    raw_response_path: PathBuf,
}

impl FileResultSink {
    pub fn new(output_path: impl Into<PathBuf>, raw_response_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            raw_response_path: raw_response_path.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.output_path(), config.raw_response_path())
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl ResultSink for FileResultSink {
    fn write_result(&self, text: &str) -> Result<()> {
        fs::write(&self.output_path, text)
            .with_context(|| format!("failed to write {}", self.output_path.display()))?;
        debug!(path = %self.output_path.display(), bytes = text.len(), "result written");
        Ok(())
    }

    fn write_raw_response(&self, text: &str) -> Result<()> {
        fs::write(&self.raw_response_path, text)
            .with_context(|| format!("failed to write {}", self.raw_response_path.display()))
    }

    fn result_location(&self) -> String {
        self.output_path.display().to_string()
    }
}
