//! 설정 스키마와 병합/해석 규칙.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::error::ConfigError;

pub const DEFAULT_OUTPUT_PATH: &str = "pr_description.txt";
pub const DEFAULT_RAW_RESPONSE_PATH: &str = "claude_raw_response.json";
pub const DEFAULT_MODEL: &str = "claude-3-7-sonnet-20250219";
pub const DEFAULT_API_BASE: &str = "https://api.anthropic.com/v1";
pub const DEFAULT_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 출력 경로 등 전역 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// 모델 API 설정
    #[serde(default)]
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// 결과 파일 경로
    pub output_path: Option<String>,
    /// 모델 원본 응답 덤프 경로
    pub raw_response_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ProviderConfig {
    /// 모델 식별자
    pub model: Option<String>,
    /// API 베이스 URL
    pub api_base: Option<String>,
    /// 인증 키를 읽을 환경변수 이름
    pub api_key_env: Option<String>,
    /// 응답 토큰 상한
    pub max_tokens: Option<u32>,
}

impl Config {
    pub fn output_path(&self) -> String {
        self.defaults
            .output_path
            .clone()
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string())
    }

    pub fn raw_response_path(&self) -> String {
        self.defaults
            .raw_response_path
            .clone()
            .unwrap_or_else(|| DEFAULT_RAW_RESPONSE_PATH.to_string())
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub(crate) fn merge_from(&mut self, other: Config) {
        self.defaults.merge_from(other.defaults);
        self.provider.merge_from(other.provider);
    }
}

impl DefaultsConfig {
    pub(crate) fn merge_from(&mut self, other: DefaultsConfig) {
        if other.output_path.is_some() {
            self.output_path = other.output_path;
        }
        if other.raw_response_path.is_some() {
            self.raw_response_path = other.raw_response_path;
        }
    }
}

impl ProviderConfig {
    pub fn model(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn api_key_env(&self) -> String {
        self.api_key_env
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_KEY_ENV)
            .to_string()
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }

    /// 베이스 URL을 검증한다. 이후 `join`이 마지막 경로를 유지하도록 `/`로 끝나게 맞춘다.
    pub fn api_base(&self) -> Result<Url, ConfigError> {
        let raw = self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE);
        let normalized = format!("{}/", raw.trim().trim_end_matches('/'));
        Url::parse(&normalized)
            .map_err(|e| ConfigError::Invalid(format!("provider.api_base '{raw}': {e}")))
    }

    pub(crate) fn merge_from(&mut self, other: ProviderConfig) {
        if other.model.is_some() {
            self.model = other.model;
        }
        if other.api_base.is_some() {
            self.api_base = other.api_base;
        }
        if other.api_key_env.is_some() {
            self.api_key_env = other.api_key_env;
        }
        if other.max_tokens.is_some() {
            self.max_tokens = other.max_tokens;
        }
    }
}
