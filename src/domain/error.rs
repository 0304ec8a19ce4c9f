//! 파이프라인 오류 분류.
//! 각 오류의 `Display` 문자열이 그대로 출력 파일 내용이 된다.

use std::path::PathBuf;

/// 실행 전 설정 단계 오류. 출력 파일을 남기지 않고 종료한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{env} environment variable not set.")]
    MissingCredential { env: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// diff 입력 오류.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Error: Diff file '{}' not found.", .0.display())]
    DiffNotFound(PathBuf),

    #[error("Unexpected Error: {message}")]
    Unreadable { path: PathBuf, message: String },
}

/// 모델 서비스 호출 오류.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Analysis failed: No response from {provider} API")]
    EmptyContent { provider: &'static str },

    #[error("Analysis failed for {repo} PR {pr_id}: {message}")]
    Request {
        repo: String,
        pr_id: String,
        message: String,
    },
}

/// 모델 응답 검증 오류.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Analysis failed: Invalid JSON response - {0}")]
    InvalidJson(String),

    #[error("Analysis failed: Missing required keys - [{}]", .0.join(", "))]
    MissingKeys(Vec<&'static str>),

    #[error("Analysis failed: Invalid value for {key} - {value}")]
    InvalidScore { key: &'static str, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ScoreError {
    /// 종료 코드 1로 끝나야 하는 오류인지 판단한다.
    /// 서비스/검증 오류는 결과 파일에 기록하고 정상 종료한다.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Input(_))
    }
}
