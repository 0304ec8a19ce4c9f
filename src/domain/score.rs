//! 채점 결과 엔티티/값 객체.

use std::fmt;
use std::path::PathBuf;

use crate::domain::error::ScoreError;
use crate::domain::rubric::ScoreField;

/// diff가 비어 있을 때 기록하는 고정 문구.
pub const NO_CHANGES_MESSAGE: &str = "No changes detected in this PR.";

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub diff_path: PathBuf,
    pub pr_number: String,
    pub repo: String,
}

/// 3단계 점수(-1, 0, 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Poor,
    Moderate,
    Excellent,
}

impl Score {
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            -1 => Some(Self::Poor),
            0 => Some(Self::Moderate),
            1 => Some(Self::Excellent),
            _ => None,
        }
    }

    pub fn value(self) -> i8 {
        match self {
            Self::Poor => -1,
            Self::Moderate => 0,
            Self::Excellent => 1,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// 검증을 통과한 모델 응답.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub readability: Score,
    pub robustness: Score,
    pub vulnerability: Score,
    pub efficiency: Score,
    pub explanation: String,
}

impl ScoreReport {
    pub fn score(&self, field: ScoreField) -> Score {
        match field {
            ScoreField::Readability => self.readability,
            ScoreField::Robustness => self.robustness,
            ScoreField::Vulnerability => self.vulnerability,
            ScoreField::Efficiency => self.efficiency,
        }
    }

    /// 점수 4줄 + 빈 줄 + 설명 블록으로 렌더링한다.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for field in ScoreField::ALL {
            out.push_str(&format!("{}: {}\n", field.label(), self.score(field)));
        }
        out.push_str("\nExplanation:\n");
        out.push_str(&self.explanation);
        out
    }
}

#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
}

impl TokenUsage {
    pub fn total(&self) -> Option<u64> {
        match (self.input_tokens, self.output_tokens) {
            (Some(input), Some(output)) => Some(input + output),
            (Some(input), None) => Some(input),
            (None, Some(output)) => Some(output),
            (None, None) => None,
        }
    }
}

/// 모델 호출 요청.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub system: String,
    pub prompt: String,
}

/// 모델 호출 원본 응답. 본문이 없으면 `content`는 `None`이다.
#[derive(Debug, Clone, Default)]
pub struct ModelReply {
    pub content: Option<String>,
    pub usage: TokenUsage,
}

/// 정상 종료 시 파이프라인이 만들어내는 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    NoChanges,
    Scored(ScoreReport),
}

/// 파이프라인 전체 결과. 어떤 경우든 출력 파일에 기록할 텍스트를 가진다.
pub type Outcome = Result<Analysis, ScoreError>;

/// 최종 출력 파일 내용을 만든다.
pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Ok(Analysis::NoChanges) => NO_CHANGES_MESSAGE.to_string(),
        Ok(Analysis::Scored(report)) => report.render(),
        Err(err) => err.to_string(),
    }
}

/// 프로세스 종료 코드. 분석 실패는 파일에 기록되므로 0으로 끝난다.
pub fn exit_code(outcome: &Outcome) -> i32 {
    match outcome {
        Ok(_) => 0,
        Err(err) if err.is_fatal() => 1,
        Err(_) => 0,
    }
}
