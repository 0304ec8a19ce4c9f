//! PR diff 채점 실행의 전체 오케스트레이션 유스케이스.

mod input;
mod model;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::application::ports::{DiffSource, ModelClient, Reporter, ResultSink};
use crate::domain::policy::build_scoring_request;
use crate::domain::score::{Analysis, Outcome, RunOptions, exit_code, render_outcome};

use input::load_diff;
use model::{request_scores, validate_scores};

/// 실행 결과 요약. `text`는 결과 파일에 기록된 내용 그대로다.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub text: String,
    pub exit_code: i32,
}

/// diff 로딩부터 모델 호출, 응답 검증, 결과 기록까지 전체 흐름을 조율한다.
pub struct ScorePrUseCase<'a> {
    pub diff_source: &'a dyn DiffSource,
    pub model_client: &'a dyn ModelClient,
    pub sink: &'a dyn ResultSink,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ScorePrUseCase<'a> {
    /// 채점 본 실행 진입점.
    /// 단계별 결과를 `Outcome`으로 모은 뒤 결과 파일에 한 번만 기록한다.
    /// 결과 파일 기록 자체가 실패한 경우에만 `Err`를 반환한다.
    pub async fn execute(&self, options: &RunOptions) -> Result<RunReport> {
        self.reporter.section("Session");
        self.reporter.kv("Diff", &options.diff_path.display().to_string());
        self.reporter.kv("PR", &options.pr_number);
        self.reporter.kv("Repository", &options.repo);

        let outcome = self.analyze(options).await;
        let text = render_outcome(&outcome);

        self.reporter.section("Result");
        match &outcome {
            Ok(Analysis::Scored(_)) => {
                info!(pr = %options.pr_number, "analysis completed");
                self.reporter.status("Result", "analysis completed");
            }
            Ok(Analysis::NoChanges) => {
                self.reporter.status("Result", "no changes detected");
            }
            Err(err) => {
                warn!(pr = %options.pr_number, error = %err, "analysis failed");
                self.reporter.status("Result", "analysis failed");
            }
        }

        let location = self.sink.result_location();
        self.sink
            .write_result(&text)
            .with_context(|| format!("failed to write result to {location}"))?;
        self.reporter.kv("Output", &location);
        self.reporter.kv("Bytes", &text.len().to_string());

        Ok(RunReport {
            text,
            exit_code: exit_code(&outcome),
        })
    }

    /// 부수효과(결과 파일 기록) 없이 파이프라인만 실행한다.
    pub async fn analyze(&self, options: &RunOptions) -> Outcome {
        let diff = load_diff(self, options)?;
        if diff.is_empty() {
            self.reporter
                .status("Input", "diff file is empty; nothing to score");
            return Ok(Analysis::NoChanges);
        }

        self.reporter.status("Prompt", "building scoring prompt");
        let request = build_scoring_request(&diff, &options.pr_number);
        self.reporter
            .kv("Prompt Bytes", &request.prompt.len().to_string());

        let raw = request_scores(self, options, &request).await?;
        let report = validate_scores(self, options, &raw)?;
        Ok(Analysis::Scored(report))
    }
}
