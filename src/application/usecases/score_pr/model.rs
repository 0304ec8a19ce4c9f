//! 모델 호출 및 응답 검증 단계.

use std::time::Instant;

use tracing::{debug, warn};

use crate::application::usecases::score_pr::ScorePrUseCase;
use crate::domain::error::{ServiceError, ValidationError};
use crate::domain::policy::{strip_code_fences, validate_response};
use crate::domain::score::{ModelRequest, RunOptions, ScoreReport};

/// 모델을 한 번 호출하고 원본 응답 텍스트를 돌려준다.
/// 호출 실패는 저장소/PR 정보를 담은 `ServiceError`로 변환한다.
pub(super) async fn request_scores(
    use_case: &ScorePrUseCase<'_>,
    options: &RunOptions,
    request: &ModelRequest,
) -> Result<String, ServiceError> {
    let provider = use_case.model_client.name();
    use_case.reporter.section("Model");
    use_case.reporter.status(
        provider,
        &format!("requesting scores for {} PR {}", options.repo, options.pr_number),
    );

    let started = Instant::now();
    let reply = use_case
        .model_client
        .complete(request)
        .await
        .map_err(|err| ServiceError::Request {
            repo: options.repo.clone(),
            pr_id: options.pr_number.clone(),
            message: format!("{err:#}"),
        })?;
    let elapsed = started.elapsed().as_secs_f32();

    let Some(content) = reply.content.filter(|text| !text.trim().is_empty()) else {
        use_case
            .reporter
            .status(provider, &format!("empty response ({elapsed:.1}s)"));
        return Err(ServiceError::EmptyContent { provider });
    };

    use_case
        .reporter
        .status(provider, &format!("done ({elapsed:.1}s)"));
    if let Some(total) = reply.usage.total() {
        use_case.reporter.kv("Tokens", &total.to_string());
    }

    use_case.reporter.section(&format!(
        "Raw Response from {provider} (PR {})",
        options.pr_number
    ));
    use_case.reporter.raw(&content);

    if let Err(err) = use_case.sink.write_raw_response(&content) {
        warn!(error = %format!("{err:#}"), "failed to write raw response dump");
    }

    Ok(content)
}

/// 원본 응답을 점수 리포트로 검증한다.
pub(super) fn validate_scores(
    use_case: &ScorePrUseCase<'_>,
    options: &RunOptions,
    raw: &str,
) -> Result<ScoreReport, ValidationError> {
    use_case.reporter.section("Validate");
    validate_response(raw).inspect_err(|err| {
        warn!(pr = %options.pr_number, "{err}");
        debug!(cleaned = strip_code_fences(raw), "cleaned response");
    })
}
