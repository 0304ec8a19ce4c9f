//! diff 입력 로딩 단계.

use tracing::debug;

use crate::application::usecases::score_pr::ScorePrUseCase;
use crate::domain::error::InputError;
use crate::domain::score::RunOptions;

/// diff 파일을 읽는다. 공백만 있는 파일은 빈 문자열로 돌려준다.
pub(super) fn load_diff(
    use_case: &ScorePrUseCase<'_>,
    options: &RunOptions,
) -> Result<String, InputError> {
    use_case.reporter.section("Input");
    use_case.reporter.status("Input", "reading diff file");

    let diff = use_case.diff_source.load(&options.diff_path)?;
    debug!(path = %options.diff_path.display(), bytes = diff.len(), "diff loaded");
    use_case.reporter.kv("Diff Bytes", &diff.len().to_string());
    Ok(diff)
}
