//! 병합된 설정과 자격증명 준비 상태를 확인하는 유스케이스.

use anyhow::{Context, Result};

use crate::application::ports::ConfigRepository;

/// `prscore --print-config` 실행 시 사용한다. 자격증명 값 자체는 출력하지 않는다.
pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> InspectConfigUseCase<'a> {
    pub fn execute(&self) -> Result<String> {
        self.config_repo
            .inspect_pretty_json()
            .context("failed to inspect prscore config")
    }
}
