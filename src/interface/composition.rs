//! 애플리케이션 조립(composition root) 모듈.

use crate::application::ports::ConfigRepository;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::score_pr::ScorePrUseCase;
use crate::domain::error::ConfigError;
use crate::infrastructure::adapters::{
    ConsoleReporter, FileDiffSource, FileResultSink, JsonConfigRepository,
};
use crate::infrastructure::providers::AnthropicClient;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    diff_source: FileDiffSource,
    reporter: ConsoleReporter,
}

/// 설정/자격증명이 필요한 채점 전용 어댑터 묶음.
pub struct ScoringAdapters {
    model_client: AnthropicClient,
    sink: FileResultSink,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: JsonConfigRepository,
            diff_source: FileDiffSource,
            reporter: ConsoleReporter::new(),
        }
    }
}

impl AppComposition {
    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 설정을 읽고 모델 클라이언트/결과 기록기를 준비한다.
    /// 설정 오류나 자격증명 누락은 diff를 읽기 전에 여기서 드러난다.
    pub fn prepare_scoring(&self) -> Result<ScoringAdapters, ConfigError> {
        let config = self
            .config_repo
            .load()
            .map_err(|err| ConfigError::Invalid(format!("{err:#}")))?;
        let model_client = AnthropicClient::from_config(&config)?;
        tracing::debug!(
            model = model_client.model(),
            endpoint = %model_client.endpoint(),
            "model client ready"
        );

        Ok(ScoringAdapters {
            model_client,
            sink: FileResultSink::from_config(&config),
        })
    }

    /// 채점 실행 유스케이스를 생성한다.
    pub fn score_usecase<'a>(&'a self, adapters: &'a ScoringAdapters) -> ScorePrUseCase<'a> {
        ScorePrUseCase {
            diff_source: &self.diff_source,
            model_client: &adapters.model_client,
            sink: &adapters.sink,
            reporter: &self.reporter,
        }
    }
}
