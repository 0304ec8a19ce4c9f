//! 설정 저장소 포트 구현 어댑터.

use anyhow::Result;

use crate::application::ports::ConfigRepository;
use crate::infrastructure::config::Config;

/// 우선순위 경로의 JSON 파일을 병합해 읽는 설정 저장소.
pub struct JsonConfigRepository;

impl ConfigRepository for JsonConfigRepository {
    fn load(&self) -> Result<Config> {
        Config::load()
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        Config::inspect_pretty_json()
    }
}
