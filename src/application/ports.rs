//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::error::InputError;
use crate::domain::score::{ModelReply, ModelRequest};
use crate::infrastructure::config::Config;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// diff 입력을 읽는 포트. 앞뒤 공백은 제거해서 반환한다.
pub trait DiffSource: Send + Sync {
    fn load(&self, path: &Path) -> Result<String, InputError>;
}

/// 호스팅 모델 호출 포트.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// 사용자 표시 이름
    fn name(&self) -> &'static str;
    /// 1회 호출. 응답 본문이 비어 있으면 `content: None`을 돌려준다.
    async fn complete(&self, request: &ModelRequest) -> Result<ModelReply>;
}

/// 최종 결과/디버그 산출물 기록 포트.
pub trait ResultSink: Send + Sync {
    /// 결과 파일을 덮어쓴다. 실행당 한 번 호출된다.
    fn write_result(&self, text: &str) -> Result<()>;
    /// 모델 원본 응답 덤프(트러블슈팅용).
    fn write_raw_response(&self, text: &str) -> Result<()>;
    fn result_location(&self) -> String;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn raw(&self, line: &str);
}
