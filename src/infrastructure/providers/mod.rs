//! 호스팅 모델 API 어댑터.
//! 요청 전송/응답 정규화 공용 로직과 Anthropic 클라이언트를 묶는다.

pub mod anthropic;
mod api_runner;

pub use anthropic::AnthropicClient;
