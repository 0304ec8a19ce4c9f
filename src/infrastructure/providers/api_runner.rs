//! 모델 HTTP API 호출 공용 유틸리티.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::debug;

/// 고정 요청 타임아웃. 사용자 설정으로 바꾸지 않는다.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// 오류 응답 본문은 PR 결과 텍스트에 그대로 실리므로 이 길이에서 자른다.
pub const ERROR_BODY_LIMIT: usize = 400;

/// 채점 요청용 HTTP 클라이언트. 타임아웃 외 설정은 두지 않는다.
pub fn build_api_client() -> Client {
    match Client::builder().timeout(REQUEST_TIMEOUT).build() {
        Ok(client) => client,
        Err(err) => {
            debug!(error = %err, "falling back to default HTTP client");
            Client::new()
        }
    }
}

/// 채점 요청을 보내고 응답 JSON을 돌려준다.
/// 전송 실패, 2xx 외 상태, JSON이 아닌 본문은 모두 `provider: action ...` 형식의 오류가 된다.
pub async fn send_json(
    provider_name: &str,
    action: &str,
    request: RequestBuilder,
) -> Result<Value> {
    let response = request
        .send()
        .await
        .with_context(|| format!("{provider_name}: could not {action}"))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .with_context(|| format!("{provider_name}: {action} response body was not readable"))?;
    debug!(%status, bytes = body.len(), "{provider_name} replied");

    if !status.is_success() {
        bail!(
            "{provider_name}: {action} failed ({status}): {}",
            truncate_body(body.trim())
        );
    }

    serde_json::from_str(&body).with_context(|| {
        format!(
            "{provider_name}: {action} returned a non-JSON payload: {}",
            truncate_body(body.trim())
        )
    })
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

/// 응답 content 블록에서 텍스트를 이어 붙여 추출한다.
pub fn collect_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.to_string(),
        Value::Array(items) => items
            .iter()
            .map(collect_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(""),
        Value::Object(map) => map
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    }
}
