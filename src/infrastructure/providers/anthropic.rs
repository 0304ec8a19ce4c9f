//! Anthropic/Claude Messages API 어댑터.

use anyhow::{Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use url::Url;

use crate::application::ports::ModelClient;
use crate::domain::error::ConfigError;
use crate::domain::score::{ModelReply, ModelRequest, TokenUsage};
use crate::infrastructure::config::{Config, ProviderConfig, resolve_provider_api_key};

use super::api_runner::{build_api_client, collect_text, send_json};

const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    client: Client,
    endpoint: Url,
    model: String,
    max_tokens: u32,
    credential: String,
}

impl AnthropicClient {
    /// 설정과 환경변수에서 클라이언트를 구성한다.
    /// 인증 키가 없으면 네트워크 작업 전에 실패한다.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let provider = &config.provider;
        let credential = resolve_provider_api_key(provider).credential.ok_or_else(|| {
            ConfigError::MissingCredential {
                env: provider.api_key_env(),
            }
        })?;
        Self::new(provider, credential)
    }

    /// 이미 해석된 자격증명으로 클라이언트를 구성한다.
    pub fn new(provider: &ProviderConfig, credential: String) -> Result<Self, ConfigError> {
        let endpoint = provider
            .api_base()?
            .join("messages")
            .map_err(|e| ConfigError::Invalid(format!("provider.api_base: {e}")))?;

        Ok(Self {
            client: build_api_client(),
            endpoint,
            model: provider.model(),
            max_tokens: provider.max_tokens(),
            credential,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

fn build_payload(model: &str, max_tokens: u32, request: &ModelRequest) -> Value {
    json!({
        "model": model,
        "max_tokens": max_tokens,
        "system": request.system,
        "messages": [
            { "role": "user", "content": request.prompt }
        ]
    })
}

/// Messages API 응답에서 본문/사용량을 꺼낸다.
/// `content` 필드 자체가 없으면 잘못된 응답으로 본다.
fn parse_reply(response: &Value) -> Result<ModelReply> {
    let Some(content) = response.get("content") else {
        bail!("Claude: response has no content field");
    };

    let text = collect_text(content);
    Ok(ModelReply {
        content: if text.trim().is_empty() {
            None
        } else {
            Some(text)
        },
        usage: TokenUsage {
            input_tokens: response
                .pointer("/usage/input_tokens")
                .and_then(Value::as_u64),
            output_tokens: response
                .pointer("/usage/output_tokens")
                .and_then(Value::as_u64),
        },
    })
}

#[async_trait]
impl ModelClient for AnthropicClient {
    fn name(&self) -> &'static str {
        "Claude"
    }

    async fn complete(&self, request: &ModelRequest) -> Result<ModelReply> {
        let payload = build_payload(&self.model, self.max_tokens, request);

        // Anthropic API key(sk-ant-...)와 OAuth/Bearer 토큰을 모두 수용한다.
        let builder = self
            .client
            .post(self.endpoint.clone())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&payload);
        let builder = if self.credential.starts_with("sk-ant-") {
            builder.header("x-api-key", &self.credential)
        } else {
            builder.bearer_auth(&self.credential)
        };

        let response = send_json(self.name(), "request Anthropic API", builder).await?;
        parse_reply(&response)
    }
}
