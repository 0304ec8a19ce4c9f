//! 설정 값(환경변수 이름 등)을 실제 런타임 자격증명으로 해석한다.

use std::env;

use super::types::ProviderConfig;

/// Provider(API key) 해석 결과.
#[derive(Debug, Clone)]
pub struct ProviderCredentialResolution {
    pub credential: Option<String>,
    pub source: String,
}

/// `api_key_env`가 가리키는 환경변수에서 인증 키를 읽는다.
pub fn resolve_provider_api_key(cfg: &ProviderConfig) -> ProviderCredentialResolution {
    let env_name = cfg.api_key_env();
    match env::var(&env_name).ok().map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => ProviderCredentialResolution {
            credential: Some(v),
            source: format!("env:{env_name}"),
        },
        _ => ProviderCredentialResolution {
            credential: None,
            source: format!("env:{env_name} (missing)"),
        },
    }
}
