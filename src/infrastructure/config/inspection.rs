//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::resolve::resolve_provider_api_key;
use super::types::{DefaultsConfig, ProviderConfig};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub defaults: DefaultsConfig,
    pub effective_defaults: EffectiveDefaults,
    pub provider: ProviderInspection,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveDefaults {
    pub output_path: String,
    pub raw_response_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProviderInspection {
    pub model: String,
    pub api_base: Option<String>,
    pub api_base_error: Option<String>,
    pub max_tokens: u32,
    pub api_key_source: String,
    pub api_key_resolved: bool,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            defaults: loaded.config.defaults.clone(),
            effective_defaults: EffectiveDefaults {
                output_path: loaded.config.output_path(),
                raw_response_path: loaded.config.raw_response_path(),
            },
            provider: ProviderInspection::from_config(&loaded.config.provider),
        }
    }
}

impl ProviderInspection {
    fn from_config(cfg: &ProviderConfig) -> Self {
        // 키 값은 노출하지 않고 출처 라벨만 남긴다.
        let credential = resolve_provider_api_key(cfg);
        let (api_base, api_base_error) = match cfg.api_base() {
            Ok(url) => (Some(url.to_string()), None),
            Err(err) => (None, Some(err.to_string())),
        };

        Self {
            model: cfg.model(),
            api_base,
            api_base_error,
            max_tokens: cfg.max_tokens(),
            api_key_source: credential.source,
            api_key_resolved: credential.credential.is_some(),
        }
    }
}
