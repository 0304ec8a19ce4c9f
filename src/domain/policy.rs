//! 도메인 정책(프롬프트 구성, 응답 정리/검증 규칙).

use serde_json::{Map, Value};

use crate::domain::error::ValidationError;
use crate::domain::rubric::{OUTPUT_KEY, REQUIRED_KEYS, ScoreField};
use crate::domain::score::{ModelRequest, Score, ScoreReport};

pub const SYSTEM_INSTRUCTION: &str = "You must respond with a single JSON object containing exactly these keys: readability_score, robustness_score, vulnerability_score, efficiency_score, output. The output field should contain a comprehensive explanation covering all four scores.";

const FENCE: &str = "```";

/// 4개 루브릭 섹션과 PR 번호/diff를 이어 붙여 채점 프롬프트를 만든다.
/// 빈 diff 여부는 호출 측에서 먼저 확인한다.
pub fn build_scoring_prompt(diff: &str, pr_id: &str) -> String {
    let mut out = String::new();
    out.push_str("Using the given code changes,\n\n");

    for (idx, field) in ScoreField::ALL.iter().enumerate() {
        out.push_str(&field.rubric().render(idx + 1));
        out.push('\n');
    }

    out.push_str(&format!(
        "Code changes for the Pull Request ID {}:\n### Code Changes (Diff):\n{}",
        pr_id, diff
    ));
    out
}

pub fn build_scoring_request(diff: &str, pr_id: &str) -> ModelRequest {
    ModelRequest {
        system: SYSTEM_INSTRUCTION.to_string(),
        prompt: build_scoring_prompt(diff, pr_id),
    }
}

/// 응답 앞뒤의 markdown 코드 펜스만 제거한다.
/// 본문 중간에 있는 ``` 는 설명 텍스트의 일부로 보고 건드리지 않는다.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        // 언어 태그(json 등)
        let tag_len = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        text = rest[tag_len..].trim_start();
    }

    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest;
    }

    text.trim()
}

/// 모델 원본 응답을 정리/파싱하고 필수 키와 점수 범위를 검증한다.
pub fn validate_response(raw: &str) -> Result<ScoreReport, ValidationError> {
    let cleaned = strip_code_fences(raw);
    let value: Value =
        serde_json::from_str(cleaned).map_err(|e| ValidationError::InvalidJson(e.to_string()))?;

    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(ValidationError::InvalidJson(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            )));
        }
    };

    let missing: Vec<&'static str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| !map.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingKeys(missing));
    }

    Ok(ScoreReport {
        readability: field_score(&map, ScoreField::Readability)?,
        robustness: field_score(&map, ScoreField::Robustness)?,
        vulnerability: field_score(&map, ScoreField::Vulnerability)?,
        efficiency: field_score(&map, ScoreField::Efficiency)?,
        explanation: explanation_text(&map[OUTPUT_KEY]),
    })
}

fn field_score(map: &Map<String, Value>, field: ScoreField) -> Result<Score, ValidationError> {
    let key = field.key();
    let value = &map[key];
    parse_score_value(value)
        .and_then(Score::from_value)
        .ok_or_else(|| ValidationError::InvalidScore {
            key,
            value: value.to_string(),
        })
}

/// 점수는 정수 또는 정수를 담은 문자열("1", "-1")을 허용한다.
fn parse_score_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s
            .split_whitespace()
            .collect::<String>()
            .parse::<i64>()
            .ok(),
        _ => None,
    }
}

fn explanation_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "readability_score": 1,
        "robustness_score": 0,
        "vulnerability_score": -1,
        "efficiency_score": 0,
        "output": "Readable, but the new handler leaks a token."
    }"#;

    #[test]
    fn prompt_contains_fields_diff_and_pr() {
        let diff = "--- a/lib.rs\n+++ b/lib.rs\n@@ -1 +1 @@\n-old\n+new";
        let prompt = build_scoring_prompt(diff, "1234");
        for field in ScoreField::ALL {
            assert!(prompt.contains(field.key()), "missing {}", field.key());
        }
        assert!(prompt.contains(diff));
        assert!(prompt.contains("1234"));
        assert!(prompt.contains("4. Analyze"));
    }

    #[test]
    fn request_carries_system_instruction() {
        let request = build_scoring_request("+x", "7");
        for key in REQUIRED_KEYS {
            assert!(request.system.contains(key));
        }
        assert!(request.prompt.ends_with("+x"));
    }

    #[test]
    fn strips_json_fence() {
        let raw = format!("```json\n{VALID}\n```");
        assert_eq!(strip_code_fences(&raw), VALID.trim());
    }

    #[test]
    fn strips_bare_fence_and_single_line_fence() {
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```json {\"a\":1}```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn keeps_fences_inside_explanation() {
        let raw = "{\"output\": \"use\\n```rust\\nfoo()\\n```\\ninstead\"}";
        assert_eq!(strip_code_fences(raw), raw);
    }

    #[test]
    fn validates_unwrapped_and_fenced_responses() {
        let plain = validate_response(VALID).unwrap();
        let fenced = validate_response(&format!("```json\n{VALID}\n```")).unwrap();
        assert_eq!(plain, fenced);
        assert_eq!(plain.readability, Score::Excellent);
        assert_eq!(plain.vulnerability, Score::Poor);

        let text = plain.render();
        assert_eq!(text.lines().take(4).count(), 4);
        assert!(text.contains("Readability Score: 1"));
        assert!(text.contains("Robustness Score: 0"));
        assert!(text.contains("Vulnerability Score: -1"));
        assert!(text.contains("Efficiency Score: 0"));
    }

    #[test]
    fn accepts_quoted_scores() {
        let raw = r#"{"readability_score": "1", "robustness_score": "-1",
            "vulnerability_score": "0", "efficiency_score": 1, "output": "ok"}"#;
        let report = validate_response(raw).unwrap();
        assert_eq!(report.robustness, Score::Poor);
        assert_eq!(report.explanation, "ok");
    }

    #[test]
    fn reports_each_missing_key_by_name() {
        for missing in REQUIRED_KEYS {
            let mut value: Value = serde_json::from_str(VALID).unwrap();
            value.as_object_mut().unwrap().remove(missing);
            let err = validate_response(&value.to_string()).unwrap_err();
            assert!(matches!(err, ValidationError::MissingKeys(ref keys) if keys == &vec![missing]));
            assert!(err.to_string().contains(missing));
        }
    }

    #[test]
    fn non_json_is_a_parse_failure() {
        let err = validate_response("I think this PR is great!").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Analysis failed: Invalid JSON response - "));
        assert!(!err.to_string().contains("Missing required keys"));
    }

    #[test]
    fn non_object_json_is_a_parse_failure() {
        let err = validate_response("[1, 0, -1]").unwrap_err();
        assert!(err.to_string().contains("expected a JSON object, found an array"));
    }

    #[test]
    fn out_of_scale_score_is_rejected() {
        let raw = VALID.replace("\"efficiency_score\": 0", "\"efficiency_score\": 5");
        let err = validate_response(&raw).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Analysis failed: Invalid value for efficiency_score - 5"
        );
    }
}
