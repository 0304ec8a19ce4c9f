use std::fs;
use std::path::PathBuf;

use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use tokio::net::TcpListener;

use prscore::application::ports::Reporter;
use prscore::application::usecases::score_pr::{RunReport, ScorePrUseCase};
use prscore::domain::score::RunOptions;
use prscore::infrastructure::adapters::{FileDiffSource, FileResultSink};
use prscore::infrastructure::config::ProviderConfig;
use prscore::infrastructure::providers::AnthropicClient;

struct QuietReporter;

impl Reporter for QuietReporter {
    fn section(&self, _name: &str) {}
    fn kv(&self, _key: &str, _value: &str) {}
    fn status(&self, _scope: &str, _message: &str) {}
    fn raw(&self, _line: &str) {}
}

const DIFF: &str = "diff --git a/a.rs b/a.rs\n@@ -1 +1 @@\n-let x = 1;\n+let x = 2;\n";

const SCORED_BODY: &str = r#"{
  "content": [{ "type": "text", "text": "{\"readability_score\": 1, \"robustness_score\": 0, \"vulnerability_score\": 0, \"efficiency_score\": 1, \"output\": \"Small, safe change.\"}" }],
  "usage": { "input_tokens": 10, "output_tokens": 5 }
}"#;

/// `/v1/messages`에 고정 상태/본문으로 답하는 로컬 서버를 띄우고 api_base를 돌려준다.
async fn serve_messages(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route("/v1/messages", post(move || async move { (status, body) }));
    serve(app).await
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/v1")
}

/// 실제 Anthropic 클라이언트로 채점 유스케이스를 한 번 실행한다.
async fn score_against(api_base: String) -> (RunReport, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let diff_path = dir.path().join("pr.diff");
    fs::write(&diff_path, DIFF).unwrap();

    let provider = ProviderConfig {
        api_base: Some(api_base),
        ..ProviderConfig::default()
    };
    let client = AnthropicClient::new(&provider, "sk-ant-test".into()).unwrap();
    let sink = FileResultSink::new(output_path(&dir), dir.path().join("raw.json"));
    let use_case = ScorePrUseCase {
        diff_source: &FileDiffSource,
        model_client: &client,
        sink: &sink,
        reporter: &QuietReporter,
    };

    let report = use_case
        .execute(&RunOptions {
            diff_path,
            pr_number: "77".into(),
            repo: "acme/widgets".into(),
        })
        .await
        .unwrap();
    (report, dir)
}

fn output_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("pr_description.txt")
}

#[tokio::test]
async fn server_error_is_written_with_repo_and_pr() {
    let base = serve_messages(StatusCode::INTERNAL_SERVER_ERROR, "oops").await;

    let (report, dir) = score_against(base).await;

    assert_eq!(report.exit_code, 0);
    assert!(
        report
            .text
            .starts_with("Analysis failed for acme/widgets PR 77: Claude:"),
        "{}",
        report.text
    );
    assert!(report.text.contains("500"));
    assert!(report.text.contains("oops"));
    assert_eq!(fs::read_to_string(output_path(&dir)).unwrap(), report.text);
}

#[tokio::test]
async fn empty_content_list_is_no_response() {
    let base = serve_messages(StatusCode::OK, r#"{"content":[]}"#).await;

    let (report, dir) = score_against(base).await;

    assert_eq!(report.exit_code, 0);
    assert_eq!(
        fs::read_to_string(output_path(&dir)).unwrap(),
        "Analysis failed: No response from Claude API"
    );
    assert!(!dir.path().join("raw.json").exists());
}

#[tokio::test]
async fn html_body_is_a_service_failure() {
    let base = serve_messages(StatusCode::OK, "<html>gateway</html>").await;

    let (report, _dir) = score_against(base).await;

    assert_eq!(report.exit_code, 0);
    assert!(report.text.starts_with("Analysis failed for acme/widgets PR 77: "));
    assert!(report.text.contains("non-JSON payload"), "{}", report.text);
}

#[tokio::test]
async fn api_key_and_version_headers_reach_the_server() {
    let app = Router::new().route(
        "/v1/messages",
        post(|headers: HeaderMap| async move {
            let key = headers.get("x-api-key").and_then(|v| v.to_str().ok());
            let version = headers
                .get("anthropic-version")
                .and_then(|v| v.to_str().ok());
            if key == Some("sk-ant-test") && version == Some("2023-06-01") {
                (StatusCode::OK, SCORED_BODY)
            } else {
                (StatusCode::UNAUTHORIZED, "bad headers")
            }
        }),
    );
    let base = serve(app).await;

    let (report, dir) = score_against(base).await;

    assert_eq!(report.exit_code, 0);
    assert_eq!(
        report.text,
        "Readability Score: 1\nRobustness Score: 0\nVulnerability Score: 0\nEfficiency Score: 1\n\nExplanation:\nSmall, safe change."
    );
    assert!(dir.path().join("raw.json").exists());
}
