mod harness;

use harness::config::ConfigBuilder;
use harness::mock_openai::MockOpenAi;
use harness::server::TestServer;
use serde_json::json;

#[tokio::test]
async fn generates_note_from_transcript() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockOpenAi::start().await.unwrap();
    let config = ConfigBuilder::new(dir.path()).with_notes(&mock.base_url()).build();
    let server = TestServer::start(config).await.unwrap();

    let resp = server
        .client()
        .post(server.url("/v1/notes"))
        .json(&json!({ "transcript": "Patient reports fever. Doctor prescribes Acetaminophen 500mg." }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["note"], mock.note_text());
    assert_eq!(mock.completion_count(), 1);
}

#[tokio::test]
async fn prompt_is_extraction_only_and_uses_default_department() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockOpenAi::start().await.unwrap();
    let config = ConfigBuilder::new(dir.path())
        .with_notes(&mock.base_url())
        .with_default_department("internal medicine")
        .build();
    let server = TestServer::start(config).await.unwrap();

    server
        .client()
        .post(server.url("/v1/notes"))
        .json(&json!({ "transcript": "Patient reports fever." }))
        .send()
        .await
        .unwrap();

    let request = mock.last_chat_request().unwrap();
    assert_eq!(request["model"], "gpt-4o-mini");
    assert!((request["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-9);
    assert_eq!(request["max_tokens"], 800);

    let system = request["messages"][0]["content"].as_str().unwrap();
    assert!(system.contains("internal medicine practice"));
    assert!(system.contains("Never generate or infer"));
    assert!(system.contains("(assessment pending clinician review)"));
    assert!(system.contains("(plan pending clinician review)"));

    let user = request["messages"][1]["content"].as_str().unwrap();
    assert!(user.contains("Patient reports fever."));
}

#[tokio::test]
async fn department_override_reaches_the_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockOpenAi::start().await.unwrap();
    let config = ConfigBuilder::new(dir.path()).with_notes(&mock.base_url()).build();
    let server = TestServer::start(config).await.unwrap();

    server
        .client()
        .post(server.url("/v1/notes"))
        .json(&json!({ "transcript": "Patient reports knee pain.", "department": "orthopedics" }))
        .send()
        .await
        .unwrap();

    let request = mock.last_chat_request().unwrap();
    let system = request["messages"][0]["content"].as_str().unwrap();
    assert!(system.contains("orthopedics practice"));
}

#[tokio::test]
async fn empty_transcript_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockOpenAi::start().await.unwrap();
    let config = ConfigBuilder::new(dir.path()).with_notes(&mock.base_url()).build();
    let server = TestServer::start(config).await.unwrap();

    let resp = server
        .client()
        .post(server.url("/v1/notes"))
        .json(&json!({ "transcript": "   " }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["type"], "invalid_request_error");
    assert_eq!(mock.completion_count(), 0);
}

#[tokio::test]
async fn provider_failure_surfaces_as_bad_gateway() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockOpenAi::start_failing(1).await.unwrap();
    let config = ConfigBuilder::new(dir.path()).with_notes(&mock.base_url()).build();
    let server = TestServer::start(config).await.unwrap();

    let resp = server
        .client()
        .post(server.url("/v1/notes"))
        .json(&json!({ "transcript": "Patient reports fever." }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 502);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["type"], "generation_error");
}
