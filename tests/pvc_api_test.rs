mod support;

use elevenlabs_client::types::{CreatePvcVoiceRequest, PvcTrainingState, TrainPvcVoiceRequest};
use serde_json::json;
use support::{EmptyBody, TEST_KEY, client_for};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn create_pvc_voice_returns_vendor_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/voices/pvc"))
        .and(header("xi-api-key", TEST_KEY))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "Test Voice", "language": "en"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"voice_id": "test-voice-id"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let voice = client
        .create_pvc_voice(&CreatePvcVoiceRequest {
            name: "Test Voice".into(),
            language: "en".into(),
            description: None,
            labels: None,
        })
        .await
        .expect("create pvc voice");

    assert_eq!(voice.voice_id, "test-voice-id");
}

#[tokio::test]
async fn list_pvc_voices_returns_all_entries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/voices/pvc"))
        .and(header("xi-api-key", TEST_KEY))
        .and(EmptyBody)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "voices": [
                {"voice_id": "voice-1", "name": "First", "category": "professional", "state": "ready"},
                {"voice_id": "voice-2", "name": "Second", "category": "professional", "state": "training"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let voices = client_for(&server).list_pvc_voices().await.expect("list");

    assert_eq!(voices.len(), 2);
    assert_eq!(voices[0].voice_id, "voice-1");
    assert_eq!(voices[0].state, PvcTrainingState::Ready);
    assert!(!voices[1].is_ready());
}

#[tokio::test]
async fn vendor_error_carries_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/voices/pvc/v1/train"))
        .respond_with(ResponseTemplate::new(422).set_body_string(r#"{"detail":"bad input"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .train_pvc_voice("v1", &TrainPvcVoiceRequest::default())
        .await
        .expect_err("422 must fail");

    let text = err.to_string();
    assert!(text.starts_with("api error (status 422): "), "{text}");
    assert!(text.contains("bad input"));
    assert_eq!(err.status_code(), Some(422));
    assert!(!text.contains(TEST_KEY));
}

#[tokio::test]
async fn pvc_sample_delete_sends_no_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/voices/pvc/v1/samples/s1"))
        .and(EmptyBody)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .delete_pvc_sample("v1", "s1")
        .await
        .expect("delete sample");
}
