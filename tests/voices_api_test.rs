mod support;

use std::collections::BTreeMap;
use std::path::PathBuf;

use elevenlabs_client::types::{AddSharedVoiceRequest, AddVoiceRequest, VoiceSettings};
use serde_json::json;
use support::{EmptyBody, MultipartContaining, TEST_KEY, client_for};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_samples(dir: &tempfile::TempDir) -> Vec<PathBuf> {
    let first = dir.path().join("take-1.mp3");
    let second = dir.path().join("take-2.wav");
    std::fs::write(&first, b"ID3-first-sample").unwrap();
    std::fs::write(&second, b"RIFF-second-sample").unwrap();
    vec![first, second]
}

fn add_voice_request(files: Vec<PathBuf>) -> AddVoiceRequest {
    AddVoiceRequest {
        name: "Narrator".into(),
        files,
        description: Some("warm, low".into()),
        labels: BTreeMap::from([("accent".to_string(), "british".to_string())]),
        remove_background_noise: Some(true),
    }
}

#[tokio::test]
async fn add_voice_then_read_back_matches() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let files = write_samples(&dir);

    Mock::given(method("POST"))
        .and(path("/voices/add"))
        .and(header("xi-api-key", TEST_KEY))
        .and(MultipartContaining("ID3-first-sample"))
        .and(MultipartContaining("RIFF-second-sample"))
        .and(MultipartContaining(r#"{"accent":"british"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"voice_id": "cloned-1"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/voices/cloned-1"))
        .and(EmptyBody)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "voice_id": "cloned-1",
            "name": "Narrator",
            "category": "cloned",
            "labels": {"accent": "british"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = add_voice_request(files);
    let voice = client_for(&server).add_voice(&request).await.expect("add voice");

    assert_eq!(voice.voice_id, "cloned-1");
    assert_eq!(voice.name, request.name);
    assert_eq!(voice.labels, request.labels);
    assert!(voice.is_cloned());
}

#[tokio::test]
async fn upload_files_are_released_after_success_and_failure() {
    for status in [200u16, 500] {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let files = write_samples(&dir);

        Mock::given(method("POST"))
            .and(path("/voices/add"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({"voice_id": "v"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/voices/v"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"voice_id": "v"})))
            .mount(&server)
            .await;

        let result = client_for(&server).add_voice(&add_voice_request(files.clone())).await;
        assert_eq!(result.is_ok(), status == 200);

        // Removing (and on some platforms, opening exclusively) fails if a
        // handle is still held.
        for file in &files {
            std::fs::remove_file(file).expect("file handle released");
        }
        dir.close().expect("temp dir removable");
    }
}

#[tokio::test]
async fn missing_upload_file_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let request = add_voice_request(vec![PathBuf::from("/definitely/not/here.mp3")]);
    let err = client_for(&server).add_voice(&request).await.expect_err("missing file");
    match err {
        elevenlabs_client::ClientError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn edit_settings_sends_only_set_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/voices/v1/settings/edit"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"stability": 0.4, "use_speaker_boost": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let settings = VoiceSettings {
        stability: Some(0.4),
        use_speaker_boost: Some(false),
        ..Default::default()
    };
    let status = client_for(&server)
        .edit_voice_settings("v1", &settings)
        .await
        .expect("edit settings");
    assert!(status.is_ok());
}

#[tokio::test]
async fn shared_voice_is_added_then_fetched() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/voices/add/owner-9/lib-voice"))
        .and(body_json(json!({"new_name": "Library Copy"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"voice_id": "copied"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/voices/copied"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "voice_id": "copied", "name": "Library Copy", "category": "professional"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let voice = client_for(&server)
        .add_shared_voice(
            "owner-9",
            "lib-voice",
            &AddSharedVoiceRequest {
                new_name: "Library Copy".into(),
            },
        )
        .await
        .expect("add shared voice");
    assert_eq!(voice.name, "Library Copy");
}

#[tokio::test]
async fn sample_audio_is_returned_verbatim() {
    let server = MockServer::start().await;
    let audio = vec![0xFFu8, 0xFB, 0x90, 0x00, 0x01, 0x02];

    Mock::given(method("GET"))
        .and(path("/voices/v1/samples/s1/audio"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(audio.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let bytes = client_for(&server)
        .get_voice_sample_audio("v1", "s1")
        .await
        .expect("audio");
    assert_eq!(bytes, audio);
}

#[tokio::test]
async fn identifiers_are_percent_encoded_in_paths() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/voices/a%2Fb"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete_voice("a/b").await.expect("delete");
}
