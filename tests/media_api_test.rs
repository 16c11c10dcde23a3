mod support;

use elevenlabs_client::types::{CreateAudioNativeRequest, CreateDubbingRequest, PageQuery};
use serde_json::json;
use support::{EmptyBody, MultipartContaining, client_for};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn audio_native_upload_returns_snippet() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let article = dir.path().join("article.txt");
    std::fs::write(&article, b"Once upon a time in a newsroom").unwrap();

    Mock::given(method("POST"))
        .and(path("/audio-native"))
        .and(MultipartContaining(r#"name="name""#))
        .and(MultipartContaining("Blog post"))
        .and(MultipartContaining(r#"name="file""#))
        .and(MultipartContaining("Once upon a time in a newsroom"))
        .and(MultipartContaining(r#"name="auto_convert""#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "project_id": "an-1",
            "converting": true,
            "html_snippet": "<div id=\"elevenlabs-audionative-widget\"></div>"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let project = client_for(&server)
        .create_audio_native(&CreateAudioNativeRequest {
            name: "Blog post".into(),
            file: Some(article.clone()),
            auto_convert: Some(true),
            ..Default::default()
        })
        .await
        .expect("create audio native");

    assert_eq!(project.project_id, "an-1");
    assert!(project.converting);
    assert!(project.html_snippet.contains("audionative-widget"));
    std::fs::remove_file(&article).expect("file handle released");
}

#[tokio::test]
async fn audio_native_delete_removes_studio_project() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/studio/projects/an-1"))
        .and(EmptyBody)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .delete_audio_native("an-1")
        .await
        .expect("delete audio native");
}

#[tokio::test]
async fn audio_native_settings_read() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/audio-native/an-1/settings"))
        .and(EmptyBody)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "enabled": true,
            "snapshot_id": "snap-1",
            "settings": {"title": "Blog post", "small": false, "status": "ready"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let settings = client_for(&server)
        .get_audio_native_settings("an-1")
        .await
        .expect("settings");
    assert!(settings.enabled);
    assert_eq!(settings.settings.and_then(|s| s.title).as_deref(), Some("Blog post"));
}

#[tokio::test]
async fn dubbing_upload_is_multipart() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let clip = dir.path().join("clip.mp4");
    std::fs::write(&clip, b"ftypisom-clip-bytes").unwrap();

    Mock::given(method("POST"))
        .and(path("/dubbing"))
        .and(MultipartContaining(r#"name="target_lang""#))
        .and(MultipartContaining(r#"name="file""#))
        .and(MultipartContaining("ftypisom-clip-bytes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dubbing_id": "dub-1",
            "expected_duration_sec": 12.5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .create_dubbing(&CreateDubbingRequest {
            file: Some(clip),
            target_lang: "es".into(),
            ..Default::default()
        })
        .await
        .expect("create dubbing");
    assert_eq!(created.dubbing_id, "dub-1");
    assert_eq!(created.expected_duration_sec, 12.5);
}

#[tokio::test]
async fn dubbing_list_read_and_audio() {
    let server = MockServer::start().await;
    let audio = vec![0x49u8, 0x44, 0x33, 0x04];

    Mock::given(method("GET"))
        .and(path("/dubbing"))
        .and(query_param("page_size", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dubs": [{"dubbing_id": "dub-1", "name": "Clip", "status": "dubbed", "target_languages": ["es"]}],
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dubbing/dub-1"))
        .and(EmptyBody)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dubbing_id": "dub-1", "name": "Clip", "status": "dubbed", "target_languages": ["es"]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dubbing/dub-1/audio/es"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(audio.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/dubbing/dub-1"))
        .and(EmptyBody)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client
        .list_dubbings(&PageQuery {
            page_size: Some(5),
            ..Default::default()
        })
        .await
        .expect("list");
    assert_eq!(page.dubs.len(), 1);

    let dub = client.get_dubbing("dub-1").await.expect("get");
    assert_eq!(dub.target_languages, vec!["es".to_string()]);
    assert_eq!(client.get_dubbed_audio("dub-1", "es").await.expect("audio"), audio);
    client.delete_dubbing("dub-1").await.expect("delete");
}
