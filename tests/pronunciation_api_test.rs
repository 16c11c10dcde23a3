mod support;

use elevenlabs_client::types::{AddDictionaryFromRulesRequest, ListDictionariesQuery, PronunciationRule};
use serde_json::json;
use support::{EmptyBody, client_for};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn dictionary_from_rules_reads_back_same_version() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pronunciation-dictionaries/add-from-rules"))
        .and(body_json(json!({
            "name": "Brand names",
            "rules": [
                {"type": "alias", "string_to_replace": "ElevenLabs", "alias": "Eleven Labs"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "dict-1",
            "name": "Brand names",
            "created_by": "user-1",
            "creation_time_unix": 1714000000,
            "version_id": "ver-1",
            "version_rules_num": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pronunciation-dictionaries/dict-1"))
        .and(EmptyBody)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "dict-1",
            "latest_version_id": "ver-1",
            "latest_version_rules_num": 1,
            "name": "Brand names",
            "created_by": "user-1",
            "creation_time_unix": 1714000000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client
        .add_pronunciation_dictionary_from_rules(&AddDictionaryFromRulesRequest {
            name: "Brand names".into(),
            rules: vec![PronunciationRule::alias("ElevenLabs", "Eleven Labs")],
            description: None,
            workspace_access: None,
        })
        .await
        .expect("create");

    let read = client.get_pronunciation_dictionary(&created.id).await.expect("read");
    assert_eq!(read.latest_version_id, created.version_id);
    assert!(!read.is_archived());
}

#[tokio::test]
async fn archive_is_a_patch_with_archived_flag() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/pronunciation-dictionaries/dict-1"))
        .and(body_json(json!({"archived": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "dict-1",
            "latest_version_id": "ver-3",
            "name": "Brand names",
            "archived_time_unix": 1714000500
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dict = client_for(&server)
        .archive_pronunciation_dictionary("dict-1")
        .await
        .expect("archive");
    assert!(dict.is_archived());
}

#[tokio::test]
async fn rule_removal_lists_match_strings() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pronunciation-dictionaries/dict-1/remove-rules"))
        .and(body_json(json!({"rule_strings": ["ElevenLabs"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "dict-1", "version_id": "ver-2", "version_rules_num": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .remove_pronunciation_rules("dict-1", &["ElevenLabs"])
        .await
        .expect("remove rules");
    assert_eq!(response.version_id, "ver-2");
    assert_eq!(response.version_rules_num, 0);
}

#[tokio::test]
async fn list_passes_paging_as_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pronunciation-dictionaries"))
        .and(query_param("cursor", "abc"))
        .and(query_param("page_size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pronunciation_dictionaries": [{"id": "dict-1", "name": "Brand names"}],
            "next_cursor": null,
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server)
        .list_pronunciation_dictionaries(&ListDictionariesQuery {
            cursor: Some("abc".into()),
            page_size: Some(10),
            ..Default::default()
        })
        .await
        .expect("list");
    assert_eq!(page.pronunciation_dictionaries.len(), 1);
    assert!(!page.has_more);
}

#[tokio::test]
async fn saved_download_matches_vendor_bytes() {
    let server = MockServer::start().await;
    let pls = r#"<?xml version="1.0" encoding="UTF-8"?>
<lexicon version="1.0" alphabet="ipa" xml:lang="en-US">
  <lexeme><grapheme>tomato</grapheme><phoneme>/tə'meɪtoʊ/</phoneme></lexeme>
</lexicon>
"#
    .as_bytes()
    .to_vec();

    Mock::given(method("GET"))
        .and(path("/pronunciation-dictionaries/dict-1/ver-1/download"))
        .and(EmptyBody)
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/pls+xml")
                .set_body_bytes(pls.clone()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out/brand.pls");
    let written = client_for(&server)
        .save_pronunciation_dictionary("dict-1", "ver-1", &dest)
        .await
        .expect("save");

    assert_eq!(written, pls.len() as u64);
    assert_eq!(std::fs::read(&dest).unwrap(), pls);
}

#[tokio::test]
async fn failed_download_writes_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pronunciation-dictionaries/dict-1/ver-9/download"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"detail":"version not found"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("brand.pls");
    let err = client_for(&server)
        .save_pronunciation_dictionary("dict-1", "ver-9", &dest)
        .await
        .expect_err("404");

    assert!(err.is_not_found());
    assert!(!dest.exists());
}
