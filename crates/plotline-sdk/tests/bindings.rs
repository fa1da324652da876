//! Endpoint binding tests: each binding must hit its method and path with
//! the documented payload, and decode the documented response.

use plotline_sdk::{
    BrainstormRequest, Client, Credentials, Error, GenerateRequest, GenerationMode, NewChapter,
    NewCharacter, NewIdea, NewNovel, NewVersion, UpdateChapter, UpdateNovel,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> Client {
    Client::builder().base_url(server.uri()).build().unwrap()
}

#[tokio::test]
async fn test_create_novel_posts_title_and_returns_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/novels"))
        .and(body_json(json!({"title": "A"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1, "title": "A"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let novel = client.novels().create(&NewNovel::new("A")).await.unwrap();

    assert_eq!(novel.id, 1);
    assert_eq!(novel.title, "A");
    assert!(novel.summary.is_none());
}

#[tokio::test]
async fn test_list_novels_decodes_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/novels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 3,
                "title": "Saltwater",
                "summary": "A lighthouse keeper's last season.",
                "tags": "literary,coastal",
                "updated_at": "2024-05-01T10:15:30.123456"
            },
            {"id": 4, "title": "Driftwood", "summary": null, "tags": null, "updated_at": null}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let novels = client.novels().list().await.unwrap();

    assert_eq!(novels.len(), 2);
    assert_eq!(novels[0].title, "Saltwater");
    assert!(novels[0].updated_at.is_some());
    assert!(novels[1].summary.is_none());
}

#[tokio::test]
async fn test_update_novel_sends_only_changed_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/novels/2"))
        .and(body_json(json!({"summary": "New direction"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": "OK"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let update = UpdateNovel {
        summary: Some("New direction".to_string()),
        ..Default::default()
    };
    client.novels().update(2, &update).await.unwrap();
}

#[tokio::test]
async fn test_delete_novel_hits_resource_path() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/novels/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": "OK"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.novels().delete(8).await.unwrap();
}

#[tokio::test]
async fn test_export_returns_plain_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/novels/2/export"))
        .and(query_param("format", "txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("Saltwater\n\n== Chapter One ==\n\nThe tide came in early.")
                .append_header("Content-Type", "text/plain; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let manuscript = client.novels().export_text(2).await.unwrap();

    assert!(manuscript.starts_with("Saltwater"));
    assert!(manuscript.contains("Chapter One"));
}

#[tokio::test]
async fn test_create_chapter_returns_new_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/novels/7/chapters"))
        .and(body_json(json!({"title": "The Long Night"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 12})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let created = client
        .chapters()
        .create(7, &NewChapter::new("The Long Night"))
        .await
        .unwrap();

    assert_eq!(created.id, 12);
}

#[tokio::test]
async fn test_list_chapters_keeps_manuscript_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/novels/7/chapters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "One", "order_index": 1, "updated_at": "2024-05-01T10:00:00"},
            {"id": 2, "title": "Two", "order_index": 2, "updated_at": "2024-05-02T09:30:00"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let chapters = client.chapters().list(7).await.unwrap();

    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[0].order_index, 1);
    assert_eq!(chapters[1].title, "Two");
}

#[tokio::test]
async fn test_get_chapter_includes_content() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/chapters/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "novel_id": 7,
            "title": "The Long Night",
            "content": "It began with the gulls going quiet."
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let chapter = client.chapters().get(5).await.unwrap();

    assert_eq!(chapter.novel_id, 7);
    assert_eq!(chapter.content, "It began with the gulls going quiet.");
}

#[tokio::test]
async fn test_update_chapter_sends_content() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/chapters/5"))
        .and(body_json(json!({"content": "Rewritten opening."})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": "OK"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let update = UpdateChapter {
        content: Some("Rewritten opening.".to_string()),
        ..Default::default()
    };
    client.chapters().update(5, &update).await.unwrap();
}

#[tokio::test]
async fn test_delete_chapter_surfaces_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/chapters/5"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.chapters().delete(5).await.unwrap_err();

    assert!(matches!(err, Error::Api { status: 404, .. }));
    assert_eq!(err.message(), "not found");
}

#[tokio::test]
async fn test_register_returns_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({"username": "ink", "password": "quill"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-1",
            "user": {"id": 1, "username": "ink"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let session = client
        .auth()
        .register(&Credentials::new("ink", "quill"))
        .await
        .unwrap();

    assert_eq!(session.token, "tok-1");
    assert_eq!(session.user.username, "ink");
}

#[tokio::test]
async fn test_login_rejection_carries_backend_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({
                "code": "INVALID_CREDENTIALS",
                "message": "wrong username or password"
            })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .auth()
        .login(&Credentials::new("ink", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.message(), "wrong username or password");
}

#[tokio::test]
async fn test_generate_forces_non_streaming() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ai/generate"))
        .and(body_partial_json(json!({"mode": "continue", "stream": false})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"content": "The lighthouse blinked twice."})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let request = GenerateRequest::builder(GenerationMode::Continue)
        .previous_text("The keeper climbed the stairs.")
        .novel_id(3)
        .build();
    let generation = client.ai().generate(request).await.unwrap();

    assert_eq!(generation.content, "The lighthouse blinked twice.");
}

#[tokio::test]
async fn test_brainstorm_sends_template_and_keywords() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ai/brainstorm"))
        .and(body_json(json!({
            "type": "outline",
            "keywords": ["airship", "mutiny"]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"content": "Act I: the mutiny."})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let request = BrainstormRequest::new(GenerationMode::Outline, ["airship", "mutiny"]);
    let generation = client.ai().brainstorm(&request).await.unwrap();

    assert_eq!(generation.content, "Act I: the mutiny.");
}

#[tokio::test]
async fn test_models_lists_model_names() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/ai/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["qwen2.5", "llama3.1"])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let models = client.ai().models().await.unwrap();

    assert_eq!(models, vec!["qwen2.5", "llama3.1"]);
}

#[tokio::test]
async fn test_create_character_posts_profile() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/novels/4/characters"))
        .and(body_json(json!({"name": "Mara", "profile": "smuggler turned navigator"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let mut character = NewCharacter::new("Mara");
    character.profile = Some("smuggler turned navigator".to_string());
    let created = client.characters().create(4, &character).await.unwrap();

    assert_eq!(created.id, 3);
}

#[tokio::test]
async fn test_list_characters_decodes_cards() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/novels/4/characters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3, "name": "Mara", "profile": "smuggler turned navigator"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let characters = client.characters().list(4).await.unwrap();

    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].name, "Mara");
}

#[tokio::test]
async fn test_create_idea_posts_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/novels/4/ideas"))
        .and(body_json(json!({"content": "What if the island moves?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let created = client
        .ideas()
        .create(4, &NewIdea::new("What if the island moves?"))
        .await
        .unwrap();

    assert_eq!(created.id, 9);
}

#[tokio::test]
async fn test_delete_idea_hits_resource_path() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/ideas/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": "OK"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.ideas().delete(11).await.unwrap();
}

#[tokio::test]
async fn test_create_version_posts_note() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chapters/9/versions"))
        .and(body_json(json!({"note": "before rewrite"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let created = client
        .versions()
        .create(9, &NewVersion::with_note("before rewrite"))
        .await
        .unwrap();

    assert_eq!(created.id, 42);
}

#[tokio::test]
async fn test_restore_version_posts_to_restore_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chapters/3/restore/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": "OK"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.versions().restore(3, 7).await.unwrap();
}

#[tokio::test]
async fn test_restore_rejects_foreign_version() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chapters/3/restore/7"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "INVALID_OPERATION",
            "message": "version belongs to another chapter"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.versions().restore(3, 7).await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.message(), "version belongs to another chapter");
}

#[tokio::test]
async fn test_list_versions_decodes_history() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/chapters/9/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 42, "content": "Draft two.", "note": "before rewrite", "created_at": "2024-05-03T08:00:00"},
            {"id": 41, "content": "Draft one.", "note": null, "created_at": "2024-05-01T08:00:00"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let versions = client.versions().list(9).await.unwrap();

    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0].note.as_deref(), Some("before rewrite"));
    assert!(versions[1].note.is_none());
}

#[tokio::test]
async fn test_stats_decodes_counts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "novel_count": 2,
            "chapter_count": 14,
            "character_count": 6,
            "word_count": 48_213
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let stats = client.stats().await.unwrap();

    assert_eq!(stats.novel_count, 2);
    assert_eq!(stats.word_count, 48_213);
}

#[tokio::test]
async fn test_is_healthy_reflects_backend_state() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": "OK"})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert!(client.is_healthy().await);

    let down = Client::builder()
        .base_url("http://127.0.0.1:9")
        .build()
        .unwrap();
    assert!(!down.is_healthy().await);
}
