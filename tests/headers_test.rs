use judgefit::api::ApiClient;
use judgefit::auth::FileStorage;
use judgefit::{Config, SessionStore};
use mockito::Matcher;
use tempfile::TempDir;

fn client_for(url: String, session: SessionStore) -> ApiClient {
    let mut config = Config::default();
    config.api.base_url = url;
    ApiClient::new(&config, session).unwrap()
}

#[tokio::test]
async fn test_no_token_means_no_authorization_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/athlete/athletes")
        .match_header("authorization", Matcher::Missing)
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(server.url(), SessionStore::in_memory());
    let athletes = client.athletes.list().await.unwrap();

    assert!(athletes.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_token_is_sent_as_bearer() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/athlete/competitions")
        .match_header("authorization", "Bearer abc.def.ghi")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"count": 0, "next": null, "results": []}"#)
        .create_async()
        .await;

    let session = SessionStore::in_memory();
    session.set_tokens("abc.def.ghi", "refresh").unwrap();
    let client = client_for(server.url(), session);

    client.competitions.list().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_token_file_shared_between_sessions() {
    let dir = TempDir::new().unwrap();
    let token_file = dir.path().join("session.toml");

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/video/videos/4/")
        .match_header("authorization", "Bearer from-disk")
        .with_status(204)
        .create_async()
        .await;

    // One process logs in, another one issues the request
    let writer = SessionStore::new(FileStorage::new(&token_file));
    writer.set_tokens("from-disk", "refresh").unwrap();

    let reader = SessionStore::file(&token_file);
    let client = client_for(server.url(), reader);
    client.videos.delete(4).await.unwrap();

    mock.assert_async().await;
}
