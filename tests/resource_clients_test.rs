use assert_matches::assert_matches;
use judgefit::api::{ApiClient, ApiError, GENERIC_ERROR_MESSAGE};
use judgefit::config::VideoEndpoint;
use judgefit::models::{AthleteDraft, CompetitionDraft, ResourceRef, VideoSubmission};
use judgefit::{Config, SessionStore};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::json;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{body_json, header, method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

type Store = Arc<Mutex<Vec<i64>>>;

fn athlete_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Athlete{}", id),
        "surname": "Doe",
        "email": format!("a{}@example.com", id),
        "created_at": "2024-03-01T10:00:00.123456Z"
    })
}

/// Lists whatever ids are still in the store
struct ListAthletes(Store);

impl Respond for ListAthletes {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let ids = self.0.lock().unwrap().clone();
        let results: Vec<_> = ids.into_iter().map(athlete_json).collect();
        ResponseTemplate::new(200).set_body_json(json!({
            "count": results.len(),
            "next": null,
            "previous": null,
            "results": results
        }))
    }
}

/// Removes the id in `/api/athlete/athletes/<id>/` from the store
struct DeleteAthlete(Store);

impl Respond for DeleteAthlete {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = request
            .url
            .path()
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|s| s.parse::<i64>().ok());

        let mut ids = self.0.lock().unwrap();
        match id {
            Some(id) if ids.contains(&id) => {
                ids.retain(|existing| *existing != id);
                ResponseTemplate::new(204)
            }
            _ => ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})),
        }
    }
}

async fn client_for(server: &MockServer) -> ApiClient {
    let mut config = Config::default();
    config.api.base_url = server.uri();

    let session = SessionStore::in_memory();
    session.set_tokens("T1", "T2").unwrap();
    ApiClient::new(&config, session).unwrap()
}

#[tokio::test]
async fn test_delete_then_list_excludes_id() {
    let server = MockServer::start().await;
    let store: Store = Arc::new(Mutex::new(vec![1, 2, 3]));

    Mock::given(method("GET"))
        .and(path("/api/athlete/athletes"))
        .respond_with(ListAthletes(store.clone()))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path_regex(r"^/api/athlete/athletes/\d+/$"))
        .and(header("authorization", "Bearer T1"))
        .respond_with(DeleteAthlete(store.clone()))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.athletes.delete(2).await.unwrap();

    let ids: Vec<i64> = client
        .athletes
        .list()
        .await
        .unwrap()
        .iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, vec![1, 3]);

    let error = client.athletes.delete(2).await.unwrap_err();
    assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(error.to_string(), "Not found.");
}

#[tokio::test]
async fn test_server_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/athlete/athletes/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"message": "X"})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client
        .athletes
        .create(&AthleteDraft::new("Jane", "Doe", "jane@example.com"))
        .await
        .unwrap_err();

    assert_matches!(error, ApiError::Server { status, .. } if status == StatusCode::BAD_REQUEST);
    assert_eq!(error.to_string(), "X");
}

#[tokio::test]
async fn test_unparsable_error_body_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/athlete/competitions/9/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<h1>Server Error</h1>"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client.competitions.get(9).await.unwrap_err();

    assert_eq!(error.to_string(), GENERIC_ERROR_MESSAGE);
    assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn test_create_athlete_posts_to_collection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/athlete/athletes/"))
        .and(header("authorization", "Bearer T1"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "name": "Jane",
            "surname": "Doe",
            "email": "jane@example.com"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(athlete_json(7)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let athlete = client
        .athletes
        .create(&AthleteDraft::new("Jane", "Doe", "jane@example.com"))
        .await
        .unwrap();

    assert_eq!(athlete.id, 7);
}

#[tokio::test]
async fn test_update_athlete_puts_to_item() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/athlete/athletes/7/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(athlete_json(7)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let athlete = client
        .athletes
        .update(7, &AthleteDraft::new("Athlete7", "Doe", "a7@example.com"))
        .await
        .unwrap();

    assert_eq!(athlete.email, "a7@example.com");
}

#[tokio::test]
async fn test_missing_required_field_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    let result = client
        .athletes
        .create(&AthleteDraft::new("Jane", "", "jane@example.com"))
        .await;
    assert_matches!(result, Err(ApiError::Validation { field: "surname" }));

    let result = client.competitions.update(3, &CompetitionDraft::new("  ")).await;
    assert_matches!(result, Err(ApiError::Validation { field: "name" }));
}

#[tokio::test]
async fn test_competition_title_from_either_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/athlete/competitions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "next": null,
            "results": [
                {"id": 1, "name": "Open 24.1", "created_at": "2024-02-29T00:00:00Z"},
                {"id": 2, "surname": "Quarterfinals", "created_at": "2024-04-01T00:00:00"}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let competitions = client.competitions.list().await.unwrap();

    let titles: Vec<&str> = competitions.iter().map(|c| c.title()).collect();
    assert_eq!(titles, vec!["Open 24.1", "Quarterfinals"]);
}

#[tokio::test]
async fn test_decode_failure_is_typed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/athlete/athletes/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "one"})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.athletes.get(1).await;

    assert_matches!(result, Err(ApiError::Decode(_)));
}

#[tokio::test]
async fn test_video_submit_and_delete_use_video_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/video/videos/"))
        .and(body_json(json!({
            "video_url": "https://videos.example.com/clip.mp4",
            "competition": 3,
            "workout": "24.1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 11,
            "athlete": 5,
            "file": "https://videos.example.com/clip.mp4",
            "competition": 3,
            "workout": "24.1",
            "created_at": "2024-03-02T08:30:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/video/videos/11/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let submission = VideoSubmission {
        athlete_id: None,
        video_url: "https://videos.example.com/clip.mp4".to_string(),
        competition: ResourceRef::Id(3),
        workout: "24.1".parse().unwrap(),
    };

    let video = client.videos.create(&submission).await.unwrap();
    assert_eq!(video.id, 11);
    assert_eq!(video.athlete_id, Some(5));
    assert_eq!(video.workout, Some(ResourceRef::Name("24.1".to_string())));

    client.videos.delete(video.id).await.unwrap();
}

#[tokio::test]
async fn test_workout_video_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/workout/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "video_url": "https://videos.example.com/a.mp4"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.api.base_url = server.uri();
    config.api.video_endpoint = VideoEndpoint::Workout;
    let client = ApiClient::new(&config, SessionStore::in_memory()).unwrap();

    let videos = client.videos.list().await.unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(
        videos[0].video_url.as_deref(),
        Some("https://videos.example.com/a.mp4")
    );
    assert!(videos[0].created_at.is_none());
}

#[tokio::test]
async fn test_network_failure() {
    let mut config = Config::default();
    // Nothing listens on the discard port
    config.api.base_url = "http://127.0.0.1:9".to_string();
    let client = ApiClient::new(&config, SessionStore::in_memory()).unwrap();

    let result = client.athletes.list().await;
    assert_matches!(result, Err(ApiError::Network(_)));
}
