use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use jiff::civil::date;
use serde_json::{Value, json};
use tower::ServiceExt;

use workout_server::{AppState, router};
use workout_storage::backend::MemoryBackend;
use workout_storage::catalog::parse_tracker_config;
use workout_storage::store::WorkoutStore;

const CONFIG: &str = r#"{
    "focusAreas": {
        "weights": [
            {"id": "chest", "name": "Chest", "exercises": ["Push-up", "Bench Press"]},
            {"id": "back", "name": "Back", "exercises": ["Deadlift", "Pull-up", "Push-up"]}
        ],
        "other": [
            {"id": "cardio", "name": "Cardio", "exercises": ["Running"]}
        ]
    }
}"#;

async fn app() -> (Arc<MemoryBackend>, Router) {
    let backend = Arc::new(MemoryBackend::new());
    let store = WorkoutStore::new(backend.clone());
    store.initialize(date(2024, 1, 1)).await.unwrap();
    let config = parse_tracker_config(CONFIG.as_bytes()).unwrap();
    (backend, router(AppState::new(config, store), None))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, _, value) = send_full(app, method, uri, body).await;
    (status, value)
}

async fn send_full(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, axum::http::HeaderMap, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&value).unwrap())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, headers, value)
}

#[tokio::test]
async fn health_is_ok() {
    let (_, app) = app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn config_is_served_as_loaded() {
    let (_, app) = app().await;
    let (status, body) = send(&app, "GET", "/api/config", None).await;

    assert_eq!(status, StatusCode::OK);
    let expected: Value = serde_json::from_str(CONFIG).unwrap();
    assert_eq!(body, expected);
}

#[tokio::test]
async fn workout_data_starts_empty() {
    let (_, app) = app().await;
    let (status, body) = send(&app, "GET", "/api/workout-data", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"startDate": "2024-01-01", "weeks": []}));
}

#[tokio::test]
async fn get_week_materializes_calendar() {
    let (_, app) = app().await;

    let (status, week1) = send(&app, "GET", "/api/week/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(week1["weekNumber"], 1);
    assert_eq!(week1["startDate"], "2024-01-01");
    assert_eq!(week1["endDate"], "2024-01-07");
    assert_eq!(week1["days"].as_array().unwrap().len(), 7);
    assert_eq!(week1["days"][0]["dayName"], "MONDAY");
    assert_eq!(week1["days"][6]["date"], "2024-01-07");

    let (_, week2) = send(&app, "GET", "/api/week/2", None).await;
    assert_eq!(week2["startDate"], "2024-01-08");
    assert_eq!(week2["endDate"], "2024-01-14");

    let (_, data) = send(&app, "GET", "/api/workout-data", None).await;
    assert_eq!(data["weeks"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn repeated_get_is_idempotent() {
    let (backend, app) = app().await;

    let (_, first) = send(&app, "GET", "/api/week/4", None).await;
    let writes = backend.write_count().await;
    let (_, second) = send(&app, "GET", "/api/week/4", None).await;

    assert_eq!(first, second);
    assert_eq!(backend.write_count().await, writes);
}

#[tokio::test]
async fn export_before_get_is_not_found() {
    let (_, app) = app().await;

    let (status, body) = send(&app, "GET", "/api/export/week/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Week not found"}));

    let (status, week) = send(&app, "GET", "/api/week/3", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, headers, exported) = send_full(&app, "GET", "/api/export/week/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(exported, week);
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"week-3-2024-01-15.json\""
    );
}

#[tokio::test]
async fn save_then_export_round_trips() {
    let (_, app) = app().await;
    let (_, mut week) = send(&app, "GET", "/api/week/1", None).await;

    week["days"][0]["focusAreas"] = json!(["chest"]);
    week["days"][0]["exercises"] = json!([{
        "name": "Bench Press",
        "sets": [
            {"reps": "10", "weight": "135"},
            {"reps": "8", "weight": "145"},
            {"reps": "8", "weight": "145"},
            {"reps": "6", "weight": "155"},
            {"reps": "", "weight": ""}
        ]
    }]);
    week["days"][2]["focusAreas"] = json!(["cardio"]);
    week["days"][2]["exercises"] = json!([{
        "name": "Running",
        "sets": [
            {"time": "20", "intensity": "easy"},
            {"time": "", "intensity": ""},
            {"time": "", "intensity": ""},
            {"time": "", "intensity": ""},
            {"time": "", "intensity": ""}
        ]
    }]);
    week["days"][2]["cardio"] = json!("5k loop");
    week["days"][6]["notes"] = json!("rest day");

    let (status, body) = send(&app, "POST", "/api/week/1", Some(week.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (status, exported) = send(&app, "GET", "/api/export/week/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(exported, week);

    let (_, fetched) = send(&app, "GET", "/api/week/1", None).await;
    assert_eq!(fetched, week);
}

#[tokio::test]
async fn save_uses_path_number_and_appends() {
    let (_, app) = app().await;
    let (_, mut week) = send(&app, "GET", "/api/week/1", None).await;
    week["weekNumber"] = json!(9);

    let (status, _) = send(&app, "POST", "/api/week/5", Some(week)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, data) = send(&app, "GET", "/api/workout-data", None).await;
    let numbers: Vec<u64> = data["weeks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["weekNumber"].as_u64().unwrap())
        .collect();
    assert_eq!(numbers, [1, 5]);
}

#[tokio::test]
async fn set_start_date_only_affects_new_weeks() {
    let (_, app) = app().await;
    let (_, week1) = send(&app, "GET", "/api/week/1", None).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/set-start-date",
        Some(json!({"startDate": "2024-03-04"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "startDate": "2024-03-04"}));

    let (_, again) = send(&app, "GET", "/api/week/1", None).await;
    assert_eq!(again, week1);

    let (_, week2) = send(&app, "GET", "/api/week/2", None).await;
    assert_eq!(week2["startDate"], "2024-03-11");
}

#[tokio::test]
async fn exercises_for_focus_resolution() {
    let (_, app) = app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/exercises-for-focus",
        Some(json!({"focusAreas": ["chest"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Bench Press", "Push-up"]));

    let (_, body) = send(
        &app,
        "POST",
        "/api/exercises-for-focus",
        Some(json!({"focusAreas": ["back", "chest", "chest", "unknown"]})),
    )
    .await;
    assert_eq!(body, json!(["Bench Press", "Deadlift", "Pull-up", "Push-up"]));

    let (_, body) = send(
        &app,
        "POST",
        "/api/exercises-for-focus",
        Some(json!({"focusAreas": []})),
    )
    .await;
    assert_eq!(body, json!([]));

    let (_, body) = send(
        &app,
        "POST",
        "/api/exercises-for-focus",
        Some(json!({"focusAreas": ["cardio"]})),
    )
    .await;
    assert_eq!(body, json!(["Running"]));
}

#[tokio::test]
async fn week_zero_is_bad_request() {
    let (_, app) = app().await;

    let (status, body) = send(&app, "GET", "/api/week/0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid week number"));

    let (status, _) = send(&app, "GET", "/api/export/week/0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_requests_get_json_errors() {
    let (_, app) = app().await;

    let (status, body) = send(&app, "GET", "/api/week/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(
        &app,
        "POST",
        "/api/set-start-date",
        Some(json!({"startDate": "not-a-date"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(&app, "POST", "/api/exercises-for-focus", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let request = Request::builder()
        .method("POST")
        .uri("/api/week/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"days\": ["))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());

    let (_, data) = send(&app, "GET", "/api/workout-data", None).await;
    assert_eq!(data["startDate"], "2024-01-01");
    assert_eq!(data["weeks"], json!([]));
}

#[tokio::test]
async fn saved_week_is_exported_exactly_as_posted() {
    let (_, app) = app().await;
    let posted = json!({
        "weekNumber": 2,
        "label": "deload",
        "days": [{
            "date": "sometime",
            "dayName": null,
            "focusAreas": ["chest"],
            "exercises": [{
                "name": "Bench Press",
                "tempo": "3-1-1",
                "sets": [
                    {"reps": null, "weight": true, "rpe": 7},
                    {"reps": "", "weight": ""}
                ]
            }],
            "cardio": "",
            "notes": "",
            "mood": {"energy": 4}
        }]
    });

    let (status, body) = send(&app, "POST", "/api/week/2", Some(posted.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (status, headers, exported) = send_full(&app, "GET", "/api/export/week/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(exported, posted);
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"week-2.json\""
    );
}

#[tokio::test]
async fn static_client_is_served_when_configured() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Workout Tracker</h1>").unwrap();

    let backend = Arc::new(MemoryBackend::new());
    let store = WorkoutStore::new(backend);
    let config = parse_tracker_config(CONFIG.as_bytes()).unwrap();
    let app = router(AppState::new(config, store), Some(dir.path()));

    let response = app
        .oneshot(Request::builder().uri("/index.html").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"<h1>Workout Tracker</h1>");
}
