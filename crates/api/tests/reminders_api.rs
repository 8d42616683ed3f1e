//! HTTP-level integration tests for the reminder endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_empty, post_json};
use serde_json::json;
use sqlx::PgPool;

/// Add a plant for `user` and return its id.
async fn add_plant(pool: &PgPool, user: &str) -> String {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/user/{user}/plants"),
        json!({
            "plant_id": "1",
            "nickname": "Monty",
            "plant_name": "Swiss cheese plant",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn due_reminders(pool: &PgPool, user: &str, query: &str) -> Vec<serde_json::Value> {
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/user/{user}/reminders{query}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"].as_array().unwrap().clone()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn default_window_shows_only_watering(pool: PgPool) {
    add_plant(&pool, "alice").await;

    let reminders = due_reminders(&pool, "alice", "").await;
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0]["reminder_type"], "watering");
    assert_eq!(reminders[0]["plant_nickname"], "Monty");
    assert_eq!(reminders[0]["completed"], false);

    assert!(due_reminders(&pool, "bob", "").await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_lookahead_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/user/alice/reminders?lookahead_days=400").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/user/alice/reminders?lookahead_days=soon").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn completing_reminder_returns_successor(pool: PgPool) {
    let plant_id = add_plant(&pool, "alice").await;
    let reminders = due_reminders(&pool, "alice", "").await;
    let reminder_id = reminders[0]["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = post_empty(
        app,
        &format!("/api/user/alice/reminders/{reminder_id}/complete"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["reminder"]["id"], reminder_id.as_str());
    assert_eq!(json["data"]["reminder"]["completed"], true);
    assert!(json["data"]["reminder"]["completed_at"].is_string());
    let next = &json["data"]["next_reminder"];
    assert_eq!(next["reminder_type"], "watering");
    assert_eq!(next["completed"], false);
    assert_ne!(next["id"], reminder_id.as_str());

    // The plant now carries the watering stamp.
    let app = common::build_test_app(pool.clone());
    let plant = body_json(get(app, &format!("/api/user/alice/plants/{plant_id}")).await).await;
    assert_eq!(
        plant["data"]["last_watered"],
        json["data"]["reminder"]["completed_at"]
    );

    // Exactly one pending watering reminder remains: the successor.
    let reminders = due_reminders(&pool, "alice", "").await;
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0]["id"], next["id"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn completing_twice_returns_404(pool: PgPool) {
    add_plant(&pool, "alice").await;
    let reminder_id = due_reminders(&pool, "alice", "").await[0]["id"]
        .as_str()
        .unwrap()
        .to_string();
    let uri = format!("/api/user/alice/reminders/{reminder_id}/complete");

    let app = common::build_test_app(pool.clone());
    assert_eq!(post_empty(app, &uri).await.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = post_empty(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    // No second successor was created.
    assert_eq!(due_reminders(&pool, "alice", "").await.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn completing_other_users_reminder_returns_404(pool: PgPool) {
    add_plant(&pool, "alice").await;
    let reminder_id = due_reminders(&pool, "alice", "").await[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let app = common::build_test_app(pool.clone());
    let response = post_empty(
        app,
        &format!("/api/user/bob/reminders/{reminder_id}/complete"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let reminders = due_reminders(&pool, "alice", "").await;
    assert_eq!(reminders[0]["completed"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn repotting_reminder_lifecycle(pool: PgPool) {
    let plant_id = add_plant(&pool, "alice").await;
    let body = json!({
        "plant_id": plant_id,
        "reminder_type": "repotting",
        "due_date": "2020-03-01T09:00:00Z",
    });

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/user/alice/reminders", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["data"]["reminder_type"], "repotting");
    let reminder_id = created["data"]["id"].as_str().unwrap().to_string();

    // A second pending repotting reminder conflicts.
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/user/alice/reminders", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Overdue, so it is listed first.
    let reminders = due_reminders(&pool, "alice", "").await;
    assert_eq!(reminders[0]["id"], reminder_id.as_str());

    let app = common::build_test_app(pool.clone());
    let response = post_empty(
        app,
        &format!("/api/user/alice/reminders/{reminder_id}/complete"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["next_reminder"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_reminder_for_foreign_plant_is_404(pool: PgPool) {
    let plant_id = add_plant(&pool, "alice").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/user/bob/reminders",
        json!({
            "plant_id": plant_id,
            "reminder_type": "repotting",
            "due_date": "2030-03-01T09:00:00Z",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_reminder_with_unknown_type_is_rejected(pool: PgPool) {
    let plant_id = add_plant(&pool, "alice").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/user/alice/reminders",
        json!({
            "plant_id": plant_id,
            "reminder_type": "pruning",
            "due_date": "2030-03-01T09:00:00Z",
        }),
    )
    .await;
    assert!(response.status().is_client_error());
}
