//! Integration tests for the `/sleep` endpoints.

use std::sync::Arc;

use kronix::persistence::sleep_repo::SleepRepo;
use serde_json::{json, Value};

use super::test_helpers::{date, spawn_app_on};

#[tokio::test]
async fn empty_window_has_seven_zero_points() {
    let app = spawn_app_on(date("2024-01-10")).await;

    let points: Value = app
        .client
        .get(app.url("/sleep"))
        .send()
        .await
        .expect("GET /sleep")
        .json()
        .await
        .expect("json");

    let points = points.as_array().expect("array");
    assert_eq!(points.len(), 7);
    assert_eq!(points[0], json!({"day": "Thu", "full_date": "2024-01-04", "hours": 0}));
    assert_eq!(points[6], json!({"day": "Wed", "full_date": "2024-01-10", "hours": 0}));
}

#[tokio::test]
async fn posted_hours_land_on_today() {
    let app = spawn_app_on(date("2024-01-10")).await;

    let resp = app
        .client
        .post(app.url("/sleep"))
        .json(&json!({"hours": 7}))
        .send()
        .await
        .expect("POST /sleep");
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.expect("json");
    assert_eq!(body, json!({"message": "Sleep logged"}));

    let points: Value = app
        .client
        .get(app.url("/sleep"))
        .send()
        .await
        .expect("GET /sleep")
        .json()
        .await
        .expect("json");
    assert_eq!(points[6]["hours"], 7);
    assert_eq!(points[5]["hours"], 0);
}

#[tokio::test]
async fn second_post_overwrites_today() {
    let app = spawn_app_on(date("2024-01-10")).await;

    for hours in [5, 8] {
        app.client
            .post(app.url("/sleep"))
            .json(&json!({ "hours": hours }))
            .send()
            .await
            .expect("POST /sleep");
    }

    let hours: Vec<i64> = sqlx::query_scalar("SELECT hours FROM sleep_logs WHERE date = ?1")
        .bind("2024-01-10")
        .fetch_all(app.db.as_ref())
        .await
        .expect("select");
    assert_eq!(hours, vec![8]);
}

#[tokio::test]
async fn earlier_log_is_placed_in_window() {
    let app = spawn_app_on(date("2024-01-10")).await;
    SleepRepo::new(Arc::clone(&app.db))
        .log(date("2024-01-07"), 8)
        .await
        .expect("seed");

    let points: Value = app
        .client
        .get(app.url("/sleep"))
        .send()
        .await
        .expect("GET /sleep")
        .json()
        .await
        .expect("json");

    let points = points.as_array().expect("array");
    for point in points {
        let expected = if point["full_date"] == "2024-01-07" { 8 } else { 0 };
        assert_eq!(point["hours"], expected);
    }
}
