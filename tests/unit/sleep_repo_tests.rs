//! Unit tests for `SleepRepo` window reads and upsert-by-date writes.

use std::sync::Arc;

use chrono::NaiveDate;
use kronix::persistence::db::{self, Database};
use kronix::persistence::sleep_repo::SleepRepo;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

async fn repo() -> SleepRepo {
    repo_with_db().await.0
}

async fn repo_with_db() -> (SleepRepo, Arc<Database>) {
    let db = Arc::new(db::connect_memory().await.expect("db"));
    (SleepRepo::new(Arc::clone(&db)), db)
}

/// `(id, hours)` of every stored row for `day`.
async fn stored(db: &Database, day: NaiveDate) -> Vec<(i64, i64)> {
    sqlx::query_as("SELECT id, hours FROM sleep_logs WHERE date = ?1")
        .bind(day.format("%Y-%m-%d").to_string())
        .fetch_all(db)
        .await
        .expect("select")
}

#[tokio::test]
async fn empty_store_window_is_zero_filled() {
    let repo = repo().await;

    let points = repo.window(date("2024-01-10")).await.expect("window");

    assert_eq!(points.len(), 7);
    assert!(points.iter().all(|p| p.hours == 0));
    assert_eq!(points[0].full_date, date("2024-01-04"));
    assert_eq!(points[6].full_date, date("2024-01-10"));
    let labels: Vec<&str> = points.iter().map(|p| p.day.as_str()).collect();
    assert_eq!(labels, ["Thu", "Fri", "Sat", "Sun", "Mon", "Tue", "Wed"]);
}

#[tokio::test]
async fn logged_day_appears_in_window() {
    let repo = repo().await;
    repo.log(date("2024-01-07"), 8).await.expect("log");

    let points = repo.window(date("2024-01-10")).await.expect("window");

    for point in &points {
        let expected = if point.full_date == date("2024-01-07") { 8 } else { 0 };
        assert_eq!(point.hours, expected, "{}", point.full_date);
    }
}

#[tokio::test]
async fn records_outside_window_are_ignored() {
    let repo = repo().await;
    repo.log(date("2024-01-03"), 5).await.expect("before");
    repo.log(date("2024-01-12"), 9).await.expect("future");
    repo.log(date("2024-01-10"), 7).await.expect("today");

    let points = repo.window(date("2024-01-10")).await.expect("window");

    assert_eq!(points.len(), 7);
    assert_eq!(points[6].hours, 7);
    assert_eq!(points.iter().map(|p| p.hours).sum::<i64>(), 7);
}

#[tokio::test]
async fn second_log_for_same_date_replaces_hours() {
    let (repo, db) = repo_with_db().await;
    let day = date("2024-01-10");

    let first = repo.log(day, 6).await.expect("first");
    let second = repo.log(day, 9).await.expect("second");

    assert_eq!(first.id, second.id);
    assert_eq!(stored(&db, day).await, vec![(first.id, 9)]);
}

#[tokio::test]
async fn repeated_identical_log_is_idempotent() {
    let (repo, db) = repo_with_db().await;
    let day = date("2024-02-29");

    let first = repo.log(day, 7).await.expect("first");
    repo.log(day, 7).await.expect("second");

    assert_eq!(stored(&db, day).await, vec![(first.id, 7)]);
}

#[tokio::test]
async fn hours_are_stored_as_given() {
    let repo = repo().await;
    let day = date("2024-01-10");

    repo.log(day, -2).await.expect("negative");
    let points = repo.window(day).await.expect("window");
    assert_eq!(points[6].hours, -2);

    repo.log(day, 30).await.expect("over a day");
    let points = repo.window(day).await.expect("window");
    assert_eq!(points[6].hours, 30);
}
