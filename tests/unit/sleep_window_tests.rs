//! Unit tests for the seven-day sleep window.

use chrono::NaiveDate;
use kronix::models::sleep::SleepLog;
use kronix::tracker::sleep_window::{fill_window, window_start, WINDOW_DAYS};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

fn log(day: &str, hours: i64) -> SleepLog {
    SleepLog {
        id: 1,
        date: date(day),
        hours,
    }
}

#[test]
fn window_start_is_six_days_back() {
    assert_eq!(window_start(date("2024-01-10")), date("2024-01-04"));
    assert_eq!(window_start(date("2024-03-01")), date("2024-02-24"));
}

#[test]
fn always_seven_ascending_points() {
    let full: Vec<SleepLog> = (4..=10)
        .map(|d| log(&format!("2024-01-{d:02}"), d))
        .collect();
    let inputs: [&[SleepLog]; 3] = [&[], &full[2..3], &full];

    for logs in inputs {
        let points = fill_window(date("2024-01-10"), logs);
        assert_eq!(points.len(), WINDOW_DAYS);
        for (offset, point) in points.iter().enumerate() {
            let expected = date("2024-01-04") + chrono::Duration::days(i64::try_from(offset).unwrap());
            assert_eq!(point.full_date, expected);
        }
    }
}

#[test]
fn full_week_maps_every_record() {
    let full: Vec<SleepLog> = (4..=10)
        .map(|d| log(&format!("2024-01-{d:02}"), d))
        .collect();
    let points = fill_window(date("2024-01-10"), &full);
    let hours: Vec<i64> = points.iter().map(|p| p.hours).collect();
    assert_eq!(hours, vec![4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn single_log_scenario() {
    let points = fill_window(date("2024-01-10"), &[log("2024-01-07", 8)]);
    for point in &points {
        if point.full_date == date("2024-01-07") {
            assert_eq!(point.hours, 8);
            assert_eq!(point.day, "Sun");
        } else {
            assert_eq!(point.hours, 0);
        }
    }
}

#[test]
fn serialized_point_matches_wire_shape() {
    let points = fill_window(date("2024-01-10"), &[]);
    let json = serde_json::to_value(&points[0]).expect("json");
    assert_eq!(
        json,
        serde_json::json!({"day": "Thu", "full_date": "2024-01-04", "hours": 0})
    );
}
