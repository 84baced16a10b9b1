use availability_core::{
    models::availability::{AvailabilityResponse, ChangeSet, SubmitResult},
    store::AvailabilityStore,
    working_hours::WorkingHours,
};
use axum::http::StatusCode;
use chrono::Weekday;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};

use crate::test_utils::{slot, TestContext};

#[test_log::test(tokio::test)]
async fn test_get_availability_returns_baseline_in_order() {
    let ctx = TestContext::with_baseline([slot(7, 9), slot(6, 10)]);
    let server = ctx.server();

    let response = server.get(&ctx.availability_path()).await;

    response.assert_status_ok();
    let body: AvailabilityResponse = response.json();
    assert_eq!(body.professor_id, ctx.professor_id);
    assert_eq!(body.slots, vec![slot(6, 10), slot(7, 9)]);
}

#[tokio::test]
async fn test_get_availability_wire_format() {
    let ctx = TestContext::with_baseline([slot(6, 10)]);
    let server = ctx.server();

    let body: Value = server.get(&ctx.availability_path()).await.json();

    assert_eq!(body["slots"], json!(["2024-05-06T10:00:00"]));
}

#[tokio::test]
async fn test_get_availability_invalid_professor_id() {
    let server = TestContext::new().server();

    let response = server.get("/api/professors/not-a-uuid/availability").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn test_submit_change_set_applies_and_counts() {
    let ctx = TestContext::with_baseline([slot(6, 10), slot(6, 11)]);
    let server = ctx.server();

    let response = server
        .post(&ctx.availability_path())
        .json(&json!({
            // Minutes are truncated and the duplicate collapses.
            "add": ["2024-05-06T09:00:00", "2024-05-06T09:30:00", "2024-05-06T11:00:00"],
            "remove": ["2024-05-06T10:00:00"],
        }))
        .await;

    response.assert_status_ok();
    let result: SubmitResult = response.json();
    assert_eq!(result, SubmitResult { added: 1, removed: 1 });
    assert_eq!(
        ctx.store.fetch_baseline(ctx.professor_id).await.unwrap(),
        vec![slot(6, 9), slot(6, 11)]
    );
}

#[tokio::test]
async fn test_submit_change_set_twice_is_harmless() {
    let ctx = TestContext::new();
    let server = ctx.server();
    let change_set = ChangeSet {
        add: vec![slot(6, 9)],
        remove: vec![],
    };

    server.post(&ctx.availability_path()).json(&change_set).await.assert_status_ok();
    let second: SubmitResult = server.post(&ctx.availability_path()).json(&change_set).await.json();

    assert_eq!(second, SubmitResult::default());
}

#[rstest]
#[case("2024-05-06T07:00:00")]
#[case("2024-05-06T18:00:00")]
#[case("2024-05-11T10:00:00")]
#[tokio::test]
async fn test_submit_change_set_out_of_hours(#[case] start: &str) {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post(&ctx.availability_path())
        .json(&json!({ "add": [start] }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Out of working hours"));
    assert!(ctx.store.fetch_baseline(ctx.professor_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_change_set_overlap_is_rejected() {
    let ctx = TestContext::with_baseline([slot(6, 9)]);
    let server = ctx.server();

    let response = server
        .post(&ctx.availability_path())
        .json(&json!({
            "add": ["2024-05-06T09:00:00"],
            "remove": ["2024-05-06T09:00:00"],
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        ctx.store.fetch_baseline(ctx.professor_id).await.unwrap(),
        vec![slot(6, 9)]
    );
}

#[tokio::test]
async fn test_submit_change_set_malformed_body() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post(&ctx.availability_path())
        .json(&json!({ "add": ["next monday"] }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_working_hours() {
    let mut ctx = TestContext::new();
    ctx.working_hours = WorkingHours::new(9, 13, [Weekday::Sat, Weekday::Mon]).unwrap();
    let server = ctx.server();

    let response = server.get("/api/availability/working-hours").await;

    response.assert_status_ok();
    let hours: WorkingHours = response.json();
    assert_eq!(hours, ctx.working_hours);
    assert_eq!(hours.business_days(), &[Weekday::Mon, Weekday::Sat]);
}
