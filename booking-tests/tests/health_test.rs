//! Health check tests: the API is up and responsive.

mod common;

use serial_test::serial;
use std::time::Duration;

#[tokio::test]
#[serial]
#[ignore = "Requires network access to the booking API"]
async fn api_is_running() {
    let ctx = common::setup();

    let response = ctx.client.health_check().await.expect("Ping failed");

    assert_eq!(
        response.status_code(),
        201,
        "Expected status 201, got {}",
        response.status_code()
    );
}

#[tokio::test]
#[serial]
#[ignore = "Requires network access to the booking API"]
async fn health_check_responds_within_two_seconds() {
    let ctx = common::setup();

    let response = ctx.client.health_check().await.expect("Ping failed");

    assert!(
        response.elapsed() < Duration::from_secs(2),
        "Response time too slow: {:?} (expected < 2s)",
        response.elapsed()
    );
}

#[tokio::test]
#[serial]
#[ignore = "Requires network access to the booking API"]
async fn health_check_body_says_created() {
    let ctx = common::setup();

    let response = ctx.client.health_check().await.expect("Ping failed");

    assert!(
        response.text().contains("Created"),
        "Expected 'Created' in response, got: {}",
        response.text()
    );
}
