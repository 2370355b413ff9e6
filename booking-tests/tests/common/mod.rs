//! Common test utilities for the live booking API tests.
#![allow(dead_code)]

use booker_client::BookerClient;
use booking_tests::{session, BookingFixture, Session};

/// Per-test context: the shared session plus a client owned by this test.
pub struct TestContext {
    pub session: &'static Session,
    pub client: BookerClient,
}

impl TestContext {
    /// Session auth token. Panics if none could be obtained, failing the test immediately.
    pub async fn auth_token(&self) -> String {
        self.session
            .auth_token()
            .await
            .expect("Failed to create auth token")
            .to_string()
    }

    /// A booking created just for this test.
    pub async fn new_booking(&self) -> BookingFixture {
        self.session
            .new_booking(&self.client)
            .await
            .expect("Failed to create fixture booking")
    }
}

/// Main entry point for live tests.
pub fn setup() -> TestContext {
    let session = session().expect("Failed to initialise test session");

    TestContext {
        session,
        client: session.client(),
    }
}
