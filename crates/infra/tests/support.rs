//! Shared helpers for API integration tests

use std::io;
use std::sync::{Arc, Mutex, Once};

use ppe_infra::api::ApiClient;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const API_USER: &str = "api-admin@example.com";
pub const API_PASSWORD: &str = "s3cret";

static TRACING: Once = Once::new();

/// Route client logs to the test writer; set `RUST_LOG` to see them.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// In-memory log sink for asserting on emitted events.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Collect events on the current thread until the guard drops.
    pub fn install() -> (Self, tracing::subscriber::DefaultGuard) {
        let logs = Self::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        (logs, tracing::subscriber::set_default(subscriber))
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer poisoned")).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Mock server plus a client pointed at its `/api` root.
pub async fn mock_api() -> (MockServer, ApiClient) {
    init_tracing();
    let server = MockServer::start().await;
    let client = ApiClient::builder()
        .base_url(format!("{}/api", server.uri()))
        .credentials(API_USER, API_PASSWORD)
        .build()
        .expect("client should build against mock server");
    (server, client)
}

/// Organization resource as returned by `GET /orgs/{primary}`.
pub fn org_fixture() -> Value {
    serde_json::from_str(include_str!("fixtures/organization.json"))
        .expect("organization fixture should be valid JSON")
}

pub fn domain_json(name: &str, is_relay: i64, is_active: i64) -> Value {
    json!({
        "domain_name": name,
        "destination": format!("mx.{name}"),
        "failover": format!("backup.{name}"),
        "is_relay": is_relay,
        "is_active": is_active
    })
}

pub fn user_json(email: &str, isactive: i64) -> Value {
    json!({
        "firstname": "Jane",
        "surname": "Doe",
        "primary_email": email,
        "alias_emails": ["jd@example.com", "jane.doe@example.com"],
        "white_list_senders": ["partner@trusted.com"],
        "black_list_senders": ["spam@bad.example"],
        "isactive": isactive,
        "type": "end_user"
    })
}

/// Create response carrying two failures, shared by the create tests.
pub fn two_failures() -> Value {
    json!({
        "created": 0,
        "fail_results": [
            { "code": 409, "message": "Already exists" },
            { "code": 400, "message": "Invalid destination" }
        ]
    })
}
