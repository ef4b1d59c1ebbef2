//! Configuration round-trip integration tests

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;
use url::Url;

use retroclock_companion::application::ports::{AppMessenger, MessageError, SettingsStore};
use retroclock_companion::application::{ClosureOutcome, ConfigurationBridge, IgnoreReason};
use retroclock_companion::domain::config::DEFAULT_BASE_URL;
use retroclock_companion::domain::error::PayloadError;
use retroclock_companion::domain::settings::{ConfigurationPayload, DateFormat};
use retroclock_companion::domain::SessionState;
use retroclock_companion::infrastructure::{FileSettingsStore, InMemorySettingsStore, NoOpSurface};

/// Messenger that records every message it is handed
#[derive(Default)]
struct RecordingMessenger {
    sent: Mutex<Vec<ConfigurationPayload>>,
}

impl RecordingMessenger {
    fn sent(&self) -> Vec<ConfigurationPayload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl AppMessenger for RecordingMessenger {
    async fn send_app_message(&self, message: &ConfigurationPayload) -> Result<(), MessageError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

type TestBridge<S> = ConfigurationBridge<S, NoOpSurface, RecordingMessenger>;

fn bridge_with<S: SettingsStore>(store: S) -> TestBridge<S> {
    ConfigurationBridge::new(
        store,
        NoOpSurface::new(),
        RecordingMessenger::default(),
        Url::parse(DEFAULT_BASE_URL).unwrap(),
    )
}

#[tokio::test]
async fn fresh_install_opens_with_default_dateformat() {
    let bridge = bridge_with(InMemorySettingsStore::new());

    let url = bridge.on_configuration_requested().await;

    assert_eq!(
        url.as_str(),
        "http://data.lingen.me/pebble/retroclock/config-2.0.html?dateformat=0"
    );
}

#[tokio::test]
async fn closure_round_trips_into_next_request() {
    let bridge = bridge_with(InMemorySettingsStore::new());

    for code in [0, 1, 2, 7] {
        bridge.on_configuration_requested().await;
        let response = format!(r#"{{"0": {}}}"#, code);
        let outcome = bridge.on_configuration_closed(Some(&response)).await;
        assert!(outcome.is_applied());

        let url = bridge.on_configuration_requested().await;
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("dateformat".to_string(), code.to_string())]);
    }
}

#[tokio::test]
async fn whole_float_dateformat_round_trips() {
    let bridge = bridge_with(InMemorySettingsStore::new());

    let outcome = bridge.on_configuration_closed(Some(r#"{"0": 2.0}"#)).await;
    assert_eq!(
        outcome,
        ClosureOutcome::Applied {
            dateformat: Some(DateFormat::new(2)),
            persisted: true,
            forwarded: true,
        }
    );
    assert_eq!(bridge.store().raw(), Some(r#"{"0": 2.0}"#.to_string()));

    let url = bridge.on_configuration_requested().await;
    assert_eq!(url.query(), Some("dateformat=2"));
}

#[tokio::test]
async fn valid_payload_is_persisted_verbatim_and_forwarded() {
    let bridge = bridge_with(InMemorySettingsStore::new());

    let outcome = bridge.on_configuration_closed(Some(r#"{"0": 2}"#)).await;

    assert_eq!(
        outcome,
        ClosureOutcome::Applied {
            dateformat: Some(DateFormat::new(2)),
            persisted: true,
            forwarded: true,
        }
    );

    let record = bridge.store().load().await.unwrap();
    assert_eq!(record.as_str(), r#"{"0": 2}"#);
    assert_eq!(record.dateformat(), Some(DateFormat::new(2)));

    let sent = bridge_sent(&bridge);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].as_map().get("0"), Some(&json!(2)));
    assert_eq!(sent[0].len(), 1);
}

#[tokio::test]
async fn sentinels_and_malformed_responses_change_nothing() {
    let bridge = bridge_with(InMemorySettingsStore::with_raw(r#"{"0": 3}"#));

    let cases = [
        (None, IgnoreReason::Empty),
        (Some(""), IgnoreReason::Empty),
        (Some("CANCELLED"), IgnoreReason::Cancelled),
        (Some("{}"), IgnoreReason::Unchanged),
    ];
    for (response, reason) in cases {
        bridge.on_configuration_requested().await;
        let outcome = bridge.on_configuration_closed(response).await;
        assert_eq!(outcome, ClosureOutcome::Ignored(reason));
    }

    let outcome = bridge.on_configuration_closed(Some("not-json{")).await;
    assert!(matches!(
        outcome,
        ClosureOutcome::Ignored(IgnoreReason::Malformed(PayloadError::NotJson(_)))
    ));

    for response in ["42", "[1]", "null", r#""text""#, "true"] {
        let outcome = bridge.on_configuration_closed(Some(response)).await;
        assert!(
            matches!(
                outcome,
                ClosureOutcome::Ignored(IgnoreReason::Malformed(PayloadError::NotAnObject(_)))
            ),
            "{} should be rejected as not an object, got {:?}",
            response,
            outcome
        );
    }

    assert_eq!(bridge.store().raw(), Some(r#"{"0": 3}"#.to_string()));
    assert!(bridge_sent(&bridge).is_empty());
    assert_eq!(bridge.session_state(), SessionState::Idle);
}

#[tokio::test]
async fn repeated_requests_yield_the_same_url() {
    let bridge = bridge_with(InMemorySettingsStore::with_raw(r#"{"0": 5}"#));

    let first = bridge.on_configuration_requested().await;
    let second = bridge.on_configuration_requested().await;

    assert_eq!(first, second);
    assert_eq!(bridge.session_state(), SessionState::AwaitingClosure);
}

#[tokio::test]
async fn file_store_survives_a_new_bridge() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let first = bridge_with(FileSettingsStore::with_path(&path));
    first.on_configuration_closed(Some(r#"{"0":4}"#)).await;

    // A new process sees the stored settings
    let second = bridge_with(FileSettingsStore::with_path(&path));
    let url = second.on_configuration_requested().await;
    assert_eq!(url.query(), Some("dateformat=4"));
}

#[tokio::test]
async fn corrupt_storage_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, r#"{"settings": "{\"0\": "}"#).unwrap();

    let bridge = bridge_with(FileSettingsStore::with_path(&path));
    let url = bridge.on_configuration_requested().await;

    assert_eq!(url.query(), Some("dateformat=0"));
}

fn bridge_sent<S: SettingsStore>(bridge: &TestBridge<S>) -> Vec<ConfigurationPayload> {
    bridge.messenger().sent()
}
