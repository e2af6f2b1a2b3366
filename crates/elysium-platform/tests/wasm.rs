//! WASM-target tests for elysium-platform (Node.js runtime).
//!
//! Tests MemoryStorage, InMemoryIdentity, the Identity Toolkit error
//! mapping, FirebaseIdentity session restore and GlooTimers under
//! wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! localStorage and live Identity Toolkit calls need a browser and are
//! not covered here.

use wasm_bindgen_test::*;

use elysium_core::ports::{IdentityPort, StoragePort, TimerPort};
use elysium_platform::identity::errors::{describe_error, parse_error_body, rejection};
use elysium_platform::identity::firebase::SESSION_STORAGE_KEY;
use elysium_platform::storage::MemoryStorage;
use elysium_platform::{FirebaseIdentity, GlooTimers, InMemoryIdentity};
use elysium_types::config::IdentityConfig;
use elysium_types::session::Session;
use elysium_types::AppError;
use gloo_timers::future::TimeoutFuture;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// ─── MemoryStorage Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn memory_storage_backend_name() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.backend_name(), "memory");
}

#[wasm_bindgen_test]
async fn memory_storage_set_get_delete() {
    let storage = MemoryStorage::new();
    assert!(storage.get("key").await.unwrap().is_none());

    storage.set("key", b"v1").await.unwrap();
    storage.set("key", b"v2").await.unwrap();
    assert_eq!(storage.get("key").await.unwrap(), Some(b"v2".to_vec()));
    assert!(storage.exists("key").await.unwrap());

    storage.delete("key").await.unwrap();
    assert!(!storage.exists("key").await.unwrap());
}

// ─── Error mapping Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn describe_known_codes() {
    assert_eq!(
        describe_error("EMAIL_EXISTS"),
        "Firebase: Error (auth/email-already-in-use)."
    );
    assert_eq!(
        describe_error("INVALID_LOGIN_CREDENTIALS"),
        "Firebase: Error (auth/invalid-credential)."
    );
}

#[wasm_bindgen_test]
fn describe_code_with_detail() {
    assert_eq!(
        describe_error("WEAK_PASSWORD : Password should be at least 6 characters"),
        "Firebase: Password should be at least 6 characters (auth/weak-password)."
    );
}

#[wasm_bindgen_test]
fn describe_unknown_code_is_slugged() {
    assert_eq!(
        describe_error("SOMETHING_ODD"),
        "Firebase: Error (auth/something-odd)."
    );
}

#[wasm_bindgen_test]
fn parse_error_envelope() {
    let body = r#"{"error":{"code":400,"message":"EMAIL_NOT_FOUND","errors":[]}}"#;
    assert_eq!(parse_error_body(body).as_deref(), Some("EMAIL_NOT_FOUND"));
    assert!(parse_error_body("<html>").is_none());
}

#[wasm_bindgen_test]
fn rejection_maps_envelope_to_provider_error() {
    let body = r#"{"error":{"code":400,"message":"INVALID_LOGIN_CREDENTIALS","errors":[]}}"#;
    assert_eq!(
        rejection(400, body),
        AppError::AuthProvider("Firebase: Error (auth/invalid-credential).".to_string())
    );
}

#[wasm_bindgen_test]
fn rejection_without_envelope_uses_status() {
    assert_eq!(
        rejection(503, "Service Unavailable"),
        AppError::AuthProvider("Firebase: Error (auth/http-503).".to_string())
    );
}

// ─── InMemoryIdentity Tests ──────────────────────────────

fn watch(identity: &InMemoryIdentity) -> (Rc<RefCell<Vec<Option<Session>>>>, elysium_core::Subscription) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let sub = identity.on_session_change(Box::new(move |s| sink.borrow_mut().push(s)));
    (seen, sub)
}

#[wasm_bindgen_test]
async fn in_memory_signup_then_login() {
    let identity = InMemoryIdentity::new();
    let (seen, _sub) = watch(&identity);
    assert_eq!(*seen.borrow(), vec![None]);

    let created = identity.create_account("Ada@Example.com", "secret1").await.unwrap();
    assert_eq!(created.email, "ada@example.com");
    assert_eq!(identity.account_count(), 1);

    identity.sign_out().await.unwrap();
    let again = identity.sign_in_with_password("ada@example.com", "secret1").await.unwrap();
    assert_eq!(again.uid, created.uid);

    let pushes = seen.borrow();
    assert_eq!(pushes.len(), 4);
    assert!(pushes[2].is_none());
    assert_eq!(pushes[3].as_ref().unwrap().uid, created.uid);
}

#[wasm_bindgen_test]
async fn in_memory_rejects_bad_credentials() {
    let identity = InMemoryIdentity::new();
    identity.create_account("a@b.com", "secret1").await.unwrap();

    let err = identity.sign_in_with_password("a@b.com", "nope").await.unwrap_err();
    assert_eq!(
        err,
        AppError::AuthProvider("Firebase: Error (auth/invalid-credential).".to_string())
    );
}

#[wasm_bindgen_test]
async fn in_memory_rejects_duplicate_and_weak() {
    let identity = InMemoryIdentity::new();
    identity.create_account("a@b.com", "secret1").await.unwrap();

    let dup = identity.create_account("a@b.com", "secret2").await.unwrap_err();
    assert!(dup.to_string().contains("auth/email-already-in-use"));

    let weak = identity.create_account("c@d.com", "123").await.unwrap_err();
    assert!(weak.to_string().contains("auth/weak-password"));

    let bad = identity.create_account("not-an-email", "secret1").await.unwrap_err();
    assert!(bad.to_string().contains("auth/invalid-email"));
}

// ─── FirebaseIdentity Tests ──────────────────────────────

#[wasm_bindgen_test]
fn firebase_requires_api_key() {
    let storage = Rc::new(MemoryStorage::new());
    let result = FirebaseIdentity::new(IdentityConfig::firebase(""), storage);
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[wasm_bindgen_test]
async fn firebase_restores_persisted_session() {
    let storage = Rc::new(MemoryStorage::new());
    let stored = serde_json::json!({ "uid": "u-42", "email": "kept@example.com" });
    storage
        .set(SESSION_STORAGE_KEY, stored.to_string().as_bytes())
        .await
        .unwrap();

    let identity = FirebaseIdentity::new(IdentityConfig::firebase("key"), storage).unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let _sub = identity.on_session_change(Box::new(move |s| sink.borrow_mut().push(s)));

    let restored = identity.restore().await.unwrap();
    assert_eq!(restored.unwrap().uid, "u-42");

    // Push is delivered on a later task
    TimeoutFuture::new(0).await;
    let pushes = seen.borrow();
    assert_eq!(pushes.len(), 2);
    assert_eq!(pushes[1].as_ref().unwrap().email, "kept@example.com");
}

#[wasm_bindgen_test]
async fn firebase_discards_corrupt_session() {
    let storage = Rc::new(MemoryStorage::new());
    storage.set(SESSION_STORAGE_KEY, b"{not json").await.unwrap();

    let identity = FirebaseIdentity::new(IdentityConfig::firebase("key"), storage.clone()).unwrap();
    assert!(identity.restore().await.unwrap().is_none());
    assert!(!storage.exists(SESSION_STORAGE_KEY).await.unwrap());
}

#[wasm_bindgen_test]
async fn firebase_sign_in_persists_session() {
    let storage = Rc::new(MemoryStorage::new());
    let identity = FirebaseIdentity::new(IdentityConfig::firebase("key"), storage.clone()).unwrap();
    let body = r#"{
        "kind": "identitytoolkit#VerifyPasswordResponse",
        "localId": "u-7",
        "email": "new@example.com",
        "idToken": "tok",
        "refreshToken": "ref",
        "expiresIn": "3600"
    }"#;

    let session = identity.complete_sign_in(body).await.unwrap();
    assert_eq!(session.uid, "u-7");

    let bytes = storage.get(SESSION_STORAGE_KEY).await.unwrap().unwrap();
    let stored: Session = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(stored, session);

    // A fresh adapter over the same storage picks it up
    let reloaded = FirebaseIdentity::new(IdentityConfig::firebase("key"), storage).unwrap();
    assert_eq!(reloaded.restore().await.unwrap(), Some(session));
}

#[wasm_bindgen_test]
async fn firebase_sign_in_rejects_malformed_body() {
    let storage = Rc::new(MemoryStorage::new());
    let identity = FirebaseIdentity::new(IdentityConfig::firebase("key"), storage.clone()).unwrap();

    let err = identity.complete_sign_in("{}").await.unwrap_err();
    assert!(matches!(err, AppError::Serialization(_)));
    assert!(!storage.exists(SESSION_STORAGE_KEY).await.unwrap());
}

#[wasm_bindgen_test]
async fn firebase_sign_out_clears_session() {
    let storage = Rc::new(MemoryStorage::new());
    let stored = serde_json::json!({ "uid": "u-9", "email": "gone@example.com" });
    storage
        .set(SESSION_STORAGE_KEY, stored.to_string().as_bytes())
        .await
        .unwrap();

    let identity = FirebaseIdentity::new(IdentityConfig::firebase("key"), storage.clone()).unwrap();
    assert!(identity.restore().await.unwrap().is_some());

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let _sub = identity.on_session_change(Box::new(move |s| sink.borrow_mut().push(s)));

    identity.sign_out().await.unwrap();
    assert!(!storage.exists(SESSION_STORAGE_KEY).await.unwrap());

    TimeoutFuture::new(0).await;
    assert_eq!(seen.borrow().last(), Some(&None));
    assert!(identity.restore().await.unwrap().is_none());
}

// ─── GlooTimers Tests ────────────────────────────────────

#[wasm_bindgen_test]
async fn gloo_timer_fires_once() {
    let timers = GlooTimers::new();
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    timers.schedule(5, Box::new(move || counter.set(counter.get() + 1)));
    assert_eq!(timers.pending_count(), 1);

    TimeoutFuture::new(30).await;
    assert_eq!(hits.get(), 1);
    assert_eq!(timers.pending_count(), 0);
}

#[wasm_bindgen_test]
async fn gloo_timer_cancel() {
    let timers = GlooTimers::new();
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    let handle = timers.schedule(5, Box::new(move || counter.set(counter.get() + 1)));
    timers.cancel(handle);

    TimeoutFuture::new(30).await;
    assert_eq!(hits.get(), 0);
    assert_eq!(timers.pending_count(), 0);
}
