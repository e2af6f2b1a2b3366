//! Identity Toolkit error codes → user-facing messages.
//!
//! The REST API answers failures with
//! `{"error": {"message": "EMAIL_EXISTS"}}`, sometimes with a detail
//! suffix (`"WEAK_PASSWORD : Password should be at least 6 characters"`).
//! Messages follow the Firebase web SDK wording so users see the same
//! text they would in any Firebase app.

use serde::Deserialize;

use elysium_types::AppError;

pub const EMAIL_EXISTS: &str = "EMAIL_EXISTS";
pub const INVALID_LOGIN_CREDENTIALS: &str = "INVALID_LOGIN_CREDENTIALS";
pub const INVALID_EMAIL: &str = "INVALID_EMAIL";
pub const WEAK_PASSWORD: &str = "WEAK_PASSWORD";
pub const NETWORK_REQUEST_FAILED: &str = "NETWORK_REQUEST_FAILED";

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pull the raw error message out of an error response body.
pub fn parse_error_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
}

/// Map a raw provider message to the text shown in the auth modal.
pub fn describe_error(raw: &str) -> String {
    let (code, detail) = match raw.split_once(" : ") {
        Some((code, detail)) => (code.trim(), Some(detail.trim())),
        None => (raw.trim(), None),
    };

    let slug = match code {
        "EMAIL_EXISTS" => "email-already-in-use".to_string(),
        "EMAIL_NOT_FOUND" => "user-not-found".to_string(),
        "INVALID_PASSWORD" => "wrong-password".to_string(),
        "INVALID_LOGIN_CREDENTIALS" => "invalid-credential".to_string(),
        "USER_DISABLED" => "user-disabled".to_string(),
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "too-many-requests".to_string(),
        "OPERATION_NOT_ALLOWED" => "operation-not-allowed".to_string(),
        "INVALID_EMAIL" => "invalid-email".to_string(),
        "MISSING_PASSWORD" => "missing-password".to_string(),
        "WEAK_PASSWORD" => "weak-password".to_string(),
        "API_KEY_INVALID" | "INVALID_API_KEY" => "invalid-api-key".to_string(),
        other => other.to_lowercase().replace('_', "-"),
    };

    match detail {
        Some(detail) if !detail.is_empty() => format!("Firebase: {} (auth/{}).", detail, slug),
        _ => format!("Firebase: Error (auth/{}).", slug),
    }
}

/// Turn a non-OK response into the error the auth modal shows. Bodies
/// without the JSON envelope fall back to the HTTP status.
pub fn rejection(status: u16, body: &str) -> AppError {
    let code = parse_error_body(body).unwrap_or_else(|| format!("HTTP_{}", status));
    AppError::AuthProvider(describe_error(&code))
}
