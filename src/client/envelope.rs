//! Decoding of the backend's `detail` error envelope
//!
//! Error bodies come in three shapes:
//! - `{ "detail": [ { "loc": [...], "msg": "..." } ] }` for 422 validation failures
//! - `{ "detail": "message" }` (or any other JSON value under `detail`)
//! - anything else, including non-JSON bodies

use serde_json::Value;

use crate::error::{ApiError, FieldError};

const UNPROCESSABLE_ENTITY: u16 = 422;

/// Turn a non-2xx, non-auth response into an [`ApiError`].
///
/// The shapes are tried in order; whatever does not match falls through to
/// [`ApiError::Http`] with the bare status code.
pub fn decode_error(status: u16, body: &str) -> ApiError {
    let Ok(root) = serde_json::from_str::<Value>(body) else {
        return ApiError::Http(status);
    };

    match root.get("detail") {
        None | Some(Value::Null) => ApiError::Http(status),
        Some(Value::String(message)) if message.trim().is_empty() => ApiError::Http(status),
        Some(Value::String(message)) => ApiError::Detail {
            status,
            detail: message.clone(),
        },
        Some(list @ Value::Array(_)) if status == UNPROCESSABLE_ENTITY => {
            match serde_json::from_value::<Vec<FieldError>>(list.clone()) {
                Ok(fields) if !fields.is_empty() => ApiError::Validation(fields),
                _ => ApiError::Detail {
                    status,
                    detail: list.to_string(),
                },
            }
        }
        Some(other) => ApiError::Detail {
            status,
            detail: other.to_string(),
        },
    }
}
