//! Decoding of API response bodies into results.

use crate::activity::ActivityCatalog;
use crate::ApiError;
use serde::Deserialize;
use serde_json::Value;

/// Body of a successful signup or unregister call.
///
/// Unregister may answer with an empty object, so the message is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageReply {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a rejected call.
///
/// `detail` is only taken when it is a plain string. Validation failures carry
/// a list of objects there, which is not something to show a user.
#[derive(Debug, Default, Deserialize)]
struct ErrorReply {
    #[serde(default)]
    detail: Option<Value>,
}

impl ErrorReply {
    fn into_detail(self) -> Option<String> {
        match self.detail {
            Some(Value::String(detail)) if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn rejection(status: u16, body: &[u8]) -> ApiError {
    let detail = serde_json::from_slice::<ErrorReply>(body)
        .unwrap_or_default()
        .into_detail();
    ApiError::Rejected { status, detail }
}

/// Turns the status and body of `GET /activities` into a catalog.
pub fn decode_catalog(status: u16, body: &[u8]) -> Result<ActivityCatalog, ApiError> {
    if !is_success(status) {
        return Err(rejection(status, body));
    }
    Ok(serde_json::from_slice(body)?)
}

/// Turns the status and body of a signup/unregister call into a reply.
///
/// An empty 2xx body is accepted as a reply without a message.
pub fn decode_mutation(status: u16, body: &[u8]) -> Result<MessageReply, ApiError> {
    if !is_success(status) {
        return Err(rejection(status, body));
    }
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(MessageReply::default());
    }
    Ok(serde_json::from_slice(body)?)
}
