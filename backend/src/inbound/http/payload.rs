//! Request body parsing shared by the user write handlers.
//!
//! Bodies are read as raw bytes so the adapter controls every rejection
//! message instead of deferring to the `web::Json` extractor defaults.

use actix_web::HttpRequest;
use actix_web::http::header;
use serde_json::{Map, Value};

use crate::domain::{Error, UserDraft};

/// Keys a create request must carry with a non-empty value.
const REQUIRED_ON_CREATE: [&str; 4] = ["username", "email", "first_name", "last_name"];

fn is_json_media_type(req: &HttpRequest) -> bool {
    let Some(raw) = req.headers().get(header::CONTENT_TYPE) else {
        return false;
    };
    let Ok(raw) = raw.to_str() else {
        return false;
    };
    let essence = raw
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Parse a JSON object body, rejecting the wrong media type, malformed
/// JSON, non-object documents and empty objects.
pub(crate) fn json_object(req: &HttpRequest, body: &[u8]) -> Result<Map<String, Value>, Error> {
    if !is_json_media_type(req) {
        return Err(Error::bad_request("Request must be in JSON format"));
    }
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::bad_request("Request body cannot be empty"));
    }
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| Error::bad_request("Request body must be valid JSON"))?;
    let Value::Object(object) = value else {
        return Err(Error::bad_request("Request body must be a JSON object"));
    };
    if object.is_empty() {
        return Err(Error::bad_request("Request body cannot be empty"));
    }
    Ok(object)
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}

/// Fail with every absent, `null` or `""` required create field, listed in
/// declaration order.
pub(crate) fn require_create_fields(object: &Map<String, Value>) -> Result<(), Error> {
    let missing: Vec<&str> = REQUIRED_ON_CREATE
        .into_iter()
        .filter(|key| is_blank(object.get(*key)))
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    Err(Error::bad_request(format!(
        "Missing required fields: {}",
        missing.join(", ")
    )))
}

/// Lift the known keys into a [`UserDraft`]; unknown keys are ignored.
pub(crate) fn into_draft(mut object: Map<String, Value>) -> UserDraft {
    UserDraft {
        username: object.remove("username"),
        email: object.remove("email"),
        first_name: object.remove("first_name"),
        last_name: object.remove("last_name"),
        age: object.remove("age"),
    }
}
