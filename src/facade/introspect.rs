//! Best-effort description of error-like values.
//!
//! A value either carries a message ([`HasMessage`] or `std::error::Error`) or
//! is described structurally through its JSON form. Message text is passed
//! through [`sanitize`] before use.

use std::fmt::{self, Write};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::facade::convert::{json_text_to_map, to_json_text};
use crate::facade::Facade;

/// Substituted when the sanitizer cannot run.
pub const SANITIZE_FALLBACK: &str = "some thing went wrong while stringiFying error";

/// Key holding the sanitized message in an error object map.
pub const ERROR_MESSAGE_KEY: &str = "errorMessage";

/// Anything that can describe itself with a message.
pub trait HasMessage {
    fn message(&self) -> String;
}

/// An error-like value handed to `log_error_with_interface`.
#[derive(Clone, Copy)]
pub enum ErrorObject<'a> {
    /// No value at all.
    Absent,
    /// A value with its own message.
    Message(&'a dyn HasMessage),
    /// A standard error, described by its `Display` output.
    Error(&'a (dyn std::error::Error + 'a)),
    /// JSON text of an arbitrary serializable value.
    Structured(&'a str),
}

impl<'a> ErrorObject<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, ErrorObject::Absent)
    }
}

impl<'a, E: std::error::Error> From<&'a E> for ErrorObject<'a> {
    fn from(err: &'a E) -> Self {
        ErrorObject::Error(err)
    }
}

impl<'a, T> From<Option<T>> for ErrorObject<'a>
where
    T: Into<ErrorObject<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(ErrorObject::Absent, Into::into)
    }
}

/// Owned JSON text for [`ErrorObject::Structured`].
///
/// ```
/// use tfm_observability::facade::StructuredError;
///
/// let payload = StructuredError::new(&serde_json::json!({"code": 42}));
/// assert!(!payload.as_object().is_absent());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredError(String);

impl StructuredError {
    pub fn new<T: Serialize + ?Sized>(value: &T) -> Self {
        Self(to_json_text(value))
    }

    pub fn as_object(&self) -> ErrorObject<'_> {
        ErrorObject::Structured(&self.0)
    }
}

/// Failure while describing an error object.
#[derive(Debug, Error)]
pub enum IntrospectError {
    #[error("error message could not be formatted")]
    Format(#[from] fmt::Error),
}

/// Failure of the sanitizer itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SanitizeError {
    #[error("sanitize pattern failed to compile")]
    Pattern,
}

/// Runs of characters other than ASCII letters, digits and ASCII whitespace.
fn sanitize_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"[^a-zA-Z0-9\t\n\x0C\r ]+").ok())
        .as_ref()
}

/// Replace every maximal run of disallowed characters with one `-`.
pub fn try_sanitize(text: &str) -> Result<String, SanitizeError> {
    let pattern = sanitize_pattern().ok_or(SanitizeError::Pattern)?;
    Ok(pattern.replace_all(text, "-").into_owned())
}

/// [`try_sanitize`], falling back to [`SANITIZE_FALLBACK`].
pub fn sanitize(text: &str) -> String {
    try_sanitize(text).unwrap_or_else(|_| SANITIZE_FALLBACK.to_string())
}

/// Raw message of a message-bearing object, `None` for the structural variants.
pub fn extract_message(error: &ErrorObject<'_>) -> Result<Option<String>, IntrospectError> {
    match error {
        ErrorObject::Message(m) => Ok(Some(m.message())),
        ErrorObject::Error(e) => {
            let mut text = String::new();
            write!(text, "{}", e)?;
            Ok(Some(text))
        }
        ErrorObject::Absent | ErrorObject::Structured(_) => Ok(None),
    }
}

/// Map describing `error`: `{"errorMessage": <sanitized>}` when it carries a
/// message, its generic structural form otherwise. `None` for [`ErrorObject::Absent`].
///
/// Structural conversion failures are logged through `facade.log_error`.
pub fn error_object_map(
    error: &ErrorObject<'_>,
    facade: &dyn Facade,
) -> Result<Option<Map<String, Value>>, IntrospectError> {
    if let Some(message) = extract_message(error)? {
        let mut map = Map::new();
        map.insert(ERROR_MESSAGE_KEY.to_string(), Value::String(sanitize(&message)));
        return Ok(Some(map));
    }

    Ok(match error {
        ErrorObject::Structured(text) => Some(json_text_to_map(text, facade)),
        _ => None,
    })
}
