//! Structured recovery of model output.
//!
//! Every use case that expects JSON goes through [`recover`]: fence-strip, parse,
//! hand the object to the type's own validator/default-filler, and fall back to the
//! type's degraded shape when any of that fails. Model output is never trusted to be
//! well formed, so recovery is infallible by construction.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::llm_client::output::parse_fenced_json;

/// A field in a parsed object could not be coerced into the expected type.
#[derive(Debug, Error, PartialEq)]
pub enum CoercionError {
    #[error("field `{field}` has an unexpected shape: {found}")]
    UnexpectedShape { field: &'static str, found: String },

    #[error("field `{field}` is not a finite number: {found}")]
    NotFinite { field: &'static str, found: String },
}

/// A typed result recoverable from free-form model text.
pub trait StructuredReply: Sized {
    /// Short name used in log lines.
    const KIND: &'static str;

    /// Validates the parsed object and fills in per-field defaults.
    fn from_object(object: Map<String, Value>) -> Result<Self, CoercionError>;

    /// The degraded value used when parsing or coercion fails. `raw` is the model text.
    fn fallback(raw: &str) -> Self;
}

/// Recovers a `T` from model text. Never fails.
pub fn recover<T: StructuredReply>(raw: &str) -> T {
    let object = match parse_fenced_json(raw) {
        Ok(object) => object,
        Err(e) => {
            warn!(
                "{} reply was not a JSON object ({e}); using fallback",
                T::KIND
            );
            return T::fallback(raw);
        }
    };

    T::from_object(object).unwrap_or_else(|e| {
        warn!("{} reply failed coercion ({e}); using fallback", T::KIND);
        T::fallback(raw)
    })
}

/// Short description of a JSON value for error messages.
pub(crate) fn describe(value: &Value) -> String {
    let rendered = value.to_string();
    if rendered.chars().count() > 40 {
        format!("{}...", rendered.chars().take(40).collect::<String>())
    } else {
        rendered
    }
}
