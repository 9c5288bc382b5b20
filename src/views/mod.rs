//! View responses.
//!
//! # Responsibilities
//! - Carry a logical view name plus an attribute model
//! - Serialize as JSON for the (external) rendering collaborator
//!
//! # Design Decisions
//! - Attribute map is ordered (BTreeMap) so output is deterministic
//! - Attributes accept anything serde_json can represent
//! - Absent-but-declared attributes bind JSON null

use std::collections::BTreeMap;

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// A logical view name and the attributes bound for it.
///
/// The service does not render templates; the response carries the view name
/// and its model verbatim, leaving rendering to an external collaborator.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct View {
    /// Logical view identifier, resolved externally.
    pub view: &'static str,

    /// Attributes bound for the view, key to value.
    pub model: BTreeMap<String, Value>,
}

impl View {
    /// A view with an empty model.
    pub fn new(view: &'static str) -> Self {
        Self {
            view,
            model: BTreeMap::new(),
        }
    }

    /// Bind one attribute. `None`-valued options bind JSON null.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.model.insert(key.to_string(), value.into());
        self
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
