//! Component model for inline markup fixtures

use crate::params::PageParameters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for invalid component IDs
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComponentIdError {
    #[error("component id cannot be empty")]
    Empty,

    #[error(
        "component id contains invalid characters (must be lowercase alphanumeric with underscores, cannot start/end with underscore)"
    )]
    InvalidChars,
}

/// Identifier binding a component to a markup placeholder (e.g. "label")
///
/// IDs must be lowercase alphanumeric with underscores and cannot start or
/// end with an underscore.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentId(String);

impl ComponentId {
    /// Create a new ComponentId, validating the identifier rules
    pub fn new(id: impl Into<String>) -> Result<Self, ComponentIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ComponentIdError::Empty);
        }
        if !Self::is_valid(&id) {
            return Err(ComponentIdError::InvalidChars);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(s: &str) -> bool {
        if s.starts_with('_') || s.ends_with('_') {
            return false;
        }
        s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    }
}

impl FromStr for ComponentId {
    type Err = ComponentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ComponentId {
    type Error = ComponentIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ComponentId> for String {
    fn from(id: ComponentId) -> String {
        id.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Context handed to a component while its host page renders
pub struct RenderContext<'a> {
    params: &'a PageParameters,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(params: &'a PageParameters) -> Self {
        Self { params }
    }

    /// The parameters the host page was started with
    pub fn params(&self) -> &PageParameters {
        self.params
    }

    /// Shorthand for a single parameter lookup
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.params.get(key)
    }
}

/// A renderable component bound to a placeholder in page markup
pub trait Component: Send + Sync {
    /// The id of the placeholder this component replaces
    fn id(&self) -> &ComponentId;

    /// Produce the markup that replaces the placeholder's body
    fn render(&self, ctx: &RenderContext<'_>) -> String;
}

/// The canonical component: renders a fixed text, HTML-escaped
#[derive(Debug, Clone)]
pub struct Label {
    id: ComponentId,
    text: String,
}

impl Label {
    /// Create a label bound to the given placeholder id
    pub fn new(id: &str, text: impl Into<String>) -> Result<Self, ComponentIdError> {
        Ok(Self {
            id: id.parse()?,
            text: text.into(),
        })
    }
}

impl Component for Label {
    fn id(&self) -> &ComponentId {
        &self.id
    }

    fn render(&self, _ctx: &RenderContext<'_>) -> String {
        escape_html(&self.text)
    }
}

/// Escape text for safe embedding in element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
