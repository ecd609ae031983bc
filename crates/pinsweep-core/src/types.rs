//! Core types shared across Pinsweep crates

use serde::{Deserialize, Serialize};
use std::fmt;

/// One place to check: a postal code plus its display names.
///
/// The postal code is the unique key within a run; the city and region are
/// carried only for progress display. Wire field names match the page-agent
/// protocol (`pincode`/`state`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "pincode")]
    pub postal_code: String,
    pub city: String,
    #[serde(rename = "state")]
    pub region: String,
}

impl Location {
    pub fn new(
        postal_code: impl Into<String>,
        city: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            postal_code: postal_code.into(),
            city: city.into(),
            region: region.into(),
        }
    }

    /// All three fields are present and non-empty
    pub fn is_complete(&self) -> bool {
        !self.postal_code.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.region.trim().is_empty()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.city, self.postal_code)
    }
}

/// Final classification of one checked location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    /// Delivery is offered for the postal code
    Available,
    /// Out of stock, sold out, or no recognizable availability signal
    Unavailable,
    /// The check itself failed or produced an unreadable status
    Error,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Unavailable => write!(f, "unavailable"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A completed check: the location plus its classified outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationResult {
    #[serde(flatten)]
    pub location: Location,
    pub outcome: OutcomeKind,
    /// Human-readable detail, defaults to the raw observed text
    pub message: String,
}

impl LocationResult {
    pub fn new(location: Location, outcome: OutcomeKind, message: impl Into<String>) -> Self {
        Self {
            location,
            outcome,
            message: message.into(),
        }
    }
}

/// Opaque reference to a bound target surface (page/tab).
///
/// Handles are re-derived by surface validation before every step and must
/// never be cached across steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceHandle {
    /// Host-assigned tab identifier
    pub tab_id: String,
    /// URL observed at validation time
    pub url: String,
}

impl SurfaceHandle {
    pub fn new(tab_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            tab_id: tab_id.into(),
            url: url.into(),
        }
    }
}

/// Raw response from the in-page agent for one postal code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResponse {
    #[serde(rename = "pincode")]
    pub postal_code: String,
    #[serde(default)]
    pub status: String,
}

/// Request to start a sweep over a list of locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartRequest {
    pub locations: Vec<Location>,
    /// At most one user-entered extra location, validated independently
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_custom: Option<Location>,
}

impl StartRequest {
    pub fn new(locations: Vec<Location>) -> Self {
        Self {
            locations,
            optional_custom: None,
        }
    }

    pub fn with_custom(mut self, custom: Location) -> Self {
        self.optional_custom = Some(custom);
        self
    }
}

/// Synchronous acknowledgement returned by `start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartAck {
    pub status: String,
}

impl StartAck {
    /// The run was created and the step loop is in flight
    pub fn initiated() -> Self {
        Self {
            status: "Check initiated...".to_string(),
        }
    }

    pub fn message(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }

    pub fn error(detail: impl fmt::Display) -> Self {
        Self {
            status: format!("Error: {}", detail),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status.starts_with("Error:")
    }
}
