use serde::{Deserialize, Serialize};

/// A single subtype choice as the endpoint describes it: a short
/// identification code plus a descriptive name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtypeOption {
    pub short_name: String,
    pub long_name: String,
}

/// Raw payload returned by the subtype endpoint.
///
/// The schema is owned by the endpoint; this core treats it as opaque and
/// hands it on verbatim. `options()` is a convenience view for hosts that
/// recognize the list shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtypePayload(serde_json::Value);

impl SubtypePayload {
    pub fn new(value: serde_json::Value) -> Self {
        SubtypePayload(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }

    /// Decode the payload as a list of subtype options.
    ///
    /// Tolerant: a payload with any other shape yields `None` rather than an
    /// error, since the schema is not this core's to enforce.
    pub fn options(&self) -> Option<Vec<SubtypeOption>> {
        serde_json::from_value(self.0.clone()).ok()
    }
}

impl std::fmt::Display for SubtypePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
