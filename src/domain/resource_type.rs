use std::fmt;

use crate::domain::Visibility;

/// The primary classification selected by the user.
///
/// Two reserved tokens carry no subtypes and are matched exactly; every other
/// value, including the empty string and tokens outside any known vocabulary,
/// is kept verbatim in the fallback variant. No case folding, no trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceType {
    /// "obs" - no subtypes
    Obs,
    /// "tw" - no subtypes
    Tw,
    /// Any other raw token, preserved as-is
    Other(String),
}

impl ResourceType {
    /// Classify the raw value currently held by the type control.
    /// This is the only way a raw control value enters the domain.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "obs" => ResourceType::Obs,
            "tw" => ResourceType::Tw,
            other => ResourceType::Other(other.to_string()),
        }
    }

    /// The original token, unchanged. Used verbatim as the `q` query
    /// parameter of the subtype fetch.
    pub fn as_str(&self) -> &str {
        match self {
            ResourceType::Obs => "obs",
            ResourceType::Tw => "tw",
            ResourceType::Other(raw) => raw,
        }
    }

    /// Whether the subtype control is shown or hidden for this type.
    ///
    /// Pure function of the current value; recomputed on every change event.
    pub fn subtype_visibility(&self) -> Visibility {
        match self {
            ResourceType::Obs | ResourceType::Tw => Visibility::Hidden,
            ResourceType::Other(_) => Visibility::Shown,
        }
    }
}

impl From<&str> for ResourceType {
    fn from(raw: &str) -> Self {
        ResourceType::from_raw(raw)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
