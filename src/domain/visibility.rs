use serde::{Deserialize, Serialize};

/// Binary visual state of the subtype control.
///
/// Derived afresh from the selected resource type on every change event;
/// never cached, never patched incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    pub fn is_shown(&self) -> bool {
        matches!(self, Visibility::Shown)
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Visibility::Hidden)
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Shown => write!(f, "shown"),
            Visibility::Hidden => write!(f, "hidden"),
        }
    }
}
