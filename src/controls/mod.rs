// src/controls/mod.rs
//
// UI Control Seam
//
// The host application owns the real selection widgets; this crate only
// needs to read and write the subtype control's visibility through this
// trait. Binding the trait to actual widgets is the host's concern.

use std::sync::Mutex;

use crate::domain::Visibility;

/// Visual state handle for the dependent subtype control.
///
/// Implementations mutate only visual state; no network activity, no
/// storage beyond the widget itself.
#[cfg_attr(test, mockall::automock)]
pub trait SubtypeControl: Send + Sync {
    /// Replace the control's visibility state.
    fn set_visibility(&self, visibility: Visibility);

    /// Current visibility state.
    fn visibility(&self) -> Visibility;
}

/// In-memory control state for hosts that track widget visibility
/// in-process and mirror it to the rendering layer themselves.
///
/// Starts hidden: the subtype select renders hidden until a type with
/// subtypes is picked.
pub struct SharedSubtypeControl {
    visibility: Mutex<Visibility>,
}

impl SharedSubtypeControl {
    pub fn new() -> Self {
        Self {
            visibility: Mutex::new(Visibility::Hidden),
        }
    }
}

impl Default for SharedSubtypeControl {
    fn default() -> Self {
        Self::new()
    }
}

impl SubtypeControl for SharedSubtypeControl {
    fn set_visibility(&self, visibility: Visibility) {
        *self.visibility.lock().unwrap() = visibility;
    }

    fn visibility(&self) -> Visibility {
        *self.visibility.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let control = SharedSubtypeControl::new();
        assert_eq!(control.visibility(), Visibility::Hidden);
    }

    #[test]
    fn test_set_and_read_back() {
        let control = SharedSubtypeControl::new();

        control.set_visibility(Visibility::Shown);
        assert_eq!(control.visibility(), Visibility::Shown);

        control.set_visibility(Visibility::Hidden);
        assert_eq!(control.visibility(), Visibility::Hidden);
    }
}
