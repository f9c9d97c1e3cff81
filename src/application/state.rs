// src/application/state.rs

use std::sync::Arc;

use crate::controls::SubtypeControl;
use crate::domain::Visibility;
use crate::error::AppResult;
use crate::events::EventBus;
use crate::integrations::{FetcherConfig, HttpSubtypeFetcher};
use crate::services::ResourceFormService;

/// Handles shared with the host for the lifetime of the form.
/// All fields are Arc-wrapped for thread-safe sharing.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub form_service: Arc<ResourceFormService>,
}

/// One-time wiring, invoked by the host application once the selection
/// controls exist. There is no implicit page-ready registration: this call
/// is the only initialization hook.
///
/// The subtype control starts hidden, matching its initial render; the first
/// change event recomputes it. Hosts that want to repopulate the subtype
/// control subscribe to `SubtypeOptionsFetched` on the returned bus before
/// feeding change events to `form_service`.
pub fn initialize(
    config: FetcherConfig,
    subtype_control: Arc<dyn SubtypeControl>,
) -> AppResult<AppState> {
    // 1. INFRASTRUCTURE
    let event_bus = Arc::new(EventBus::new());
    let fetcher = Arc::new(HttpSubtypeFetcher::new(config)?);

    // 2. INITIAL CONTROL STATE
    subtype_control.set_visibility(Visibility::Hidden);

    // 3. SERVICES
    let form_service = Arc::new(ResourceFormService::new(
        subtype_control,
        fetcher,
        event_bus.clone(),
    ));

    Ok(AppState {
        event_bus,
        form_service,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::SharedSubtypeControl;
    use crate::domain::ResourceType;

    #[test]
    fn test_initialize_wires_state_and_hides_control() {
        let control = Arc::new(SharedSubtypeControl::new());
        control.set_visibility(Visibility::Shown);

        let state = initialize(
            FetcherConfig::new("https://forms.example.test/ajax/resource-subtypes/"),
            control.clone(),
        )
        .unwrap();

        assert_eq!(control.visibility(), Visibility::Hidden);
        assert_eq!(
            state
                .event_bus
                .subscriber_count::<crate::events::SubtypeOptionsFetched>(),
            0
        );
    }

    #[tokio::test]
    async fn test_initialized_service_applies_visibility_policy() {
        let control = Arc::new(SharedSubtypeControl::new());
        let state = initialize(
            FetcherConfig::new("https://forms.example.test/ajax/resource-subtypes/"),
            control.clone(),
        )
        .unwrap();

        // The fetch will fail against the unreachable test endpoint; that is
        // the log-and-drop path and must not affect the visibility write.
        let task = state.form_service.resource_type_changed("ulb");
        assert_eq!(control.visibility(), Visibility::Shown);
        assert_eq!(ResourceType::from_raw("ulb").subtype_visibility(), control.visibility());
        task.abort();
    }
}
