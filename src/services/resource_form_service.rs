// src/services/resource_form_service.rs
//
// Resource Form Service - the whole visible behavior of the unit
//
// One user-driven change on the resource type control triggers two
// reactions, in this order:
// 1. visibility of the dependent subtype control is recomputed and applied
//    synchronously
// 2. one asynchronous fetch of the subtype options is issued for the same
//    value
//
// CRITICAL RULES:
// - Visibility is derived from the resource type alone, on every event
// - Fetch failures are logged and dropped, never surfaced to the user
// - No de-duplication, cancellation or retry of fetches

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::controls::SubtypeControl;
use crate::domain::ResourceType;
use crate::error::AppError;
use crate::events::{
    EventBus, ResourceTypeChanged, SubtypeFetchFailed, SubtypeOptionsFetched,
    SubtypeVisibilityChanged,
};
use crate::integrations::SubtypeFetcher;

pub struct ResourceFormService {
    subtype_control: Arc<dyn SubtypeControl>,
    fetcher: Arc<dyn SubtypeFetcher>,
    event_bus: Arc<EventBus>,
}

impl ResourceFormService {
    pub fn new(
        subtype_control: Arc<dyn SubtypeControl>,
        fetcher: Arc<dyn SubtypeFetcher>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            subtype_control,
            fetcher,
            event_bus,
        }
    }

    /// Recompute and apply the subtype control's visibility for the selected
    /// resource type.
    ///
    /// Sentinel types hide the control; every other value shows it. Exact
    /// string match only. Mutates nothing but the control's visual state and
    /// cannot fail; calling it twice with the same value is a no-op the
    /// second time.
    pub fn set_visibility(&self, resource_type: &ResourceType) {
        let visibility = resource_type.subtype_visibility();
        self.subtype_control.set_visibility(visibility);

        self.event_bus.emit(SubtypeVisibilityChanged::new(
            resource_type.as_str().to_string(),
            visibility,
        ));
    }

    /// Fetch the subtype options for a resource type.
    ///
    /// Issues exactly one request. On success the payload is logged and
    /// published verbatim as `SubtypeOptionsFetched`; repopulating the
    /// subtype control from it is left to subscribers. On failure a
    /// diagnostic with the status label and error detail is recorded,
    /// `SubtypeFetchFailed` is published, and the error is dropped. Nothing
    /// propagates to the caller on either path.
    pub async fn fetch_subtype_options(&self, resource_type: ResourceType) {
        match self.fetcher.fetch_options(&resource_type).await {
            Ok(payload) => {
                log::debug!(
                    "resource subtypes for '{}': {}",
                    resource_type.as_str(),
                    payload
                );
                self.event_bus.emit(SubtypeOptionsFetched::new(
                    resource_type.as_str().to_string(),
                    payload,
                ));
            }
            Err(err) => {
                let (status, detail) = match err {
                    AppError::Fetch { status, detail } => (status, detail),
                    other => ("error".to_string(), other.to_string()),
                };
                log::warn!("Error getting resource subtypes: ({}) {}", status, detail);
                self.event_bus.emit(SubtypeFetchFailed::new(
                    resource_type.as_str().to_string(),
                    status,
                    detail,
                ));
            }
        }
    }

    /// React to a change of the resource type control.
    ///
    /// The raw control value is classified once at this boundary; the
    /// visibility write and the fetch observe that same value. Visibility is
    /// applied synchronously before the fetch task is spawned, so the final
    /// visual state always reflects the latest change regardless of network
    /// timing.
    ///
    /// Every call spawns a fresh fetch task. Rapid successive changes leave
    /// earlier requests in flight and their results may arrive in any order;
    /// a stale payload can still be published after a newer request was
    /// issued.
    ///
    /// Must be called from within a tokio runtime. The returned handle may
    /// be discarded by fire-and-forget callers.
    pub fn resource_type_changed(self: &Arc<Self>, raw_value: &str) -> JoinHandle<()> {
        let resource_type = ResourceType::from_raw(raw_value);

        self.event_bus
            .emit(ResourceTypeChanged::new(resource_type.as_str().to_string()));

        self.set_visibility(&resource_type);

        let service = Arc::clone(self);
        tokio::spawn(async move {
            service.fetch_subtype_options(resource_type).await;
        })
    }
}
