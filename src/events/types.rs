// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{SubtypePayload, Visibility};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// CHANGE EVENTS
// ============================================================================

/// Emitted when the user picks a new value in the resource type control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceTypeChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub resource_type: String,
}

impl ResourceTypeChanged {
    pub fn new(resource_type: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            resource_type,
        }
    }
}

impl DomainEvent for ResourceTypeChanged {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "ResourceTypeChanged"
    }
}

/// Emitted after the subtype control's visibility has been recomputed and
/// applied for a newly selected resource type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtypeVisibilityChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub resource_type: String,
    pub visibility: Visibility,
}

impl SubtypeVisibilityChanged {
    pub fn new(resource_type: String, visibility: Visibility) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            resource_type,
            visibility,
        }
    }
}

impl DomainEvent for SubtypeVisibilityChanged {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "SubtypeVisibilityChanged"
    }
}

// ============================================================================
// FETCH EVENTS
// ============================================================================

/// Emitted when the subtype endpoint answered successfully.
/// Carries the payload verbatim; whether to repopulate the subtype control
/// from it is the subscriber's decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtypeOptionsFetched {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub resource_type: String,
    pub payload: SubtypePayload,
}

impl SubtypeOptionsFetched {
    pub fn new(resource_type: String, payload: SubtypePayload) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            resource_type,
            payload,
        }
    }
}

impl DomainEvent for SubtypeOptionsFetched {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "SubtypeOptionsFetched"
    }
}

/// Emitted when a subtype fetch failed. The failure has already been logged;
/// no retry follows and no UI state changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtypeFetchFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub resource_type: String,
    pub status: String,
    pub detail: String,
}

impl SubtypeFetchFailed {
    pub fn new(resource_type: String, status: String, detail: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            resource_type,
            status,
            detail,
        }
    }
}

impl DomainEvent for SubtypeFetchFailed {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "SubtypeFetchFailed"
    }
}
