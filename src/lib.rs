// src/lib.rs
// resource-form - dependent resource type / subtype selector synchronization
//
// Architecture:
// - Domain-centric: classification and visibility policy live in the domain
// - Event-driven: the change reaction publishes facts on an event bus
// - Explicit: the host wires the unit once via application::initialize;
//   no implicit registration
// - The rendering substrate stays behind the SubtypeControl seam

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod controls;
pub mod domain;
pub mod error;
pub mod events;

// ============================================================================
// ORCHESTRATION & INTEGRATIONS
// ============================================================================

pub mod integrations;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{ResourceType, SubtypeOption, SubtypePayload, Visibility};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    DomainEvent,
    EventBus,
    // Change events
    ResourceTypeChanged,
    // Fetch events
    SubtypeFetchFailed,
    SubtypeOptionsFetched,
    SubtypeVisibilityChanged,
};

// ============================================================================
// PUBLIC API - Controls (UI seam)
// ============================================================================

pub use controls::{SharedSubtypeControl, SubtypeControl};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{FetcherConfig, HttpSubtypeFetcher, SubtypeFetcher};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::ResourceFormService;

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{initialize, AppState};
