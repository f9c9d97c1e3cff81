// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod resource_type;
pub mod subtype;
pub mod visibility;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Resource Type Domain
pub use resource_type::ResourceType;

// Subtype Domain
pub use subtype::{SubtypeOption, SubtypePayload};

// Visibility (Derived State)
pub use visibility::Visibility;
