// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod resource_form_service;


// Re-export all services and their types
pub use resource_form_service::ResourceFormService;
