use async_trait::async_trait;

use crate::domain::{ResourceType, SubtypePayload};
use crate::error::AppResult;

pub mod client;

pub use client::{FetcherConfig, HttpSubtypeFetcher};

/// Read-only fetch of the subtype options for a resource type.
///
/// One invocation issues exactly one outbound request. Failures come back as
/// a single `AppError::Fetch`; distinguishing them further is not this
/// seam's concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubtypeFetcher: Send + Sync {
    async fn fetch_options(&self, resource_type: &ResourceType) -> AppResult<SubtypePayload>;
}
