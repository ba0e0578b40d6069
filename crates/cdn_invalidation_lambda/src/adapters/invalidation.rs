use async_trait::async_trait;

use crate::runtime::contract::{InvalidationReceipt, InvalidationRequest};
use crate::runtime::error::InvalidationError;

/// Submits one invalidation request to the CDN control plane.
#[async_trait]
pub trait InvalidationSubmitter: Send + Sync {
    async fn create_invalidation(
        &self,
        request: &InvalidationRequest,
    ) -> Result<InvalidationReceipt, InvalidationError>;
}
