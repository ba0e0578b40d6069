use async_trait::async_trait;
use aws_sdk_cloudfront::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_cloudfront::types::{InvalidationBatch, Paths};
use tracing::error;

use crate::adapters::invalidation::InvalidationSubmitter;
use crate::runtime::contract::{InvalidationReceipt, InvalidationRequest};
use crate::runtime::error::InvalidationError;

#[derive(Debug, Clone)]
pub struct CloudFrontSubmitter {
    client: aws_sdk_cloudfront::Client,
}

impl CloudFrontSubmitter {
    pub fn new(client: aws_sdk_cloudfront::Client) -> Self {
        Self { client }
    }

    /// Builds a client from the default credential and region chain.
    pub async fn from_environment() -> Self {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(aws_sdk_cloudfront::Client::new(&aws_config))
    }
}

fn build_invalidation_batch(
    request: &InvalidationRequest,
) -> Result<InvalidationBatch, InvalidationError> {
    let quantity = i32::try_from(request.paths.len()).map_err(|_| {
        InvalidationError::provider(format!(
            "too many invalidation paths: {}",
            request.paths.len()
        ))
    })?;

    let paths = Paths::builder()
        .quantity(quantity)
        .set_items(Some(request.paths.clone()))
        .build()
        .map_err(|error| {
            InvalidationError::provider(format!("invalid invalidation paths: {error}"))
        })?;

    InvalidationBatch::builder()
        .paths(paths)
        .caller_reference(request.caller_reference.clone())
        .build()
        .map_err(|error| {
            InvalidationError::provider(format!("invalid invalidation batch: {error}"))
        })
}

/// The service's own message when CloudFront answered, otherwise the
/// top-level SDK error text.
fn provider_message(service_message: Option<&str>, fallback: &impl std::fmt::Display) -> String {
    match service_message {
        Some(message) if !message.trim().is_empty() => message.to_string(),
        _ => fallback.to_string(),
    }
}

#[async_trait]
impl InvalidationSubmitter for CloudFrontSubmitter {
    async fn create_invalidation(
        &self,
        request: &InvalidationRequest,
    ) -> Result<InvalidationReceipt, InvalidationError> {
        let batch = build_invalidation_batch(request)?;

        let output = self
            .client
            .create_invalidation()
            .distribution_id(request.distribution_id.clone())
            .invalidation_batch(batch)
            .send()
            .await
            .map_err(|sdk_error| {
                error!(
                    distribution_id = %request.distribution_id,
                    caller_reference = %request.caller_reference,
                    error = %DisplayErrorContext(&sdk_error),
                    "cloudfront rejected invalidation"
                );
                let service_message = sdk_error
                    .as_service_error()
                    .and_then(|service_error| service_error.message());
                InvalidationError::provider(provider_message(service_message, &sdk_error))
            })?;

        let invalidation = output.invalidation().ok_or_else(|| {
            InvalidationError::provider("cloudfront response did not include an invalidation")
        })?;

        Ok(InvalidationReceipt {
            invalidation_id: invalidation.id().to_string(),
            status: invalidation.status().to_string(),
        })
    }
}
