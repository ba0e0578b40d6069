use serde_json::Value;
use tracing::{debug, error, info};

use crate::adapters::invalidation::InvalidationSubmitter;
use crate::config::HandlerConfig;
use crate::handlers::notification::submit_invalidation;
use crate::handlers::response::{success_response, HandlerResponse};
use crate::runtime::contract::{parse_change_event, SingleSuccessBody};
use crate::runtime::error::InvalidationError;

/// Invalidates the first record of the event and ignores the rest.
///
/// Unlike the batch handler, every failure is returned to the caller as
/// `Err` instead of being shaped into a 500 response.
pub async fn handle_single_event(
    event: Value,
    config: &HandlerConfig,
    submitter: &dyn InvalidationSubmitter,
) -> Result<HandlerResponse, InvalidationError> {
    info!(event = %event, "event received");

    let outcome = invalidate_first_record(event, config, submitter).await;
    if let Err(failure) = &outcome {
        error!(
            error_kind = failure.kind(),
            error = %failure,
            "error creating cloudfront invalidation"
        );
    }
    outcome
}

async fn invalidate_first_record(
    event: Value,
    config: &HandlerConfig,
    submitter: &dyn InvalidationSubmitter,
) -> Result<HandlerResponse, InvalidationError> {
    let distribution_id = config.distribution_id()?;
    let mut notifications = parse_change_event(event)?.into_notifications().into_iter();

    let Some(first) = notifications.next() else {
        info!("no paths to invalidate");
        return Ok(success_response(200, SingleSuccessBody::nothing_to_invalidate()));
    };

    let ignored = notifications.count();
    if ignored > 0 {
        debug!(ignored, "ignoring records after the first");
    }

    let (request, result) = submit_invalidation(&first, distribution_id, submitter).await?;
    info!(
        invalidation_id = %result.invalidation_id,
        distribution_id,
        "successfully created cloudfront invalidation"
    );
    Ok(success_response(200, SingleSuccessBody::created(&request, &result)))
}
