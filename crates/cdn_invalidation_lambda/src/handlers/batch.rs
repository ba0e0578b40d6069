use futures::future::join_all;
use serde_json::Value;
use tracing::{error, info};

use crate::adapters::invalidation::InvalidationSubmitter;
use crate::config::HandlerConfig;
use crate::handlers::notification::process_notification;
use crate::handlers::response::{error_response, success_response, HandlerResponse};
use crate::runtime::contract::{
    parse_change_event, summarize_outcomes, BatchSuccessBody, BatchSummary,
};
use crate::runtime::error::InvalidationError;

/// Invalidates every record of the event concurrently.
///
/// A missing distribution is returned as `Err` before any record is read.
/// Every other failure is reported as a 500 response, and a single failed
/// record fails the whole batch.
pub async fn handle_batch_event(
    event: Value,
    config: &HandlerConfig,
    submitter: &dyn InvalidationSubmitter,
) -> Result<HandlerResponse, InvalidationError> {
    info!(event = %event, "event received");

    let distribution_id = match config.distribution_id() {
        Ok(value) => value,
        Err(config_error) => {
            error!(error = %config_error, "handler is not configured");
            return Err(config_error);
        }
    };

    let notifications = match parse_change_event(event) {
        Ok(change_event) => change_event.into_notifications(),
        Err(parse_error) => {
            error!(error = %parse_error, "error creating cloudfront invalidation");
            return Ok(error_response(&parse_error));
        }
    };

    let outcomes = join_all(
        notifications
            .iter()
            .map(|notification| process_notification(notification, distribution_id, submitter)),
    )
    .await;

    match summarize_outcomes(outcomes) {
        BatchSummary::AllSucceeded(results) => {
            info!(
                invalidations = results.len(),
                results = ?results,
                "all invalidations processed successfully"
            );
            Ok(success_response(200, BatchSuccessBody::new(results)))
        }
        BatchSummary::Failed {
            first_error,
            succeeded,
            failed,
        } => {
            error!(
                error = %first_error,
                succeeded,
                failed,
                "error creating cloudfront invalidation"
            );
            Ok(error_response(&first_error))
        }
    }
}
