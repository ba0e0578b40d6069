use tracing::{debug, info, warn};

use crate::adapters::invalidation::InvalidationSubmitter;
use crate::runtime::caller_reference::new_caller_reference;
use crate::runtime::contract::{
    ChangeNotification, InvalidationRequest, InvalidationResult, RecordOutcome,
};
use crate::runtime::error::InvalidationError;
use crate::runtime::object_keys::decode_object_key;

/// Decodes one notification, submits its invalidation and waits for the
/// provider to accept it.
pub async fn invalidate_notification(
    notification: &ChangeNotification,
    distribution_id: &str,
    submitter: &dyn InvalidationSubmitter,
) -> Result<InvalidationResult, InvalidationError> {
    submit_invalidation(notification, distribution_id, submitter)
        .await
        .map(|(_, result)| result)
}

/// Same as [`invalidate_notification`], also handing back the request that
/// was submitted.
pub async fn submit_invalidation(
    notification: &ChangeNotification,
    distribution_id: &str,
    submitter: &dyn InvalidationSubmitter,
) -> Result<(InvalidationRequest, InvalidationResult), InvalidationError> {
    let object_key = decode_object_key(&notification.object_key)?;
    info!(
        bucket = %notification.bucket_identifier,
        object_key = %object_key,
        "processing change notification"
    );

    let request =
        InvalidationRequest::for_object(distribution_id, &object_key, new_caller_reference());
    info!(
        distribution_id = %request.distribution_id,
        caller_reference = %request.caller_reference,
        paths = ?request.paths,
        "creating invalidation"
    );

    let receipt = submitter.create_invalidation(&request).await?;
    info!(
        invalidation_id = %receipt.invalidation_id,
        status = %receipt.status,
        path = %request.paths.join(","),
        "invalidation created"
    );

    let result = InvalidationResult::success(
        notification.bucket_identifier.clone(),
        object_key,
        receipt.invalidation_id,
    );
    Ok((request, result))
}

/// Like [`invalidate_notification`], but folds the error into the outcome so
/// that sibling records in a batch are unaffected.
pub async fn process_notification(
    notification: &ChangeNotification,
    distribution_id: &str,
    submitter: &dyn InvalidationSubmitter,
) -> RecordOutcome {
    match invalidate_notification(notification, distribution_id, submitter).await {
        Ok(result) => {
            debug!(object_key = %result.object_key, "record succeeded");
            RecordOutcome::Succeeded(result)
        }
        Err(error) => {
            warn!(
                bucket = %notification.bucket_identifier,
                object_key = %notification.object_key,
                error_kind = error.kind(),
                error = %error,
                "record failed"
            );
            RecordOutcome::Failed {
                bucket_identifier: notification.bucket_identifier.clone(),
                object_key: notification.object_key.clone(),
                error,
            }
        }
    }
}
