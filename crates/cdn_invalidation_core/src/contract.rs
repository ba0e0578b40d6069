use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::InvalidationError;
use crate::object_keys::invalidation_path;

pub const BATCH_SUCCESS_MESSAGE: &str = "CloudFront invalidations created successfully";
pub const SINGLE_SUCCESS_MESSAGE: &str = "CloudFront invalidation created successfully";
pub const FAILURE_MESSAGE: &str = "Error creating CloudFront invalidation";
pub const EMPTY_EVENT_MESSAGE: &str = "No paths to invalidate";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeEvent {
    #[serde(rename = "Records")]
    pub records: Vec<ChangeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeRecord {
    pub s3: StorageEntity,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageEntity {
    pub bucket: BucketRef,
    pub object: ObjectRef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BucketRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectRef {
    pub key: String,
}

/// One object change, with the key still in its notification encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeNotification {
    pub bucket_identifier: String,
    pub object_key: String,
}

impl From<ChangeRecord> for ChangeNotification {
    fn from(record: ChangeRecord) -> Self {
        Self {
            bucket_identifier: record.s3.bucket.name,
            object_key: record.s3.object.key,
        }
    }
}

impl ChangeEvent {
    pub fn into_notifications(self) -> Vec<ChangeNotification> {
        self.records.into_iter().map(ChangeNotification::from).collect()
    }
}

pub fn parse_change_event(event: Value) -> Result<ChangeEvent, InvalidationError> {
    serde_json::from_value(event)
        .map_err(|error| InvalidationError::MalformedEvent(error.to_string()))
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InvalidationRequest {
    pub distribution_id: String,
    pub caller_reference: String,
    pub paths: Vec<String>,
}

impl InvalidationRequest {
    pub fn for_object(
        distribution_id: impl Into<String>,
        decoded_key: &str,
        caller_reference: impl Into<String>,
    ) -> Self {
        Self {
            distribution_id: distribution_id.into(),
            caller_reference: caller_reference.into(),
            paths: vec![invalidation_path(decoded_key)],
        }
    }
}

/// What the CDN control plane hands back for an accepted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidationReceipt {
    pub invalidation_id: String,
    pub status: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvalidationStatus {
    Success,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InvalidationResult {
    #[serde(rename = "bucketName")]
    pub bucket_identifier: String,
    pub object_key: String,
    pub invalidation_id: String,
    pub status: InvalidationStatus,
}

impl InvalidationResult {
    pub fn success(
        bucket_identifier: impl Into<String>,
        object_key: impl Into<String>,
        invalidation_id: impl Into<String>,
    ) -> Self {
        Self {
            bucket_identifier: bucket_identifier.into(),
            object_key: object_key.into(),
            invalidation_id: invalidation_id.into(),
            status: InvalidationStatus::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Succeeded(InvalidationResult),
    Failed {
        bucket_identifier: String,
        object_key: String,
        error: InvalidationError,
    },
}

impl RecordOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchSummary {
    AllSucceeded(Vec<InvalidationResult>),
    Failed {
        first_error: InvalidationError,
        succeeded: usize,
        failed: usize,
    },
}

/// Folds per-record outcomes into the all-or-nothing batch result.
///
/// Results keep input order. When any record failed, the error reported is
/// the first failure in input order and successful siblings are only counted.
pub fn summarize_outcomes(outcomes: Vec<RecordOutcome>) -> BatchSummary {
    let failed = outcomes.iter().filter(|outcome| outcome.is_failure()).count();
    let succeeded = outcomes.len() - failed;

    let mut results = Vec::with_capacity(succeeded);
    let mut first_error = None;
    for outcome in outcomes {
        match outcome {
            RecordOutcome::Succeeded(result) => results.push(result),
            RecordOutcome::Failed { error, .. } => {
                if first_error.is_none() {
                    first_error = Some(error);
                }
            }
        }
    }

    match first_error {
        Some(first_error) => BatchSummary::Failed {
            first_error,
            succeeded,
            failed,
        },
        None => BatchSummary::AllSucceeded(results),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchSuccessBody {
    pub message: String,
    pub results: Vec<InvalidationResult>,
}

impl BatchSuccessBody {
    pub fn new(results: Vec<InvalidationResult>) -> Self {
        Self {
            message: BATCH_SUCCESS_MESSAGE.to_string(),
            results,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SingleSuccessBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalidation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<String>>,
}

impl SingleSuccessBody {
    pub fn created(request: &InvalidationRequest, result: &InvalidationResult) -> Self {
        Self {
            message: SINGLE_SUCCESS_MESSAGE.to_string(),
            invalidation_id: Some(result.invalidation_id.clone()),
            object_key: Some(result.object_key.clone()),
            distribution_id: Some(request.distribution_id.clone()),
            paths: Some(request.paths.clone()),
        }
    }

    pub fn nothing_to_invalidate() -> Self {
        Self {
            message: EMPTY_EVENT_MESSAGE.to_string(),
            invalidation_id: None,
            object_key: None,
            distribution_id: None,
            paths: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailureBody {
    pub message: String,
    pub error: String,
}

impl FailureBody {
    pub fn from_error(error: &InvalidationError) -> Self {
        Self {
            message: FAILURE_MESSAGE.to_string(),
            error: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn success(key: &str, id: &str) -> RecordOutcome {
        RecordOutcome::Succeeded(InvalidationResult::success("b1", key, id))
    }

    fn failure(key: &str, message: &str) -> RecordOutcome {
        RecordOutcome::Failed {
            bucket_identifier: "b1".to_string(),
            object_key: key.to_string(),
            error: InvalidationError::provider(message),
        }
    }

    #[test]
    fn parses_records_and_ignores_extra_fields() {
        let event = parse_change_event(json!({
            "Records": [
                {
                    "eventSource": "aws:s3",
                    "eventName": "ObjectCreated:Put",
                    "s3": {
                        "bucket": {"name": "b1", "arn": "arn:aws:s3:::b1"},
                        "object": {"key": "images/logo%2Bicon.png", "size": 42}
                    }
                }
            ]
        }))
        .expect("event should parse");

        assert_eq!(
            event.into_notifications(),
            vec![ChangeNotification {
                bucket_identifier: "b1".to_string(),
                object_key: "images/logo%2Bicon.png".to_string(),
            }]
        );
    }

    #[test]
    fn rejects_event_without_records() {
        let error = parse_change_event(json!({"detail": {}})).expect_err("event should fail");
        assert!(matches!(error, InvalidationError::MalformedEvent(_)));
        assert!(error.to_string().contains("Records"));
    }

    #[test]
    fn rejects_record_without_object_key() {
        let error = parse_change_event(json!({
            "Records": [{"s3": {"bucket": {"name": "b1"}, "object": {}}}]
        }))
        .expect_err("event should fail");
        assert!(error.to_string().contains("key"));
    }

    #[test]
    fn request_carries_single_absolute_path() {
        let request = InvalidationRequest::for_object("E123", "a b+c", "s3-1-abcdefghi");
        assert_eq!(request.paths, vec!["/a b+c".to_string()]);
        assert_eq!(request.distribution_id, "E123");
    }

    #[test]
    fn result_serializes_with_wire_field_names() {
        let value = serde_json::to_value(InvalidationResult::success("b1", "a b", "I2J"))
            .expect("result should serialize");
        assert_eq!(
            value,
            json!({
                "bucketName": "b1",
                "objectKey": "a b",
                "invalidationId": "I2J",
                "status": "success"
            })
        );
    }

    #[test]
    fn summary_keeps_input_order_when_all_succeed() {
        let summary = summarize_outcomes(vec![success("a", "I1"), success("b", "I2")]);
        let BatchSummary::AllSucceeded(results) = summary else {
            panic!("expected success summary");
        };
        let keys: Vec<&str> = results.iter().map(|r| r.object_key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn summary_reports_first_failure_in_input_order() {
        let summary = summarize_outcomes(vec![
            success("a", "I1"),
            failure("b", "AccessDenied"),
            failure("c", "Throttling"),
        ]);
        assert_eq!(
            summary,
            BatchSummary::Failed {
                first_error: InvalidationError::provider("AccessDenied"),
                succeeded: 1,
                failed: 2,
            }
        );
    }

    #[test]
    fn empty_outcomes_summarize_as_success() {
        assert_eq!(
            summarize_outcomes(Vec::new()),
            BatchSummary::AllSucceeded(Vec::new())
        );
    }

    #[test]
    fn single_body_lists_submitted_paths() {
        let request = InvalidationRequest::for_object("E123", "a b+c", "s3-1-abcdefghi");
        let result = InvalidationResult::success("b1", "a b+c", "I2J");
        let value = serde_json::to_value(SingleSuccessBody::created(&request, &result))
            .expect("body should serialize");

        assert_eq!(
            value,
            json!({
                "message": "CloudFront invalidation created successfully",
                "invalidationId": "I2J",
                "objectKey": "a b+c",
                "distributionId": "E123",
                "paths": ["/a b+c"]
            })
        );
    }

    #[test]
    fn empty_single_body_omits_identifiers() {
        let value = serde_json::to_value(SingleSuccessBody::nothing_to_invalidate())
            .expect("body should serialize");
        assert_eq!(value, json!({"message": "No paths to invalidate"}));
    }
}
