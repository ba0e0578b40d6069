use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;

pub const CALLER_REFERENCE_PREFIX: &str = "s3";
pub const RANDOM_SUFFIX_LEN: usize = 9;

/// Caller reference for a new invalidation: `s3-<unix millis>-<suffix>`.
///
/// The provider deduplicates on this value, so it must not repeat across
/// requests issued within the same millisecond.
pub fn new_caller_reference() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_SUFFIX_LEN)
        .map(char::from)
        .collect();
    caller_reference_with(Utc::now().timestamp_millis(), &suffix)
}

fn caller_reference_with(timestamp_millis: i64, suffix: &str) -> String {
    format!("{CALLER_REFERENCE_PREFIX}-{timestamp_millis}-{suffix}")
}
