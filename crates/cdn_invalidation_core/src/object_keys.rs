use crate::error::InvalidationError;

/// Decodes an object key as delivered in a storage change notification.
///
/// Notifications encode spaces as `+`, so every literal `+` becomes a space
/// before percent-decoding. An encoded plus (`%2B`) therefore survives as a
/// literal `+`. Malformed `%` escapes are kept verbatim; only a decoded byte
/// sequence that is not UTF-8 is rejected.
pub fn decode_object_key(raw_key: &str) -> Result<String, InvalidationError> {
    let spaced = raw_key.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|error| InvalidationError::Decoding {
            key: raw_key.to_string(),
            reason: error.to_string(),
        })
}

/// Absolute CDN path for a decoded key. No re-encoding or normalization.
pub fn invalidation_path(decoded_key: &str) -> String {
    format!("/{decoded_key}")
}
