use crate::runtime::error::InvalidationError;

pub const DISTRIBUTION_ID_VAR: &str = "CLOUDFRONT_DISTRIBUTION_ID";

/// Process-wide handler configuration, read once at start.
///
/// A missing distribution is kept as `None` rather than aborting start-up so
/// that every invocation reports the configuration error itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerConfig {
    distribution_id: Option<String>,
}

impl HandlerConfig {
    pub fn new(distribution_id: impl Into<String>) -> Self {
        Self::from_lookup(|_| Some(distribution_id.into()))
    }

    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl FnOnce(&str) -> Option<String>) -> Self {
        let distribution_id = lookup(DISTRIBUTION_ID_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Self { distribution_id }
    }

    pub fn distribution_id(&self) -> Result<&str, InvalidationError> {
        self.distribution_id.as_deref().ok_or_else(|| {
            InvalidationError::Configuration(format!(
                "{DISTRIBUTION_ID_VAR} environment variable is not set"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_distribution_from_lookup() {
        let config = HandlerConfig::from_lookup(|name| {
            assert_eq!(name, DISTRIBUTION_ID_VAR);
            Some(" E2QWRUHAPOMQZL ".to_string())
        });
        assert_eq!(config.distribution_id(), Ok("E2QWRUHAPOMQZL"));
    }

    #[test]
    fn blank_distribution_is_a_configuration_error() {
        let config = HandlerConfig::from_lookup(|_| Some("   ".to_string()));
        let error = config.distribution_id().expect_err("blank id should fail");
        assert_eq!(
            error,
            InvalidationError::Configuration(
                "CLOUDFRONT_DISTRIBUTION_ID environment variable is not set".to_string()
            )
        );
    }

    #[test]
    fn unconfigured_has_no_distribution() {
        assert!(HandlerConfig::unconfigured().distribution_id().is_err());
    }
}
