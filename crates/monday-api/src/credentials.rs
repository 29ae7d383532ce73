//! API credentials sent with every request.

use monday::UserId;

/// The secret Monday API key.
///
/// `Debug` output is redacted so the key never reaches logs or error chains.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps an API key, returning `None` if it is empty after trimming.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let v = value.into();
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the key for placing on the wire.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// API key plus the id of the user the calls are made on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Key sent as the `api_key` query parameter.
    pub api_key: ApiKey,
    /// User sent as the `user_id` query parameter.
    pub user_id: UserId,
}

impl Credentials {
    /// Pairs an API key with the user the calls are made for.
    pub fn new(api_key: ApiKey, user_id: UserId) -> Self {
        Self { api_key, user_id }
    }

    /// Query parameters that authenticate a request.
    pub(crate) fn query_params(&self) -> [(&'static str, String); 2] {
        [
            ("api_key", self.api_key.expose().to_string()),
            ("user_id", self.user_id.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_the_key() {
        let credentials = Credentials::new(ApiKey::new("s3cr3t").unwrap(), UserId::new(9));
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("s3cr3t"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn blank_keys_are_rejected() {
        assert!(ApiKey::new("  \n").is_none());
        assert_eq!(ApiKey::new("abc\n").unwrap().expose(), "abc");
    }
}
