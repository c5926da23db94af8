use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HarborError, HarborResult};

/// Opaque identifier for a piece of content the node announces.
///
/// Keys are validated on construction: non-empty, no internal whitespace.
/// What the key actually addresses is the routing backend's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentKey(String);

impl ContentKey {
    /// Create a validated content key
    pub fn new<S: Into<String>>(key: S) -> HarborResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(HarborError::invalid_key("content key must not be empty"));
        }
        if key.chars().any(char::is_whitespace) {
            return Err(HarborError::invalid_key(format!(
                "content key must not contain whitespace: {:?}",
                key
            )));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ContentKey {
    type Err = HarborError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_key() {
        let key = ContentKey::new("bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi").unwrap();
        assert_eq!(key.as_str(), "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi");
        assert_eq!(key.to_string(), key.as_str());
    }

    #[test]
    fn test_rejects_empty_key() {
        assert!(ContentKey::new("").is_err());
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(ContentKey::new("two words").is_err());
        assert!(ContentKey::new("tab\tkey").is_err());
    }

    #[test]
    fn test_from_str_round_trip() {
        let key: ContentKey = "some-key".parse().unwrap();
        assert_eq!(key.as_str(), "some-key");
    }
}
