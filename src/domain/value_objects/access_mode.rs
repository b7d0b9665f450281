use serde::{Deserialize, Serialize};
use std::fmt;

/// How the working copy is checked out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessMode {
    /// Anonymous check-out over a public protocol
    #[default]
    ReadOnly,
    /// Authenticated check-out, usually over ssh
    Developer,
}

impl AccessMode {
    /// Map the "anonymous check-out" switch onto an access mode
    pub fn from_anonymous(anonymous: bool) -> Self {
        if anonymous {
            Self::ReadOnly
        } else {
            Self::Developer
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::ReadOnly)
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::ReadOnly => write!(f, "read-only"),
            AccessMode::Developer => write!(f, "developer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_anonymous() {
        assert_eq!(AccessMode::from_anonymous(true), AccessMode::ReadOnly);
        assert_eq!(AccessMode::from_anonymous(false), AccessMode::Developer);
    }

    #[test]
    fn test_default_is_read_only() {
        assert_eq!(AccessMode::default(), AccessMode::ReadOnly);
        assert!(AccessMode::default().is_read_only());
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&AccessMode::ReadOnly).unwrap();
        assert_eq!(json, "\"read-only\"");
        assert_eq!(AccessMode::Developer.to_string(), "developer");
    }
}
