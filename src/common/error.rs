use crate::domain::value_objects::scm_type::ScmType;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Unknown provider: '{name}'. Available providers: {available}")]
    ProviderNotFound { name: String, available: String },

    #[error("{provider} does not host {scm} repositories")]
    UnsupportedCombination { provider: String, scm: ScmType },

    #[error("No usable SCM for {provider}: none of its SCMs is installed")]
    NoSupportedScm { provider: String },

    #[error("File system operation failed: {message}")]
    FileSystemError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Command execution failed: {message}")]
    CommandError {
        message: String,
        command: String,
        exit_code: Option<i32>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {field} - {message}")]
    ValidationError {
        field: String,
        message: String,
        value: Option<String>,
    },
}

impl ImportError {
    pub fn provider_not_found(name: impl Into<String>, available: &[&str]) -> Self {
        Self::ProviderNotFound {
            name: name.into(),
            available: available.join(", "),
        }
    }

    pub fn unsupported_combination(provider: impl Into<String>, scm: ScmType) -> Self {
        Self::UnsupportedCombination {
            provider: provider.into(),
            scm,
        }
    }

    pub fn no_supported_scm(provider: impl Into<String>) -> Self {
        Self::NoSupportedScm {
            provider: provider.into(),
        }
    }

    pub fn filesystem_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn filesystem_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    pub fn command_error(
        message: impl Into<String>,
        command: impl Into<String>,
        exit_code: Option<i32>,
    ) -> Self {
        Self::CommandError {
            message: message.into(),
            command: command.into(),
            exit_code,
            source: None,
        }
    }

    pub fn command_error_with_source(
        message: impl Into<String>,
        command: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::CommandError {
            message: message.into(),
            command: command.into(),
            exit_code: None,
            source: Some(Box::new(source)),
        }
    }

    pub fn validation_error(
        field: impl Into<String>,
        message: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
            value,
        }
    }

    /// Exit code of the failed SCM process, if the error came from one
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandError { exit_code, .. } => *exit_code,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_not_found_lists_available() {
        let error = ImportError::provider_not_found("GitHub", &["Sourceforge", "BerliOS"]);
        assert_eq!(
            error.to_string(),
            "Unknown provider: 'GitHub'. Available providers: Sourceforge, BerliOS"
        );
    }

    #[test]
    fn test_unsupported_combination_message() {
        let error = ImportError::unsupported_combination("Gitorious", ScmType::Svn);
        assert_eq!(error.to_string(), "Gitorious does not host svn repositories");
    }

    #[test]
    fn test_filesystem_error_with_path() {
        let path = PathBuf::from("/test/path");
        let error = ImportError::filesystem_error("test message", Some(path.clone()));
        if let ImportError::FileSystemError { path: Some(p), .. } = error {
            assert_eq!(p, path);
        } else {
            panic!("Expected FileSystemError with path");
        }
    }

    #[test]
    fn test_command_error_exit_code() {
        let error = ImportError::command_error("clone failed", "hg clone x", Some(255));
        assert_eq!(error.exit_code(), Some(255));
        assert_eq!(ImportError::no_supported_scm("Gitorious").exit_code(), None);
    }

    #[test]
    fn test_validation_error() {
        let error = ImportError::validation_error("field", "message", Some("value".to_string()));
        assert_eq!(error.to_string(), "Validation error: field - message");
    }
}
