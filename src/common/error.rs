use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitslaveError {
    #[error("{message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

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
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GitslaveError {
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: None,
        }
    }

    pub fn config_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
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

    pub fn command_error_with_source(
        message: impl Into<String>,
        command: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::CommandError {
            message: message.into(),
            command: command.into(),
            source: Some(source),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
            source: None,
        }
    }

    pub fn internal_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InternalError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// ユーザーに `ERROR:` として見せるべき設定エラーか
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }
}

impl From<std::io::Error> for GitslaveError {
    fn from(error: std::io::Error) -> Self {
        Self::filesystem_error_with_source("File system operation failed", None, error)
    }
}

impl From<tokio::sync::AcquireError> for GitslaveError {
    fn from(error: tokio::sync::AcquireError) -> Self {
        Self::internal_error_with_source("Failed to acquire job slot", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message_is_bare() {
        let error = GitslaveError::config_error("Could not find .gitslave");
        assert!(error.is_config_error());
        assert_eq!(error.to_string(), "Could not find .gitslave");
    }

    #[test]
    fn test_filesystem_error_with_path() {
        let path = PathBuf::from("/test/.gitslave");
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error =
            GitslaveError::filesystem_error_with_source("cannot read", Some(path.clone()), io_error);
        if let GitslaveError::FileSystemError { path: Some(p), .. } = &error {
            assert_eq!(p, &path);
        } else {
            panic!("Expected FileSystemError with path");
        }
        assert!(!error.is_config_error());
    }

    #[test]
    fn test_command_error_display() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error = GitslaveError::command_error_with_source("failed to spawn git", "git", io_error);
        assert_eq!(error.to_string(), "Command execution failed: failed to spawn git");
    }

    #[test]
    fn test_error_conversion_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: GitslaveError = io_error.into();
        assert!(matches!(error, GitslaveError::FileSystemError { .. }));
    }
}
