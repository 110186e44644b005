use std::path::{Path, PathBuf};
use tokio::fs as async_fs;
use tracing::{debug, info};

use crate::common::error::GitslaveError;
use crate::common::result::{GitslaveResult, ResultExt};
use crate::domain::entities::ExecutionContext;

/// Name of the file that marks the project root and lists slave remotes
pub const REGISTRY_FILE_NAME: &str = ".gitslave";

/// Prefix of comment lines in the registry file
const COMMENT_PREFIX: char = '#';

/// Locates the project root and reads the slave registry
#[derive(Debug, Clone)]
pub struct RegistryStore {
    file_name: String,
}

impl Default for RegistryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryStore {
    /// Create a store using [`REGISTRY_FILE_NAME`]
    pub fn new() -> Self {
        Self {
            file_name: REGISTRY_FILE_NAME.to_string(),
        }
    }

    /// Use a different registry file name
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Path of the registry file under `root_path`
    pub fn registry_path(&self, root_path: &Path) -> PathBuf {
        root_path.join(&self.file_name)
    }

    /// Walk from `start_path` up to the filesystem root and return the first
    /// directory that contains the registry file.
    pub fn discover_root(&self, start_path: &Path) -> GitslaveResult<PathBuf> {
        for candidate in start_path.ancestors() {
            if self.registry_path(candidate).is_file() {
                debug!(root = %candidate.display(), "found registry");
                return Ok(candidate.to_path_buf());
            }
        }

        Err(GitslaveError::config_error(format!(
            "Could not find {} in {} or any parent directory",
            self.file_name,
            start_path.display()
        )))
    }

    /// Read the remote URLs listed in the registry under `root_path`.
    ///
    /// Lines are trimmed; blank lines and `#` comments are ignored.
    pub async fn read_remotes(&self, root_path: &Path) -> GitslaveResult<Vec<String>> {
        let registry_path = self.registry_path(root_path);
        let content = async_fs::read_to_string(&registry_path)
            .await
            .with_filesystem_error("Failed to read registry file", Some(registry_path))?;

        Ok(Self::parse_remotes(&content))
    }

    /// Discover the root from `start_path` and build the execution context
    pub async fn load_context(&self, start_path: &Path) -> GitslaveResult<ExecutionContext> {
        let root_path = self.discover_root(start_path)?;
        let remotes = self.read_remotes(&root_path).await?;
        info!(
            root = %root_path.display(),
            slaves = remotes.len(),
            "loaded registry"
        );

        Ok(ExecutionContext::new(root_path, remotes))
    }

    fn parse_remotes(content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_registry(dir: &Path, content: &str) {
        std::fs::write(dir.join(REGISTRY_FILE_NAME), content).unwrap();
    }

    #[test]
    fn test_discover_root_in_start_directory() {
        let temp_dir = TempDir::new().unwrap();
        write_registry(temp_dir.path(), "");

        let root = RegistryStore::new().discover_root(temp_dir.path()).unwrap();
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_discover_root_from_nested_directory() {
        let temp_dir = TempDir::new().unwrap();
        write_registry(temp_dir.path(), "");
        let nested = temp_dir.path().join("lib").join("src");
        std::fs::create_dir_all(&nested).unwrap();

        let root = RegistryStore::new().discover_root(&nested).unwrap();
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_discover_root_ignores_directory_with_registry_name() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("inner");
        std::fs::create_dir_all(nested.join("gitslave-test-unlikely-name")).unwrap();

        let store = RegistryStore::new().with_file_name("gitslave-test-unlikely-name");
        assert!(store.discover_root(&nested).is_err());
    }

    #[test]
    fn test_discover_root_missing_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = RegistryStore::new().with_file_name("gitslave-test-unlikely-name");

        let error = store.discover_root(temp_dir.path()).unwrap_err();
        assert!(error.is_config_error());
        assert!(error
            .to_string()
            .starts_with("Could not find gitslave-test-unlikely-name in "));
    }

    #[tokio::test]
    async fn test_read_remotes_skips_blank_and_comment_lines() {
        let temp_dir = TempDir::new().unwrap();
        write_registry(
            temp_dir.path(),
            "https://x/lib\n\n  # vendored\n  git@github.com:org/app.git  \r\n",
        );

        let remotes = RegistryStore::new()
            .read_remotes(temp_dir.path())
            .await
            .unwrap();
        assert_eq!(remotes, vec!["https://x/lib", "git@github.com:org/app.git"]);
    }

    #[tokio::test]
    async fn test_read_remotes_missing_file_is_filesystem_error() {
        let temp_dir = TempDir::new().unwrap();

        let result = RegistryStore::new().read_remotes(temp_dir.path()).await;
        assert!(matches!(result, Err(GitslaveError::FileSystemError { .. })));
    }

    #[tokio::test]
    async fn test_load_context() {
        let temp_dir = TempDir::new().unwrap();
        write_registry(temp_dir.path(), "https://x/lib\nhttps://x/app\n");
        let nested = temp_dir.path().join("lib");
        std::fs::create_dir_all(&nested).unwrap();

        let context = RegistryStore::new().load_context(&nested).await.unwrap();

        assert_eq!(context.root_path(), temp_dir.path());
        assert_eq!(context.repositories().len(), 3);
        assert!(context.master().is_master());
        let paths: Vec<_> = context.slaves().map(|repo| repo.path.clone()).collect();
        assert_eq!(paths, vec!["lib", "app"]);
    }
}
