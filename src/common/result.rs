use crate::common::error::GitslaveError;

/// gitslave全体で使用するResult型のエイリアス
///
/// # Examples
///
/// ```
/// use gitslave::common::result::GitslaveResult;
/// use gitslave::common::error::GitslaveError;
///
/// fn example_function() -> GitslaveResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> GitslaveResult<()> {
///     Err(GitslaveError::internal_error("Something went wrong"))
/// }
/// ```
pub type GitslaveResult<T> = Result<T, GitslaveError>;

/// Resultのエラー変換ヘルパー
pub trait ResultExt<T, E> {
    /// ファイルシステムエラーとしてGitslaveResultに変換
    ///
    /// # Examples
    ///
    /// ```
    /// use gitslave::common::result::{GitslaveResult, ResultExt};
    /// use std::path::PathBuf;
    ///
    /// let result: Result<String, std::io::Error> = Err(std::io::Error::new(
    ///     std::io::ErrorKind::NotFound, "file not found"
    /// ));
    /// let converted: GitslaveResult<String> =
    ///     result.with_filesystem_error("Failed to read registry", Some(PathBuf::from(".gitslave")));
    /// assert!(converted.is_err());
    /// ```
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> GitslaveResult<T>
    where
        E: Into<std::io::Error>;

    /// 内部エラーとしてGitslaveResultに変換
    fn with_internal_error(self, message: impl Into<String>) -> GitslaveResult<T>
    where
        E: std::error::Error + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> GitslaveResult<T>
    where
        E: Into<std::io::Error>,
    {
        self.map_err(|e| GitslaveError::filesystem_error_with_source(message, path, e.into()))
    }

    fn with_internal_error(self, message: impl Into<String>) -> GitslaveResult<T>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.map_err(|e| GitslaveError::internal_error_with_source(message, e))
    }
}
