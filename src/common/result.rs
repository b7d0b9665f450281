use crate::common::error::ImportError;

/// プロジェクト全体で使用するResult型のエイリアス
///
/// # Examples
///
/// ```
/// use forge_import::common::result::ImportResult;
/// use forge_import::common::error::ImportError;
///
/// fn example_function() -> ImportResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> ImportResult<()> {
///     Err(ImportError::no_supported_scm("Gitorious"))
/// }
/// ```
pub type ImportResult<T> = Result<T, ImportError>;

/// Optionのエラー変換ヘルパー
pub trait OptionExt<T> {
    /// OptionをImportResultに変換する
    ///
    /// # Examples
    ///
    /// ```
    /// use forge_import::common::result::{ImportResult, OptionExt};
    /// use forge_import::common::error::ImportError;
    ///
    /// let none_value: Option<String> = None;
    /// let result: ImportResult<String> = none_value.ok_or_import(
    ///     ImportError::provider_not_found("Launchpad", &["Sourceforge"])
    /// );
    /// assert!(result.is_err());
    /// ```
    fn ok_or_import(self, error: ImportError) -> ImportResult<T>;

    /// Option値をValidationErrorに変換する
    fn ok_or_validation_error(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> ImportResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_import(self, error: ImportError) -> ImportResult<T> {
        self.ok_or(error)
    }

    fn ok_or_validation_error(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> ImportResult<T> {
        self.ok_or_else(|| ImportError::validation_error(field, message, None))
    }
}

/// Resultのエラー変換ヘルパー
pub trait ResultExt<T, E> {
    /// ファイルシステムエラーとしてImportResultに変換
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> ImportResult<T>
    where
        E: Into<std::io::Error>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> ImportResult<T>
    where
        E: Into<std::io::Error>,
    {
        self.map_err(|e| {
            let io_error = e.into();
            ImportError::filesystem_error_with_source(message, path, io_error)
        })
    }
}
