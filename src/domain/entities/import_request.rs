use crate::common::error::ImportError;
use crate::common::result::ImportResult;
use crate::domain::value_objects::scm_type::ScmType;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// URLの一部として埋め込まれるフィールドに許可される文字
fn segment_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._~+-]*$").expect("segment pattern is valid")
    })
}

/// インポート対象プロジェクトの情報
///
/// フォージ別のコマンドビルダーに渡される入力一式。
/// テキストフィールドはすべて空文字列がデフォルトで、SCMは未選択。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRequest {
    /// プロジェクト名（フォージ上のUNIX名）
    project_name: String,

    /// 開発者モードでURLに埋め込まれるユーザー名
    username: String,

    /// リモートのURL
    url: String,

    /// プロジェクト内のリポジトリ名（またはオーナー名）
    repository: String,

    /// チェックアウト先のパス
    path: String,

    /// 使用するSCM
    scm: Option<ScmType>,
}

impl ImportRequest {
    /// 新しいImportRequestインスタンスを作成
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Self::default()
        }
    }

    /// プロジェクト名を設定
    pub fn with_project_name(mut self, project_name: impl Into<String>) -> Self {
        self.project_name = project_name.into();
        self
    }

    /// ユーザー名を設定
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// URLを設定
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// リポジトリ名を設定
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = repository.into();
        self
    }

    /// チェックアウト先を設定
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// SCMを設定
    pub fn with_scm(mut self, scm: Option<ScmType>) -> Self {
        self.scm = scm;
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn scm(&self) -> Option<ScmType> {
        self.scm
    }

    pub fn has_repository(&self) -> bool {
        !self.repository.is_empty()
    }

    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    /// 選択中のSCMの実行ファイル名（未選択なら空文字列）
    pub fn scm_command(&self) -> &'static str {
        self.scm.map(|scm| scm.executable_name()).unwrap_or("")
    }

    /// シェルに渡す前の入力チェック
    ///
    /// コマンドはシングルクォートで囲んだパス以外をそのまま連結するため、
    /// URLの一部になるフィールドは英数字と `._~+-` に限定する。
    pub fn validate(&self) -> ImportResult<()> {
        if self.project_name.is_empty() {
            return Err(ImportError::validation_error(
                "project",
                "project name must not be empty",
                None,
            ));
        }

        let segments = [
            ("project", &self.project_name),
            ("username", &self.username),
            ("repository", &self.repository),
        ];
        for (field, value) in segments {
            if !value.is_empty() && !segment_pattern().is_match(value) {
                return Err(ImportError::validation_error(
                    field,
                    "only letters, digits and '._~+-' are allowed",
                    Some(value.to_string()),
                ));
            }
        }

        if self.path.contains('\'') || self.path.chars().any(char::is_control) {
            return Err(ImportError::validation_error(
                "path",
                "path must not contain quotes or control characters",
                Some(self.path.clone()),
            ));
        }

        Ok(())
    }
}
