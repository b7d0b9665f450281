use crate::common::error::ImportError;
use crate::common::result::{ImportResult, OptionExt, ResultExt};
use crate::domain::entities::import_request::ImportRequest;
use crate::domain::value_objects::{access_mode::AccessMode, scm_type::ScmType};
use crate::infrastructure::forge::{ForgeImporter, ImporterRegistry};
use crate::infrastructure::process::{
    CommandExecutor, CommandRunner, ExecutionConfig, ExecutionResult, OutputLine,
};
use crate::infrastructure::scm::{ScmAvailability, ScmProbe};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// インポートの設定
#[derive(Debug, Clone)]
pub struct ImportProjectConfig {
    /// プロバイダー名
    pub provider: String,

    /// プロジェクト名
    pub project_name: String,

    /// リポジトリ名（またはオーナー名）
    pub repository: String,

    /// 開発者モードで使うユーザー名
    pub username: String,

    /// 希望するSCM（Noneなら最初に使えるもの）
    pub scm: Option<ScmType>,

    /// 読み取り専用か開発者アクセスか
    pub access: AccessMode,

    /// 明示的なチェックアウト先
    pub target_path: Option<PathBuf>,

    /// チェックアウト先の親ディレクトリ
    pub projects_dir: PathBuf,

    /// SCMクライアントのタイムアウト（秒）
    pub timeout_seconds: Option<u64>,

    /// コマンドを実行せずに計画だけ返すか
    pub dry_run: bool,
}

impl ImportProjectConfig {
    pub fn new(provider: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            project_name: project_name.into(),
            repository: String::new(),
            username: String::new(),
            scm: None,
            access: AccessMode::ReadOnly,
            target_path: None,
            projects_dir: PathBuf::from("."),
            timeout_seconds: None,
            dry_run: false,
        }
    }

    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = repository.into();
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_scm(mut self, scm: Option<ScmType>) -> Self {
        self.scm = scm;
        self
    }

    pub fn with_access(mut self, access: AccessMode) -> Self {
        self.access = access;
        self
    }

    pub fn with_target_path(mut self, target_path: Option<PathBuf>) -> Self {
        self.target_path = target_path;
        self
    }

    pub fn with_projects_dir(mut self, projects_dir: impl Into<PathBuf>) -> Self {
        self.projects_dir = projects_dir.into();
        self
    }

    pub fn with_timeout(mut self, timeout_seconds: Option<u64>) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// チェックアウト先: 明示されたパス、なければ `<projects_dir>/<project>`
    pub fn destination(&self) -> PathBuf {
        match &self.target_path {
            Some(path) => path.clone(),
            None => self.projects_dir.join(&self.project_name),
        }
    }
}

/// 相対パスをカレントディレクトリ基準の絶対パスにする
///
/// コマンドは親ディレクトリで実行されるため、チェックアウト先は常に絶対パスで渡す。
fn absolute_path(path: PathBuf) -> ImportResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    let current_dir = std::env::current_dir()
        .with_filesystem_error("Failed to read the current directory", None)?;
    Ok(current_dir.join(path))
}

/// SCM選択肢の一つ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodEntry {
    pub scm: ScmType,
    /// クライアントがインストール済みかつプロバイダーが対応している
    pub enabled: bool,
}

/// プロバイダーに対するSCM選択の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSelection {
    /// インストール済みのSCM（メニュー順）
    pub entries: Vec<MethodEntry>,
    /// 実際に使うSCM
    pub selected: ScmType,
}

/// Pick the SCM to use with `importer`
///
/// Only installed clients are listed, and an entry is enabled when the forge
/// hosts it. A requested SCM that is not enabled falls back to the first
/// enabled entry.
pub fn select_method(
    importer: &dyn ForgeImporter,
    requested: Option<ScmType>,
    available: &[ScmType],
) -> ImportResult<MethodSelection> {
    let entries: Vec<MethodEntry> = ScmType::all()
        .into_iter()
        .filter(|scm| available.contains(scm))
        .map(|scm| MethodEntry {
            scm,
            enabled: importer.supports_scm(scm),
        })
        .collect();

    let is_enabled = |scm: ScmType| entries.iter().any(|e| e.scm == scm && e.enabled);

    let selected = match requested {
        Some(scm) if is_enabled(scm) => Some(scm),
        _ => entries.iter().find(|e| e.enabled).map(|e| e.scm),
    }
    .ok_or_import(ImportError::no_supported_scm(importer.name()))?;

    if let Some(requested) = requested {
        if requested != selected {
            tracing::warn!(
                "{} is not usable with {}, using {} instead",
                requested.display_name(),
                importer.name(),
                selected.display_name()
            );
        }
    }

    Ok(MethodSelection { entries, selected })
}

/// 実行予定のインポート
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportPlan {
    pub provider: String,
    pub scm: ScmType,
    pub access: AccessMode,
    pub clone_url: String,
    /// URLのホスト部分（解析できた場合）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_host: Option<String>,
    pub destination: PathBuf,
    pub command: String,
}

/// インポートの結果
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub plan: ImportPlan,
    /// ドライランの場合はNone
    pub execution: Option<ExecutionResult>,
}

/// Builds the checkout command for a project and optionally runs it
pub struct ImportProjectUseCase {
    config: ImportProjectConfig,
    registry: ImporterRegistry,
    probe: Arc<dyn ScmAvailability>,
    runner: Arc<dyn CommandRunner>,
}

impl ImportProjectUseCase {
    /// Use the real SCM probe and shell runner
    pub fn new(config: ImportProjectConfig) -> Self {
        Self {
            config,
            registry: ImporterRegistry::new(),
            probe: Arc::new(ScmProbe::new()),
            runner: Arc::new(CommandExecutor),
        }
    }

    pub fn with_probe(mut self, probe: Arc<dyn ScmAvailability>) -> Self {
        self.probe = probe;
        self
    }

    pub fn with_runner(mut self, runner: Arc<dyn CommandRunner>) -> Self {
        self.runner = runner;
        self
    }

    pub fn config(&self) -> &ImportProjectConfig {
        &self.config
    }

    /// Work out the command without running anything
    ///
    /// Returns `None` while the project name is empty: there is nothing to import yet.
    pub async fn plan(&self) -> ImportResult<Option<ImportPlan>> {
        let importer = self.registry.resolve(&self.config.provider)?;

        if self.config.project_name.is_empty() {
            tracing::debug!("No project name, no command");
            return Ok(None);
        }

        let available = self.probe.available_scms().await;
        tracing::debug!("Installed SCM clients: {:?}", available);
        let selection = select_method(importer, self.config.scm, &available)?;
        let scm = selection.selected;

        let destination = absolute_path(self.config.destination())?;
        let request = ImportRequest::new(&self.config.project_name)
            .with_username(&self.config.username)
            .with_repository(&self.config.repository)
            .with_path(destination.display().to_string())
            .with_scm(Some(scm));
        request.validate()?;

        if self.config.access == AccessMode::Developer && request.username().is_empty() {
            tracing::warn!("Developer access without a username");
        }

        let access = self.config.access;
        let unsupported = || ImportError::unsupported_combination(importer.name(), scm);

        let clone_url = importer
            .clone_url(&request, access)
            .ok_or_else(unsupported)?;
        let request = request.with_url(&clone_url);

        let command = importer.import_command(&request, access);
        if command.is_empty() {
            return Err(unsupported());
        }

        let remote_host = url::Url::parse(request.url())
            .ok()
            .and_then(|url| url.host_str().map(str::to_string));

        Ok(Some(ImportPlan {
            provider: importer.name().to_string(),
            scm,
            access,
            clone_url,
            remote_host,
            destination,
            command,
        }))
    }

    /// Build the command and run it through the shell, streaming its output
    pub async fn execute(
        &self,
        on_line: &(dyn for<'a> Fn(&'a OutputLine) + Send + Sync),
    ) -> ImportResult<ImportOutcome> {
        let plan = self
            .plan()
            .await?
            .ok_or_validation_error("project", "project name must not be empty")?;

        if self.config.dry_run {
            tracing::info!("Dry run: {}", plan.command);
            return Ok(ImportOutcome {
                plan,
                execution: None,
            });
        }

        if let Some(existing) = ScmProbe::detect_scm_type(&plan.destination) {
            return Err(ImportError::filesystem_error(
                format!(
                    "{} already contains a {} working copy",
                    plan.destination.display(),
                    existing.display_name()
                ),
                Some(plan.destination.clone()),
            ));
        }

        let parent = plan
            .destination
            .parent()
            .map(|p| p.to_path_buf())
            .ok_or_else(|| {
                ImportError::filesystem_error(
                    format!("{} has no parent directory", plan.destination.display()),
                    Some(plan.destination.clone()),
                )
            })?;
        std::fs::create_dir_all(&parent).with_filesystem_error(
            format!("Failed to create {}", parent.display()),
            Some(parent.clone()),
        )?;

        let mut exec_config = ExecutionConfig::new().with_working_directory(&parent);
        if let Some(timeout_seconds) = self.config.timeout_seconds {
            exec_config = exec_config.with_timeout(timeout_seconds);
        }

        tracing::info!("Running: {}", plan.command);
        let result = self
            .runner
            .run(&plan.command, &exec_config, on_line)
            .await
            .map_err(|e| {
                ImportError::command_error_with_source(
                    format!("Failed to run {}", plan.scm.executable_name()),
                    &plan.command,
                    e,
                )
            })?;

        if !result.success {
            return Err(ImportError::command_error(
                format!(
                    "{} exited with code {}",
                    plan.scm.executable_name(),
                    result.exit_code
                ),
                &plan.command,
                Some(result.exit_code),
            ));
        }

        tracing::info!(
            "Imported {} into {} in {}ms",
            self.config.project_name,
            plan.destination.display(),
            result.execution_time_ms
        );

        Ok(ImportOutcome {
            plan,
            execution: Some(result),
        })
    }
}
