use crate::domain::value_objects::scm_type::ScmType;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Reports which SCM clients can be used on this machine
#[async_trait]
pub trait ScmAvailability: Send + Sync {
    /// Whether the client for `scm` can be executed
    async fn is_available(&self, scm: ScmType) -> bool;

    /// Installed SCM clients, in menu order
    async fn available_scms(&self) -> Vec<ScmType> {
        let mut available = Vec::new();
        for scm in ScmType::all() {
            if self.is_available(scm).await {
                available.push(scm);
            }
        }
        available
    }
}

/// Probes the `PATH` by running `<executable> --version`
#[derive(Debug, Default, Clone, Copy)]
pub struct ScmProbe;

impl ScmProbe {
    pub fn new() -> Self {
        Self
    }

    /// Detect which SCM manages an existing working copy
    pub fn detect_scm_type(path: &Path) -> Option<ScmType> {
        ScmType::all()
            .into_iter()
            .find(|scm| path.join(scm.metadata_dir()).exists())
    }
}

#[async_trait]
impl ScmAvailability for ScmProbe {
    async fn is_available(&self, scm: ScmType) -> bool {
        let executable = scm.executable_name();
        let output = Command::new(executable)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        match output {
            Ok(output) if output.status.success() => true,
            Ok(output) => {
                tracing::debug!("{} --version exited with {}", executable, output.status);
                false
            }
            Err(e) => {
                tracing::debug!("{} is not available: {}", executable, e);
                false
            }
        }
    }
}

/// Treats every client as installed; used when only previewing commands
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeAvailable;

#[async_trait]
impl ScmAvailability for AssumeAvailable {
    async fn is_available(&self, _scm: ScmType) -> bool {
        true
    }
}
