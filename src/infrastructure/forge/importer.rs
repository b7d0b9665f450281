use crate::domain::entities::import_request::ImportRequest;
use crate::domain::value_objects::{access_mode::AccessMode, scm_type::ScmType};

/// Knowledge of one forge's repository URL layout
///
/// Implementations only describe where a project lives. The command itself is
/// assembled by [`ForgeImporter::import_command`] so every forge quotes the
/// target path the same way.
pub trait ForgeImporter: Send + Sync {
    /// Display name of the forge
    fn name(&self) -> &'static str;

    /// Whether the forge hosts repositories of this SCM
    fn supports_scm(&self, scm: ScmType) -> bool;

    /// Remote URL for the request's SCM, or `None` if the forge does not host it
    fn clone_url(&self, request: &ImportRequest, access: AccessMode) -> Option<String>;

    /// SCMs this forge hosts, in menu order
    fn supported_scms(&self) -> Vec<ScmType> {
        ScmType::all()
            .into_iter()
            .filter(|scm| self.supports_scm(*scm))
            .collect()
    }

    /// Full shell command that checks the project out
    ///
    /// Empty when no SCM is selected or the forge does not host the selected one.
    fn import_command(&self, request: &ImportRequest, access: AccessMode) -> String {
        let Some(scm) = request.scm() else {
            return String::new();
        };
        let Some(url) = self.clone_url(request, access) else {
            return String::new();
        };

        let mut command = format!("{} {} {}", scm.executable_name(), scm.checkout_verb(), url);
        if request.has_path() {
            command.push_str(&format!(" '{}'", request.path()));
        }
        command
    }
}

/// `/<repository>` when a repository is set, empty otherwise
pub(super) fn optional_repository(request: &ImportRequest) -> String {
    if request.has_repository() {
        format!("/{}", request.repository())
    } else {
        String::new()
    }
}
