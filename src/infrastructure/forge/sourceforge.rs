use super::importer::{optional_repository, ForgeImporter};
use crate::domain::entities::import_request::ImportRequest;
use crate::domain::value_objects::{access_mode::AccessMode, scm_type::ScmType};

/// SourceForge: per-project virtual hosts for each SCM
#[derive(Debug, Default, Clone, Copy)]
pub struct SourceforgeImporter;

impl ForgeImporter for SourceforgeImporter {
    fn name(&self) -> &'static str {
        "Sourceforge"
    }

    fn supports_scm(&self, scm: ScmType) -> bool {
        matches!(scm, ScmType::Hg | ScmType::Git | ScmType::Svn)
    }

    fn clone_url(&self, request: &ImportRequest, access: AccessMode) -> Option<String> {
        let project = request.project_name();
        let url = match (request.scm()?, access) {
            (ScmType::Hg, AccessMode::ReadOnly) => format!(
                "http://{project}.hg.sourceforge.net:8000/hgroot/{project}/{project}"
            ),
            (ScmType::Hg, AccessMode::Developer) => format!(
                "ssh://{}@{project}.hg.sourceforge.net/hgroot/{project}/{project}",
                request.username()
            ),
            (ScmType::Git, AccessMode::ReadOnly) => format!(
                "git://{project}.git.sourceforge.net/gitroot/{project}{}",
                optional_repository(request)
            ),
            (ScmType::Git, AccessMode::Developer) => format!(
                "ssh://{}@{project}.git.sourceforge.net/gitroot/{project}{}",
                request.username(),
                optional_repository(request)
            ),
            // Same URL for anonymous and developer access
            (ScmType::Svn, _) => format!(
                "https://{project}.svn.sourceforge.net/svnroot/{project}/{project}"
            ),
        };
        Some(url)
    }
}
