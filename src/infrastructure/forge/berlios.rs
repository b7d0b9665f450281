use super::importer::{optional_repository, ForgeImporter};
use crate::domain::entities::import_request::ImportRequest;
use crate::domain::value_objects::{access_mode::AccessMode, scm_type::ScmType};

/// BerliOS: one shared host per SCM
#[derive(Debug, Default, Clone, Copy)]
pub struct BerliosImporter;

impl ForgeImporter for BerliosImporter {
    fn name(&self) -> &'static str {
        "BerliOS"
    }

    fn supports_scm(&self, scm: ScmType) -> bool {
        matches!(scm, ScmType::Hg | ScmType::Git | ScmType::Svn)
    }

    fn clone_url(&self, request: &ImportRequest, access: AccessMode) -> Option<String> {
        let project = request.project_name();
        let username = request.username();
        let url = match (request.scm()?, access) {
            (ScmType::Hg, AccessMode::ReadOnly) => {
                format!("http://hg.berlios.de/repos/{project}")
            }
            (ScmType::Hg, AccessMode::Developer) => {
                format!("https://{username}@hg.berlios.de/repos/{project}")
            }
            (ScmType::Git, AccessMode::ReadOnly) => {
                format!("git://git.berlios.de/{project}{}", optional_repository(request))
            }
            (ScmType::Git, AccessMode::Developer) => format!(
                "ssh://{username}@git.berlios.de/{project}{}",
                optional_repository(request)
            ),
            // The repository segment is always present for svn
            (ScmType::Svn, AccessMode::ReadOnly) => {
                format!("svn://svn.berlios.de/{project}/{}", request.repository())
            }
            (ScmType::Svn, AccessMode::Developer) => format!(
                "svn+ssh://{username}@svn.berlios.de/svnroot/repos/{project}/{}",
                request.repository()
            ),
        };
        Some(url)
    }
}
