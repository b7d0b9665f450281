use super::importer::ForgeImporter;
use crate::domain::entities::import_request::ImportRequest;
use crate::domain::value_objects::{access_mode::AccessMode, scm_type::ScmType};

/// Bitbucket (Mercurial hosting). The project name is the owning account.
#[derive(Debug, Default, Clone, Copy)]
pub struct BitbucketImporter;

impl ForgeImporter for BitbucketImporter {
    fn name(&self) -> &'static str {
        "Bitbucket"
    }

    fn supports_scm(&self, scm: ScmType) -> bool {
        scm == ScmType::Hg
    }

    fn clone_url(&self, request: &ImportRequest, access: AccessMode) -> Option<String> {
        if request.scm()? != ScmType::Hg {
            return None;
        }

        let host = match access {
            AccessMode::ReadOnly => "http://bitbucket.org",
            AccessMode::Developer => "ssh://hg@bitbucket.org",
        };
        Some(format!(
            "{host}/{}/{}",
            request.project_name(),
            request.repository()
        ))
    }
}
