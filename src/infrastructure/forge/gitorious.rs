use super::importer::ForgeImporter;
use crate::domain::entities::import_request::ImportRequest;
use crate::domain::value_objects::{access_mode::AccessMode, scm_type::ScmType};

/// Gitorious (Git hosting)
#[derive(Debug, Default, Clone, Copy)]
pub struct GitoriousImporter;

impl ForgeImporter for GitoriousImporter {
    fn name(&self) -> &'static str {
        "Gitorious"
    }

    fn supports_scm(&self, scm: ScmType) -> bool {
        scm == ScmType::Git
    }

    fn clone_url(&self, request: &ImportRequest, access: AccessMode) -> Option<String> {
        if request.scm()? != ScmType::Git {
            return None;
        }

        let scheme = match access {
            AccessMode::ReadOnly => "http",
            AccessMode::Developer => "git",
        };
        Some(format!(
            "{scheme}://git.gitorious.org/{}/{}.git",
            request.project_name(),
            request.repository()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commands() {
        let request = ImportRequest::new("qt")
            .with_repository("qt-creator")
            .with_scm(Some(ScmType::Git));

        assert_eq!(
            GitoriousImporter.import_command(&request, AccessMode::ReadOnly),
            "git clone http://git.gitorious.org/qt/qt-creator.git"
        );
        assert_eq!(
            GitoriousImporter.import_command(&request, AccessMode::Developer),
            "git clone git://git.gitorious.org/qt/qt-creator.git"
        );
    }

    #[test]
    fn test_path_appended_after_url() {
        let request = ImportRequest::new("qt")
            .with_repository("qt")
            .with_path("/src/qt")
            .with_scm(Some(ScmType::Git));
        assert_eq!(
            GitoriousImporter.import_command(&request, AccessMode::ReadOnly),
            "git clone http://git.gitorious.org/qt/qt.git '/src/qt'"
        );
    }

    #[test]
    fn test_hg_and_svn_are_unsupported() {
        for scm in [ScmType::Hg, ScmType::Svn] {
            let request = ImportRequest::new("qt").with_scm(Some(scm));
            assert_eq!(GitoriousImporter.clone_url(&request, AccessMode::ReadOnly), None);
            assert_eq!(GitoriousImporter.import_command(&request, AccessMode::Developer), "");
        }
    }
}
