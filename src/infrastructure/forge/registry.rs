use super::berlios::BerliosImporter;
use super::bitbucket::BitbucketImporter;
use super::gitorious::GitoriousImporter;
use super::importer::ForgeImporter;
use super::sourceforge::SourceforgeImporter;
use crate::common::error::ImportError;
use crate::common::result::{ImportResult, OptionExt};

/// Fixed, ordered list of the known forges
pub struct ImporterRegistry {
    importers: Vec<Box<dyn ForgeImporter>>,
}

impl Default for ImporterRegistry {
    fn default() -> Self {
        Self {
            importers: vec![
                Box::new(SourceforgeImporter),
                Box::new(BerliosImporter),
                Box::new(BitbucketImporter),
                Box::new(GitoriousImporter),
            ],
        }
    }
}

impl ImporterRegistry {
    /// Create the registry with every built-in forge
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered importers
    pub fn count(&self) -> usize {
        self.importers.len()
    }

    /// Importer at `index`, in registration order
    pub fn importer_at(&self, index: usize) -> Option<&dyn ForgeImporter> {
        self.importers.get(index).map(|importer| importer.as_ref())
    }

    /// Find an importer by its exact name. An empty name never matches.
    pub fn find(&self, name: &str) -> Option<&dyn ForgeImporter> {
        if name.is_empty() {
            return None;
        }
        self.iter().find(|importer| importer.name() == name)
    }

    /// Case-insensitive lookup for names typed on the command line
    pub fn find_ignore_case(&self, name: &str) -> Option<&dyn ForgeImporter> {
        if name.is_empty() {
            return None;
        }
        self.find(name)
            .or_else(|| self.iter().find(|importer| importer.name().eq_ignore_ascii_case(name)))
    }

    /// Like [`find_ignore_case`](Self::find_ignore_case), failing with the list of known names
    pub fn resolve(&self, name: &str) -> ImportResult<&dyn ForgeImporter> {
        self.find_ignore_case(name)
            .ok_or_import(ImportError::provider_not_found(name, &self.names()))
    }

    /// Importer names in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|importer| importer.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ForgeImporter> {
        self.importers.iter().map(|importer| importer.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::scm_type::ScmType;

    #[test]
    fn test_registry_order() {
        let registry = ImporterRegistry::new();
        assert_eq!(registry.count(), 4);
        assert_eq!(
            registry.names(),
            vec!["Sourceforge", "BerliOS", "Bitbucket", "Gitorious"]
        );
    }

    #[test]
    fn test_importer_at() {
        let registry = ImporterRegistry::new();
        assert_eq!(registry.importer_at(0).unwrap().name(), "Sourceforge");
        assert_eq!(registry.importer_at(3).unwrap().name(), "Gitorious");
        assert!(registry.importer_at(4).is_none());
    }

    #[test]
    fn test_find_is_exact() {
        let registry = ImporterRegistry::new();
        assert_eq!(registry.find("BerliOS").unwrap().name(), "BerliOS");
        assert!(registry.find("berlios").is_none());
        assert!(registry.find("").is_none());
        assert!(registry.find("GitHub").is_none());
    }

    #[test]
    fn test_find_ignore_case() {
        let registry = ImporterRegistry::new();
        assert_eq!(registry.find_ignore_case("berlios").unwrap().name(), "BerliOS");
        assert_eq!(
            registry.find_ignore_case("SOURCEFORGE").unwrap().name(),
            "Sourceforge"
        );
        assert!(registry.find_ignore_case("").is_none());
    }

    #[test]
    fn test_resolve_unknown_provider() {
        let registry = ImporterRegistry::new();
        let err = registry.resolve("GitHub").err().unwrap();
        assert_eq!(
            err.to_string(),
            "Unknown provider: 'GitHub'. Available providers: Sourceforge, BerliOS, Bitbucket, Gitorious"
        );
    }

    #[test]
    fn test_supported_scm_matrix() {
        let registry = ImporterRegistry::new();
        let matrix: Vec<(&str, Vec<ScmType>)> = registry
            .iter()
            .map(|importer| (importer.name(), importer.supported_scms()))
            .collect();

        assert_eq!(
            matrix,
            vec![
                ("Sourceforge", vec![ScmType::Hg, ScmType::Git, ScmType::Svn]),
                ("BerliOS", vec![ScmType::Hg, ScmType::Git, ScmType::Svn]),
                ("Bitbucket", vec![ScmType::Hg]),
                ("Gitorious", vec![ScmType::Git]),
            ]
        );
    }
}
