use crate::domain::value_objects::scm_type::ScmType;
use crate::infrastructure::forge::ImporterRegistry;
use serde::{Deserialize, Serialize};

/// One provider as shown in the provider list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub name: String,
    /// SCMs the forge hosts
    pub supported: Vec<ScmType>,
    /// Hosted SCMs whose client is installed
    pub usable: Vec<ScmType>,
}

/// Describe every registered provider, in registry order
pub fn list_providers(registry: &ImporterRegistry, available: &[ScmType]) -> Vec<ProviderInfo> {
    registry
        .iter()
        .map(|importer| {
            let supported = importer.supported_scms();
            let usable = supported
                .iter()
                .copied()
                .filter(|scm| available.contains(scm))
                .collect();
            ProviderInfo {
                name: importer.name().to_string(),
                supported,
                usable,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_providers_with_only_git_installed() {
        let providers = list_providers(&ImporterRegistry::new(), &[ScmType::Git]);

        let names: Vec<&str> = providers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Sourceforge", "BerliOS", "Bitbucket", "Gitorious"]);

        assert_eq!(providers[0].usable, vec![ScmType::Git]);
        assert!(providers[2].usable.is_empty());
        assert_eq!(providers[2].supported, vec![ScmType::Hg]);
        assert_eq!(providers[3].usable, vec![ScmType::Git]);
    }

    #[test]
    fn test_provider_info_json() {
        let providers = list_providers(&ImporterRegistry::new(), &ScmType::all());
        let json = serde_json::to_value(&providers[3]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Gitorious", "supported": ["git"], "usable": ["git"]})
        );
    }
}
