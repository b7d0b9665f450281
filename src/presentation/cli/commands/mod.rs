pub mod command;
pub mod import;
pub mod init;
pub mod providers;

use anyhow::Result;
use std::env;

use super::ImportArgs;
use crate::application::use_cases::import_project::ImportProjectConfig;
use crate::domain::value_objects::access_mode::AccessMode;
use crate::infrastructure::filesystem::config_store::ImportConfig;
use crate::infrastructure::forge::ImporterRegistry;

/// Merge command-line arguments over the configuration file
pub fn resolve_import_config(args: &ImportArgs, file: &ImportConfig) -> Result<ImportProjectConfig> {
    let provider = match args.provider.as_ref().or(file.provider.as_ref()) {
        Some(provider) => provider.clone(),
        None => ImporterRegistry::new()
            .importer_at(0)
            .map(|importer| importer.name().to_string())
            .unwrap_or_default(),
    };

    let access = if args.developer {
        AccessMode::Developer
    } else if args.read_only {
        AccessMode::ReadOnly
    } else {
        AccessMode::from_anonymous(file.anonymous.unwrap_or(true))
    };

    let projects_dir = match args.projects_dir.clone().or_else(|| file.resolved_projects_dir()) {
        Some(dir) => dir,
        None => env::current_dir()?,
    };

    Ok(ImportProjectConfig::new(provider, &args.project)
        .with_repository(&args.repository)
        .with_username(
            args.username
                .clone()
                .or_else(|| file.username.clone())
                .unwrap_or_default(),
        )
        .with_scm(args.scm.or(file.scm))
        .with_access(access)
        .with_target_path(args.path.clone())
        .with_projects_dir(projects_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::scm_type::ScmType;
    use std::path::PathBuf;

    fn args(project: &str) -> ImportArgs {
        ImportArgs {
            project: project.to_string(),
            provider: None,
            scm: None,
            repository: String::new(),
            username: None,
            developer: false,
            read_only: false,
            path: None,
            projects_dir: Some(PathBuf::from("/work")),
        }
    }

    #[test]
    fn test_defaults_without_configuration() {
        let config = resolve_import_config(&args("paladin"), &ImportConfig::default()).unwrap();
        assert_eq!(config.provider, "Sourceforge");
        assert_eq!(config.access, AccessMode::ReadOnly);
        assert_eq!(config.scm, None);
        assert_eq!(config.destination(), PathBuf::from("/work/paladin"));
    }

    #[test]
    fn test_file_values_fill_gaps() {
        let file = ImportConfig {
            provider: Some("BerliOS".to_string()),
            scm: Some(ScmType::Svn),
            username: Some("bob".to_string()),
            anonymous: Some(false),
            ..ImportConfig::default()
        };

        let config = resolve_import_config(&args("haiku"), &file).unwrap();
        assert_eq!(config.provider, "BerliOS");
        assert_eq!(config.scm, Some(ScmType::Svn));
        assert_eq!(config.username, "bob");
        assert_eq!(config.access, AccessMode::Developer);
    }

    #[test]
    fn test_arguments_override_file() {
        let file = ImportConfig {
            provider: Some("BerliOS".to_string()),
            anonymous: Some(false),
            projects_dir: Some(PathBuf::from("/ignored")),
            ..ImportConfig::default()
        };
        let mut cli_args = args("qt");
        cli_args.provider = Some("Gitorious".to_string());
        cli_args.read_only = true;

        let config = resolve_import_config(&cli_args, &file).unwrap();
        assert_eq!(config.provider, "Gitorious");
        assert_eq!(config.access, AccessMode::ReadOnly);
        assert_eq!(config.projects_dir, PathBuf::from("/work"));
    }
}
