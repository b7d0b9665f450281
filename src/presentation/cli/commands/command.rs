use anyhow::Result;
use std::sync::Arc;

use crate::application::use_cases::import_project::{ImportProjectConfig, ImportProjectUseCase};
use crate::infrastructure::scm::AssumeAvailable;
use crate::presentation::cli::OutputFormat;

/// Prints the checkout command for a project
///
/// The preview only depends on what the forge hosts, not on installed clients.
pub struct CommandCommand {
    pub config: ImportProjectConfig,
    pub output: OutputFormat,
}

impl CommandCommand {
    pub fn new(config: ImportProjectConfig, output: OutputFormat) -> Self {
        Self { config, output }
    }

    pub async fn execute(&self) -> Result<()> {
        let use_case =
            ImportProjectUseCase::new(self.config.clone()).with_probe(Arc::new(AssumeAvailable));

        let Some(plan) = use_case.plan().await? else {
            anyhow::bail!("No project name given; nothing to import");
        };

        match self.output {
            OutputFormat::Text => println!("{}", plan.command),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&plan)?),
        }
        Ok(())
    }
}
