use anyhow::Result;
use colored::Colorize;

use crate::application::use_cases::list_providers::{list_providers, ProviderInfo};
use crate::infrastructure::forge::ImporterRegistry;
use crate::infrastructure::scm::{ScmAvailability, ScmProbe};
use crate::presentation::cli::OutputFormat;

/// Handler for the providers command
pub struct ProvidersCommand {
    pub output: OutputFormat,
}

impl ProvidersCommand {
    pub fn new(output: OutputFormat) -> Self {
        Self { output }
    }

    pub async fn execute(&self) -> Result<()> {
        let available = ScmProbe::new().available_scms().await;
        let providers = list_providers(&ImporterRegistry::new(), &available);

        match self.output {
            OutputFormat::Text => self.print_text(&providers),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&providers)?),
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&providers)?),
        }
        Ok(())
    }

    fn print_text(&self, providers: &[ProviderInfo]) {
        for provider in providers {
            let methods: Vec<String> = provider
                .supported
                .iter()
                .map(|scm| {
                    if provider.usable.contains(scm) {
                        scm.display_name().green().to_string()
                    } else {
                        format!("{} (not installed)", scm.display_name())
                            .dimmed()
                            .to_string()
                    }
                })
                .collect();
            println!("{:<12} {}", provider.name.bold(), methods.join(", "));
        }
    }
}
