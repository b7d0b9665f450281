use anyhow::Result;
use colored::Colorize;

use crate::application::use_cases::import_project::{ImportProjectConfig, ImportProjectUseCase};
use crate::infrastructure::process::{OutputLine, OutputStream};

/// Handler for the import command
pub struct ImportCommand {
    pub config: ImportProjectConfig,
}

impl ImportCommand {
    pub fn new(config: ImportProjectConfig) -> Self {
        Self { config }
    }

    pub async fn execute(&self) -> Result<()> {
        let use_case = ImportProjectUseCase::new(self.config.clone());

        if !self.config.dry_run {
            println!(
                "{} Importing {} from {}...",
                "::".blue().bold(),
                self.config.project_name.bold(),
                self.config.provider
            );
        }

        let outcome = use_case.execute(&print_output_line).await?;

        if outcome.execution.is_none() {
            println!("{}", outcome.plan.command);
            println!(
                "{} Dry run: nothing was checked out",
                "i".cyan().bold()
            );
            return Ok(());
        }

        println!(
            "{} Imported into {}",
            "✓".green().bold(),
            outcome.plan.destination.display()
        );
        Ok(())
    }
}

/// Relay SCM client output as it arrives
fn print_output_line(line: &OutputLine) {
    match line.stream {
        OutputStream::Stdout => println!("{}", line.text),
        OutputStream::Stderr => eprintln!("{}", line.text.dimmed()),
    }
}
