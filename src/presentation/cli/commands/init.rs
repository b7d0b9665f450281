use anyhow::Result;
use std::path::PathBuf;

use crate::infrastructure::filesystem::config_store::ConfigStore;

/// Write a configuration file template
pub struct InitCommand {
    /// Where to create the configuration file
    pub path: PathBuf,
    /// Force overwrite existing file
    pub force: bool,
}

impl InitCommand {
    pub fn new(path: PathBuf, force: bool) -> Self {
        Self { path, force }
    }

    /// Execute the init command
    pub async fn execute(&self) -> Result<()> {
        ConfigStore::new().init(&self.path, self.force)?;

        println!("✅ Successfully created configuration template");
        println!("📁 Location: {}", self.path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Set your username and projects directory");
        println!("   2. Run 'forge-import providers' to see what each forge hosts");
        println!("   3. Run 'forge-import command <project>' to preview a checkout");

        Ok(())
    }
}
