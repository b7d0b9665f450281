/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - Forge URL layouts (SourceForge, BerliOS, Bitbucket, Gitorious)
/// - SCM client discovery
/// - File system operations (configuration file)
/// - Process execution (shell command runner)
pub mod filesystem;
pub mod forge;
pub mod process;
pub mod scm;

// Re-export commonly used types
pub use filesystem::config_store::{ConfigStore, ImportConfig};
pub use forge::{ForgeImporter, ImporterRegistry};
pub use process::{CommandExecutor, CommandRunner};
pub use scm::{ScmAvailability, ScmProbe};
