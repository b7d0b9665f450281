/// Forge-specific clone URL builders
///
/// Each forge knows the URL layout it uses for the SCMs it hosts.
/// The registry keeps them in a fixed order for listing and lookup.

pub mod berlios;
pub mod bitbucket;
pub mod gitorious;
pub mod importer;
pub mod registry;
pub mod sourceforge;

pub use importer::ForgeImporter;
pub use registry::ImporterRegistry;
