pub mod import_project;
pub mod list_providers;
