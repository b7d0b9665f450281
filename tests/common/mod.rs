//! Common test utilities and helpers
//!
//! Shared fakes for the SCM probe and the command runner, so the import
//! workflow can be exercised without any SCM client installed.

pub mod mock_services;
