//! # forge-import - Source forge project importer
//!
//! `forge-import` builds the command line that checks a project out of a public
//! source forge and can run it for you. It knows the repository layout of
//! SourceForge, BerliOS, Bitbucket and Gitorious for Mercurial, Git and Subversion,
//! both for anonymous read-only check-outs and for developer access.
//!
//! ## Quick Start
//!
//! Preview the command for a project:
//!
//! ```bash
//! forge-import command paladin --provider Sourceforge --scm hg
//! ```
//!
//! Check it out into `~/projects/paladin`:
//!
//! ```bash
//! forge-import import paladin --provider Sourceforge --projects-dir ~/projects
//! ```
//!
//! ## Architecture
//!
//! The crate is organized using clean architecture principles:
//!
//! - [`domain`]: The import request and the SCM/access value objects
//! - [`application`]: Method selection, command planning and execution
//! - [`infrastructure`]: Forge URL tables, SCM probing, process execution and configuration
//! - [`presentation`]: CLI interface and user interaction
//! - [`common`]: Shared utilities and error handling
//!
//! ## Forges
//!
//! Every forge implements [`infrastructure::forge::ForgeImporter`]; the fixed set is held
//! by [`infrastructure::forge::ImporterRegistry`] in the order Sourceforge, BerliOS,
//! Bitbucket, Gitorious.
//!
//! ## Error Handling
//!
//! - [`common::error::ImportError`]: Main error type with detailed context
//! - [`common::result::ImportResult`]: Type alias for `Result<T, ImportError>`
//!
//! ## Examples
//!
//! ```rust
//! use forge_import::domain::entities::import_request::ImportRequest;
//! use forge_import::domain::value_objects::access_mode::AccessMode;
//! use forge_import::domain::value_objects::scm_type::ScmType;
//! use forge_import::infrastructure::forge::ImporterRegistry;
//!
//! # fn example() -> forge_import::Result<()> {
//! let registry = ImporterRegistry::new();
//! let gitorious = registry.resolve("Gitorious")?;
//!
//! let request = ImportRequest::new("qt")
//!     .with_repository("qt")
//!     .with_scm(Some(ScmType::Git));
//!
//! assert_eq!(
//!     gitorious.import_command(&request, AccessMode::ReadOnly),
//!     "git clone http://git.gitorious.org/qt/qt.git"
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::ImportError;
pub use crate::common::result::ImportResult as Result;
