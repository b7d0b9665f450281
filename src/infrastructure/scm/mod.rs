/// SCM client discovery
///
/// Finds out which of the hg, git and svn clients are installed.

pub mod scm_probe;

pub use scm_probe::{AssumeAvailable, ScmAvailability, ScmProbe};
