use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SCM (Source Control Management) system type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScmType {
    /// Mercurial version control system
    Hg,
    /// Git version control system
    Git,
    /// Subversion (SVN) version control system
    Svn,
}

impl fmt::Display for ScmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.executable_name())
    }
}

impl FromStr for ScmType {
    type Err = ScmTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hg" | "mercurial" => Ok(ScmType::Hg),
            "git" => Ok(ScmType::Git),
            "svn" | "subversion" => Ok(ScmType::Svn),
            _ => Err(ScmTypeError::UnsupportedScmType(s.to_string())),
        }
    }
}

impl ScmType {
    /// All SCM types, in the order they are offered to the user
    pub fn all() -> [ScmType; 3] {
        [ScmType::Hg, ScmType::Git, ScmType::Svn]
    }

    /// Get the standard executable name for this SCM
    pub fn executable_name(&self) -> &'static str {
        match self {
            ScmType::Hg => "hg",
            ScmType::Git => "git",
            ScmType::Svn => "svn",
        }
    }

    /// Human readable name, as shown in method lists
    pub fn display_name(&self) -> &'static str {
        match self {
            ScmType::Hg => "Mercurial",
            ScmType::Git => "Git",
            ScmType::Svn => "Subversion",
        }
    }

    /// Subcommand used to obtain a working copy
    pub fn checkout_verb(&self) -> &'static str {
        match self {
            ScmType::Hg | ScmType::Git => "clone",
            ScmType::Svn => "co",
        }
    }

    /// Get the metadata directory name for this SCM
    pub fn metadata_dir(&self) -> &'static str {
        match self {
            ScmType::Hg => ".hg",
            ScmType::Git => ".git",
            ScmType::Svn => ".svn",
        }
    }
}

/// Errors that can occur when working with SCM types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScmTypeError {
    /// The specified SCM type is not supported
    #[error("Unsupported SCM type: '{0}'. Supported types are: hg, git, svn")]
    UnsupportedScmType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scm_type_from_str() {
        assert_eq!("hg".parse::<ScmType>().unwrap(), ScmType::Hg);
        assert_eq!("Mercurial".parse::<ScmType>().unwrap(), ScmType::Hg);
        assert_eq!("git".parse::<ScmType>().unwrap(), ScmType::Git);
        assert_eq!("GIT".parse::<ScmType>().unwrap(), ScmType::Git);
        assert_eq!("svn".parse::<ScmType>().unwrap(), ScmType::Svn);
        assert_eq!("subversion".parse::<ScmType>().unwrap(), ScmType::Svn);

        assert!("p4".parse::<ScmType>().is_err());
        assert!("".parse::<ScmType>().is_err());
    }

    #[test]
    fn test_scm_type_display() {
        assert_eq!(ScmType::Hg.to_string(), "hg");
        assert_eq!(ScmType::Git.to_string(), "git");
        assert_eq!(ScmType::Svn.to_string(), "svn");
    }

    #[test]
    fn test_display_names_follow_menu_order() {
        let names: Vec<&str> = ScmType::all().iter().map(|s| s.display_name()).collect();
        assert_eq!(names, vec!["Mercurial", "Git", "Subversion"]);
    }

    #[test]
    fn test_checkout_verbs() {
        assert_eq!(ScmType::Hg.checkout_verb(), "clone");
        assert_eq!(ScmType::Git.checkout_verb(), "clone");
        assert_eq!(ScmType::Svn.checkout_verb(), "co");
    }

    #[test]
    fn test_scm_metadata_dirs() {
        assert_eq!(ScmType::Hg.metadata_dir(), ".hg");
        assert_eq!(ScmType::Git.metadata_dir(), ".git");
        assert_eq!(ScmType::Svn.metadata_dir(), ".svn");
    }

    #[test]
    fn test_unsupported_error_message() {
        let err = "cvs".parse::<ScmType>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported SCM type: 'cvs'. Supported types are: hg, git, svn"
        );
    }

    #[test]
    fn test_serde() {
        let hg = ScmType::Hg;
        let json = serde_json::to_string(&hg).unwrap();
        assert_eq!(json, "\"hg\"");

        let deserialized: ScmType = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, ScmType::Hg);
    }
}
