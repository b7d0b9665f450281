pub mod access_mode;
pub mod scm_type;

pub use access_mode::AccessMode;
pub use scm_type::{ScmType, ScmTypeError};
