//! Application layer: the import workflow built on the forge registry

pub mod use_cases;
