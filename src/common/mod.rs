//! Shared error types, result helpers and embedded templates

pub mod error;
pub mod result;
pub mod templates;
