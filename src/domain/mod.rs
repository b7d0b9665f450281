//! Domain layer: the values describing what is imported and how

pub mod entities;
pub mod value_objects;
