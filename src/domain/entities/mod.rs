pub mod import_request;

pub use import_request::ImportRequest;
