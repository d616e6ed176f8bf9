//! Custom Axum extractors.

pub mod internal;
pub mod json;
pub mod viewer;

pub use internal::InternalCaller;
pub use json::ApiJson;
pub use viewer::Viewer;
