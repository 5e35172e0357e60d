//! HTTP client adapter for the external presentation service.

pub mod http_creator;

pub use http_creator::HttpPresentationCreator;
