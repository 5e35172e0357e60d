//! PostgreSQL adapter.

pub mod presentation_store;

pub use presentation_store::{ensure_schema, PostgresPresentationStore};
