//! Ports - trait boundaries between the domain and the outside world.
//!
//! Adapters implement these traits; handlers depend only on the traits, so
//! tests can swap in mocks without a database or network.

pub mod presentation_creator;
pub mod presentation_store;

pub use presentation_creator::{CreatorError, PresentationCreator, UpstreamResponse};
pub use presentation_store::{PresentationStore, StoreError};
