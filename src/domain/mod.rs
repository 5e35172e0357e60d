//! Domain layer: plain data carriers for the polling model.
//!
//! # Module Organization
//!
//! - `ids` - Strongly-typed UUID identifiers
//! - `presentation` - Wire shapes (nested request/response bodies)
//! - `records` - Storage shapes (flat, one row per table)
//!
//! The model deliberately has no behavior beyond field access; mapping
//! between the two shapes belongs to the request handlers.

pub mod ids;
pub mod presentation;
pub mod records;

pub use ids::{PollId, PresentationId};
pub use presentation::{Poll, PollOption, Presentation, Vote};
pub use records::{OptionRecord, PollRecord, PresentationRecord};
