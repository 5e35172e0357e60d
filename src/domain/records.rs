//! Row-shaped records as they are stored, one struct per table.

use super::ids::{PollId, PresentationId};

/// The `presentation` table: one row per created presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationRecord {
    pub id: PresentationId,
    pub current_poll_index: i32,
}

/// The `poll` table: one row per poll, ordered within its presentation
/// by `index`.
#[derive(Debug, Clone, PartialEq)]
pub struct PollRecord {
    pub id: PollId,
    pub question: String,
    pub presentation_id: PresentationId,
    pub index: i32,
}

/// The `option` table: one row per answer choice, ordered within its poll
/// by `index`.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionRecord {
    pub key: String,
    pub value: String,
    pub poll_id: PollId,
    pub index: i32,
}
