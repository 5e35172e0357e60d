//! Wire-facing presentation model.
//!
//! These shapes appear verbatim in request and response bodies, so the serde
//! attributes here define what clients may omit. Ids default to nil because
//! create requests arrive without them and the real values are assigned during
//! creation. A defaulted field sent as an explicit JSON `null` is treated the
//! same as an absent one.

use serde::{Deserialize, Deserializer, Serialize};

use super::ids::{PollId, PresentationId};

/// Treats an explicit JSON `null` like an absent field.
fn default_on_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn nil_presentation_id_on_null<'de, D>(deserializer: D) -> Result<PresentationId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<PresentationId>::deserialize(deserializer)?.unwrap_or_else(PresentationId::nil))
}

fn nil_poll_id_on_null<'de, D>(deserializer: D) -> Result<PollId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<PollId>::deserialize(deserializer)?.unwrap_or_else(PollId::nil))
}

/// A single answer choice within a poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollOption {
    pub key: String,
    pub value: String,
}

/// A question with its ordered answer options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    #[serde(default = "PollId::nil", deserialize_with = "nil_poll_id_on_null")]
    pub poll_id: PollId,
    pub question: String,
    #[serde(default, deserialize_with = "default_on_null")]
    pub options: Vec<PollOption>,
}

impl Poll {
    /// The sentinel poll returned when the current index points past the end
    /// of the presentation: nil id, empty question, no options.
    pub fn empty() -> Self {
        Self {
            poll_id: PollId::nil(),
            question: String::new(),
            options: Vec::new(),
        }
    }
}

/// A presentation holding an ordered list of polls and a cursor into them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    #[serde(
        default = "PresentationId::nil",
        deserialize_with = "nil_presentation_id_on_null"
    )]
    pub presentation_id: PresentationId,
    #[serde(default, deserialize_with = "default_on_null")]
    pub current_poll_index: i32,
    #[serde(default, deserialize_with = "default_on_null")]
    pub polls: Vec<Poll>,
}

/// A single vote cast by a client for one option of one poll.
///
/// All three fields are required: a vote body that omits one, or sends it as
/// `null`, is rejected before it reaches storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub key: String,
    pub client_id: String,
    pub poll_id: PollId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_without_ids_parses() {
        let body = r#"{
            "polls": [
                {
                    "question": "Tabs or spaces?",
                    "options": [
                        {"key": "A", "value": "Tabs"},
                        {"key": "B", "value": "Spaces"}
                    ]
                }
            ]
        }"#;

        let presentation: Presentation = serde_json::from_str(body).unwrap();
        assert!(presentation.presentation_id.is_nil());
        assert_eq!(presentation.current_poll_index, 0);
        assert_eq!(presentation.polls.len(), 1);
        assert!(presentation.polls[0].poll_id.is_nil());
        assert_eq!(presentation.polls[0].question, "Tabs or spaces?");
        assert_eq!(presentation.polls[0].options.len(), 2);
    }

    #[test]
    fn explicit_null_fields_parse_as_defaults() {
        let body = r#"{
            "presentation_id": null,
            "current_poll_index": null,
            "polls": [
                {
                    "poll_id": null,
                    "question": "Tabs or spaces?",
                    "options": null
                }
            ]
        }"#;

        let presentation: Presentation = serde_json::from_str(body).unwrap();
        assert!(presentation.presentation_id.is_nil());
        assert_eq!(presentation.current_poll_index, 0);
        assert!(presentation.polls[0].poll_id.is_nil());
        assert!(presentation.polls[0].options.is_empty());
    }

    #[test]
    fn null_polls_parse_as_no_polls() {
        let presentation: Presentation = serde_json::from_str(r#"{"polls": null}"#).unwrap();
        assert!(presentation.polls.is_empty());
    }

    #[test]
    fn poll_without_question_is_rejected() {
        let body = r#"{"polls": [{"options": []}]}"#;
        assert!(serde_json::from_str::<Presentation>(body).is_err());
    }

    #[test]
    fn empty_poll_serializes_with_nil_id_and_empty_options() {
        let json = serde_json::to_value(Poll::empty()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "poll_id": "00000000-0000-0000-0000-000000000000",
                "question": "",
                "options": []
            })
        );
    }

    #[test]
    fn vote_requires_all_fields() {
        let missing_client = r#"{"key": "A", "poll_id": "7d9f9cb8-3c41-4b5a-9c0e-3f8f1a2b4c5d"}"#;
        assert!(serde_json::from_str::<Vote>(missing_client).is_err());

        let complete = r#"{
            "key": "A",
            "client_id": "voter-1",
            "poll_id": "7d9f9cb8-3c41-4b5a-9c0e-3f8f1a2b4c5d"
        }"#;
        assert!(serde_json::from_str::<Vote>(complete).is_ok());
    }

    #[test]
    fn vote_with_null_field_is_rejected() {
        let body = r#"{
            "key": "A",
            "client_id": null,
            "poll_id": "7d9f9cb8-3c41-4b5a-9c0e-3f8f1a2b4c5d"
        }"#;
        assert!(serde_json::from_str::<Vote>(body).is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let body = r#"{
            "key": "B",
            "client_id": "voter-2",
            "poll_id": "7d9f9cb8-3c41-4b5a-9c0e-3f8f1a2b4c5d",
            "extra": "ignored"
        }"#;
        assert!(serde_json::from_str::<Vote>(body).is_ok());
    }
}
