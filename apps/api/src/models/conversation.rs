use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Speaker of a single conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl TurnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Assistant => "assistant",
        }
    }
}

/// One immutable turn inside a conversation. Stored as a JSONB array element
/// on the `conversations` row; never updated after it is appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
            timestamp,
        }
    }

    pub fn assistant(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_roles_serialize_lowercase() {
        let turn = ConversationTurn::user("hello", Utc::now());
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["role"], "user");

        let turn = ConversationTurn::assistant("hi there", Utc::now());
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["role"], "assistant");
    }

    #[test]
    fn test_turn_round_trips_through_jsonb_shape() {
        let turn = ConversationTurn::user("find data jobs", Utc::now());
        let json = serde_json::to_value(&turn).unwrap();
        let back: ConversationTurn = serde_json::from_value(json).unwrap();
        assert_eq!(back.role, TurnRole::User);
        assert_eq!(back.content, "find data jobs");
    }
}
