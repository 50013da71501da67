//! Request/response messages exchanged with the game data service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message type tag carried in the `type` field.
///
/// Tags this client does not send itself decode as `Other`; a response is
/// only a failure when tagged `error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    GetPassiveSkills,
    Error,
    #[serde(other)]
    Other,
}

impl MessageType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GetPassiveSkills => "get_passive_skills",
            Self::Error => "error",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    #[serde(rename = "type")]
    pub message_type: MessageType,
}

impl Request {
    pub const fn new(message_type: MessageType) -> Self {
        Self { message_type }
    }

    /// Request for the full passive skill mapping.
    pub const fn get_passive_skills() -> Self {
        Self::new(MessageType::GetPassiveSkills)
    }
}

/// Inbound response.
///
/// A response tagged `error` carries its message in `data`; any other tag is
/// a success whose `data` is the requested payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    #[serde(default)]
    pub data: Value,
}

impl Response {
    pub const fn success(message_type: MessageType, data: Value) -> Self {
        Self { message_type, data }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message_type: MessageType::Error,
            data: Value::String(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.message_type == MessageType::Error
    }

    /// Message of an error response. Non-string data is rendered as JSON.
    pub fn error_message(&self) -> Option<String> {
        if !self.is_error() {
            return None;
        }
        Some(match &self.data {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        })
    }
}
