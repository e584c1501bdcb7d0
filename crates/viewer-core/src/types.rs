//! Core type definitions for transcript state documents

use serde::Deserialize;
use serde_json::{Map, Value};

/// Top-level state document as served by the agent (`GET /state`).
#[derive(Debug, Clone, Deserialize)]
pub struct RawState {
    pub history: Vec<RawEntry>,
}

/// One conversational turn, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Value>,
}

/// Function call payload inside a part.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFunctionCall {
    #[serde(default)]
    pub id: Option<Value>,
    pub name: String,
    #[serde(default)]
    pub args: Map<String, Value>,
}

/// Function response payload inside a part.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFunctionResponse {
    #[serde(default)]
    pub id: Option<Value>,
    pub name: String,
    #[serde(default)]
    pub response: Map<String, Value>,
}

/// Validated state document. Everything downstream of the decoder works
/// over this model and never re-inspects raw JSON shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct StateDocument {
    pub history: Vec<HistoryEntry>,
}

/// One validated conversational turn.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub role: Role,
    pub parts: Vec<Part>,
}

/// Speaker of a turn. Any other role string is rejected at decode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Direction label shown in the entry header.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User → Model",
            Role::Model => "Model → User",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Model => write!(f, "model"),
        }
    }
}

/// One semantic unit within a turn (closed union).
///
/// The wire format is a mapping with exactly one non-null key; the decoder
/// folds that into this enum. `Unknown` carries both single unrecognized
/// keys and the degraded zero/multi-key case so the renderer can always
/// produce a fallback block.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Text(String),
    FunctionCall(FunctionCall),
    FunctionResponse(FunctionResponse),
    Unknown { key: String, raw: Value },
}

/// A validated function call part.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Map<String, Value>,
}

/// A validated function response part.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionResponse {
    pub name: String,
    pub response: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::User.label(), "User → Model");
        assert_eq!(Role::Model.label(), "Model → User");
        assert_eq!(Role::User.to_string(), "user");
    }

    #[test]
    fn test_raw_entry_parts_default() {
        let entry: RawEntry = serde_json::from_str(r#"{"role":"user"}"#).unwrap();
        assert_eq!(entry.role, "user");
        assert!(entry.parts.is_empty());
    }
}
