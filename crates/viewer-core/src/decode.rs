//! Boundary decoding for state documents
//!
//! All shape validation happens here. Parts arrive as duck-typed mappings
//! with exactly one non-null key; the decoder resolves that key and folds
//! each part into the closed `Part` union. Contract violations on `role`
//! and `id` are hard errors, while union-shape violations degrade to a
//! still-renderable `Part::Unknown`.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::{
    FunctionCall, FunctionResponse, HistoryEntry, Part, RawEntry, RawFunctionCall,
    RawFunctionResponse, RawState, Role, StateDocument,
};

/// Decoding errors; all fatal to the render pass.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid state document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("history entry {index}: unknown role {role:?} (expected \"user\" or \"model\")")]
    RoleContract { index: usize, role: String },

    #[error("{kind} {name:?}: id must be null at render time")]
    IdContract { kind: &'static str, name: String },
}

/// Decode a full state document from its JSON text.
pub fn decode_state(body: &str) -> Result<StateDocument, DecodeError> {
    let raw: RawState = serde_json::from_str(body)?;
    decode_history(raw.history)
}

/// Decode a snapshot file, which may be a full `{"history": [...]}` document
/// or the bare history array the agent writes to disk between turns.
pub fn decode_snapshot(body: &str) -> Result<StateDocument, DecodeError> {
    let value: Value = serde_json::from_str(body)?;
    let history: Vec<RawEntry> = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        serde_json::from_value::<RawState>(value)?.history
    };
    decode_history(history)
}

/// Decode raw history entries into the validated document, preserving order.
pub fn decode_history(history: Vec<RawEntry>) -> Result<StateDocument, DecodeError> {
    let entries = history
        .iter()
        .enumerate()
        .map(|(index, entry)| decode_entry(entry, index))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(StateDocument { history: entries })
}

/// Decode one history entry, validating its role.
pub fn decode_entry(raw: &RawEntry, index: usize) -> Result<HistoryEntry, DecodeError> {
    let role = match raw.role.as_str() {
        "user" => Role::User,
        "model" => Role::Model,
        other => {
            return Err(DecodeError::RoleContract {
                index,
                role: other.to_string(),
            })
        }
    };

    let parts = raw
        .parts
        .iter()
        .map(decode_part)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HistoryEntry { role, parts })
}

/// Resolve the single populated key of a part-shaped mapping.
///
/// Exactly one non-null key is the data contract. Zero or several non-null
/// keys degrade to the comma-joined key list (and an error log) so the
/// caller can still render a fallback block instead of dropping the part.
pub fn resolve_union_key(part: &Map<String, Value>) -> String {
    let keys: Vec<&str> = part
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, _)| key.as_str())
        .collect();

    if keys.len() == 1 {
        keys[0].to_string()
    } else {
        let joined = keys.join(",");
        tracing::error!(
            keys = %joined,
            count = keys.len(),
            "part union shape violation: expected exactly one non-null key"
        );
        joined
    }
}

/// Decode one raw part into the closed `Part` union.
pub fn decode_part(raw: &Value) -> Result<Part, DecodeError> {
    let Some(map) = raw.as_object() else {
        tracing::error!("part is not a JSON object");
        return Ok(Part::Unknown {
            key: json_kind(raw).to_string(),
            raw: raw.clone(),
        });
    };

    let key = resolve_union_key(map);
    match key.as_str() {
        "text" => match map.get("text").and_then(Value::as_str) {
            Some(text) => Ok(Part::Text(text.to_string())),
            // Non-string text is a shape oddity; keep it renderable.
            None => Ok(Part::Unknown {
                key,
                raw: raw.clone(),
            }),
        },
        "function_call" => {
            let call: RawFunctionCall = serde_json::from_value(map["function_call"].clone())?;
            ensure_null_id(call.id.as_ref(), "function_call", &call.name)?;
            Ok(Part::FunctionCall(FunctionCall {
                name: call.name,
                args: call.args,
            }))
        }
        "function_response" => {
            let resp: RawFunctionResponse =
                serde_json::from_value(map["function_response"].clone())?;
            ensure_null_id(resp.id.as_ref(), "function_response", &resp.name)?;
            Ok(Part::FunctionResponse(FunctionResponse {
                name: resp.name,
                response: resp.response,
            }))
        }
        _ => Ok(Part::Unknown {
            key,
            raw: raw.clone(),
        }),
    }
}

/// `id` is reserved by the wire format and must be null (or absent) at
/// render time.
fn ensure_null_id(
    id: Option<&Value>,
    kind: &'static str,
    name: &str,
) -> Result<(), DecodeError> {
    match id {
        None | Some(Value::Null) => Ok(()),
        Some(_) => Err(DecodeError::IdContract {
            kind,
            name: name.to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
