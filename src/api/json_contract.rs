use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{NameTables, RawLesson};
use crate::error::{LayoutError, LayoutResult};

use super::LayoutFrame;

pub const LAYOUT_FRAME_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: LayoutFrame,
}

/// Entry of the grade dictionary endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeName {
    pub id: i64,
    pub name: String,
}

impl LayoutFrame {
    pub fn to_json_pretty(&self) -> LayoutResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            LayoutError::InvalidData(format!("failed to serialize layout frame: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> LayoutResult<String> {
        let payload = LayoutFrameJsonContractV1 {
            schema_version: LAYOUT_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            LayoutError::InvalidData(format!("failed to serialize layout contract v1: {e}"))
        })
    }

    /// Accepts either a bare frame or a v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> LayoutResult<Self> {
        if let Ok(frame) = serde_json::from_str::<LayoutFrame>(input) {
            return Ok(frame);
        }
        let payload: LayoutFrameJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            LayoutError::InvalidData(format!("failed to parse layout frame json payload: {e}"))
        })?;
        if payload.schema_version != LAYOUT_FRAME_JSON_SCHEMA_V1 {
            return Err(LayoutError::InvalidData(format!(
                "unsupported layout frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}

impl NameTables {
    #[must_use]
    pub fn from_grade_names(grades: impl IntoIterator<Item = GradeName>) -> Self {
        Self {
            grades: grades.into_iter().map(|g| (g.id, g.name)).collect(),
            ..Self::default()
        }
    }
}

/// Parses a lessons response: a bare array, or the `{code, message, data}`
/// envelope. An empty result may arrive as `"data": {}`.
pub fn parse_lessons_json(input: &str) -> LayoutResult<Vec<RawLesson>> {
    parse_list_payload(input, "lessons")
}

/// Parses the grade dictionary (`[{id, name}]`, bare or enveloped).
pub fn parse_grade_names_json(input: &str) -> LayoutResult<Vec<GradeName>> {
    parse_list_payload(input, "grade names")
}

fn parse_list_payload<T: DeserializeOwned>(input: &str, what: &str) -> LayoutResult<Vec<T>> {
    let value: Value = serde_json::from_str(input)
        .map_err(|e| LayoutError::InvalidData(format!("failed to parse {what} json: {e}")))?;
    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut envelope) => match envelope.remove("data") {
            Some(data @ Value::Array(_)) => data,
            Some(Value::Null) | None => return Ok(Vec::new()),
            Some(Value::Object(map)) if map.is_empty() => return Ok(Vec::new()),
            Some(other) => {
                return Err(LayoutError::InvalidData(format!(
                    "{what} envelope `data` must be an array, got {other}"
                )));
            }
        },
        other => {
            return Err(LayoutError::InvalidData(format!(
                "{what} payload must be an array or an envelope object, got {other}"
            )));
        }
    };
    serde_json::from_value(list)
        .map_err(|e| LayoutError::InvalidData(format!("failed to decode {what}: {e}")))
}
