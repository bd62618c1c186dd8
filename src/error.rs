use thiserror::Error;

pub type LayoutResult<T> = Result<T, LayoutError>;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("malformed {field} `{value}` on lesson {record_id}: expected HH:MM:SS")]
    MalformedTime {
        record_id: String,
        field: &'static str,
        value: String,
    },

    #[error("invalid lesson record: `{field}` {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("invalid layout config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl LayoutError {
    pub(crate) fn missing(field: &'static str) -> Self {
        Self::Validation {
            field,
            reason: "is missing".to_owned(),
        }
    }
}
