use thiserror::Error;

/// Failures of the textual configuration bridge.
///
/// Geometry itself never fails; these only arise from user-editable text,
/// which can be transiently malformed mid-edit. Callers typically drop the
/// error and keep their prior state.
#[derive(Debug, Error)]
pub enum Error {
    /// The segment around the cursor holds no `"key": number` pair.
    #[error("no numeric field around byte offset {cursor}")]
    NoNumericField { cursor: usize },
    /// The matched literal is not a finite number.
    #[error("invalid number literal {literal:?}")]
    InvalidNumber { literal: String },
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
