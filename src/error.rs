// src/error.rs

use thiserror::Error;

/// Result alias used across the planner.
pub type LotSizingResult<T> = Result<T, LotSizingError>;

/// Everything that can go wrong while planning a lot-sizing run.
#[derive(Debug, Error)]
pub enum LotSizingError {
    /// Rejected before any computation: empty horizon, negative or
    /// non-finite demand, setup cost or holding cost.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The predecessor array broke `1 <= j[t] <= t`. This is a logic defect,
    /// never a user error, and is not recovered from.
    #[error("corrupt planner state at period {period}: {detail}")]
    CorruptState { period: usize, detail: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LotSizingError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub(crate) fn corrupt(period: usize, detail: impl Into<String>) -> Self {
        Self::CorruptState {
            period,
            detail: detail.into(),
        }
    }
}
