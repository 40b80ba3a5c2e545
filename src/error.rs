use derive_more::{Display, From};

use crate::types::Value;

pub type Result<T> = core::result::Result<T, VisibilityError>;

/// Input-contract violations rejected before any geometry runs.
///
/// Degenerate geometry is never an error: it resolves to "no intersection".
#[derive(Debug, Display, From)]
pub enum VisibilityError {
    #[display("at least one observer is required")]
    NoObservers,
    #[display("at least one target is required")]
    NoTargets,
    #[display("{what} has a non-finite coordinate")]
    NonFinite { what: String },
    #[display("{what} must not be negative (got {value})")]
    NegativeLength { what: String, value: Value },
    #[display("invalid visibility JSON: {_0}")]
    #[from]
    Json(serde_json::Error),
}

impl std::error::Error for VisibilityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VisibilityError::Json(err) => Some(err),
            _ => None,
        }
    }
}
