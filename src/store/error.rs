use thiserror::Error;

/// Errors raised while composing the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Slice '{name}' is already registered")]
    DuplicateSlice { name: String },

    #[error("Invalid slice name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}
