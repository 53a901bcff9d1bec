//! Type-erased slice storage.

use std::any::Any;

use serde_json::Value;

use crate::mvi::Reducer;

/// Operations the store performs on a slice without knowing its types.
pub(crate) trait ErasedSlice: Send {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    /// JSON projection for `get_state`.
    fn snapshot(&self) -> Result<Value, serde_json::Error>;
    /// Persisted record.
    fn encode(&self) -> Result<String, serde_json::Error>;
    /// Replace the whole state from a persisted record.
    fn restore(&mut self, record: &str) -> Result<(), serde_json::Error>;
}

pub(crate) struct SliceCell<R: Reducer> {
    pub(crate) state: R::State,
}

impl<R: Reducer> SliceCell<R> {
    pub(crate) fn new(state: R::State) -> Self {
        Self { state }
    }

    pub(crate) fn apply(&mut self, intent: R::Intent) {
        let state = std::mem::take(&mut self.state);
        self.state = R::reduce(state, intent);
    }
}

impl<R: Reducer> ErasedSlice for SliceCell<R> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(&self.state)
    }

    fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.state)
    }

    fn restore(&mut self, record: &str) -> Result<(), serde_json::Error> {
        self.state = serde_json::from_str(record)?;
        Ok(())
    }
}
