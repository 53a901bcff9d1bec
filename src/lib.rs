//! Client-side list-cache synchronization.
//!
//! Paginated collections are fetched from a remote API, merged into a
//! store of typed slices, and persisted through a pluggable storage
//! adapter so they can be rehydrated on the next start.

pub mod app;
pub mod cli;
pub mod collection;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod mvi;
pub mod source;
pub mod storage;
pub mod store;
