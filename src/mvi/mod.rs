//! Model-View-Intent primitives shared by every store slice.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Store (persist, notify)
//!    ↑                                 │
//!    └──────── orchestrators ──────────┘
//! ```
//!
//! - **State**: owned, cloneable value held by one slice of the store
//! - **Intent**: a state transition request (page arrived, loading started)
//! - **Reducer**: pure function that folds an intent into a state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
