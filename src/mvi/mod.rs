//! Intent/reducer primitives shared by the widget's state machines.
//!
//! ```text
//! host request / frame tick ──→ Intent ──→ Reducer ──→ State
//!                                                        │
//!                      widget applies the edge to its surface
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
