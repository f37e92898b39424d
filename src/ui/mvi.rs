//! Unidirectional data-flow primitives for the UI layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! View state is held as immutable values; intents (key presses, ticks)
//! are folded into new states by reducers, and rendering reads the
//! result. Side effects stay with the caller around the dispatch.

/// Marker trait for view state values.
///
/// States are cloned to produce successors, self-contained for
/// rendering, and comparable so changes can be detected.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions and system events a reducer
/// folds into state.
pub trait Intent: Send + 'static {}

/// The single place a view's state transitions happen.
///
/// `reduce` must be a pure function of (state, intent).
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
