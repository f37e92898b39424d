//! Matches screen: filter tabs plus a scrollable list.

mod intent;
mod reducer;
mod state;

pub use intent::MatchesViewIntent;
pub use reducer::MatchesViewReducer;
pub use state::MatchesViewState;
