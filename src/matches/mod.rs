//! Declared matches and the list view model over them.

mod list;
pub mod mock;
mod record;

pub use list::{relative_date, MatchFilter, MatchList, RECENT_WINDOW_DAYS};
pub use record::{MatchRecord, MatchStatus};
