use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum MatchesViewIntent {
    /// Switch to the next filter tab; scroll resets with it.
    CycleFilter,
    ScrollUp,
    /// Scroll down within a list of `count` visible rows.
    ScrollDown { count: usize },
}

impl Intent for MatchesViewIntent {}
