use crate::matches::MatchFilter;
use crate::ui::mvi::UiState;

/// State of the matches screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchesViewState {
    pub filter: MatchFilter,
    pub scroll_offset: usize,
}

impl UiState for MatchesViewState {}
