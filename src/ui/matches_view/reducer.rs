use crate::ui::mvi::Reducer;

use super::intent::MatchesViewIntent;
use super::state::MatchesViewState;

pub struct MatchesViewReducer;

impl Reducer for MatchesViewReducer {
    type State = MatchesViewState;
    type Intent = MatchesViewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MatchesViewIntent::CycleFilter => MatchesViewState {
                filter: state.filter.next(),
                scroll_offset: 0,
            },

            MatchesViewIntent::ScrollUp => MatchesViewState {
                scroll_offset: state.scroll_offset.saturating_sub(1),
                ..state
            },

            MatchesViewIntent::ScrollDown { count } => {
                let max_offset = count.saturating_sub(1);
                MatchesViewState {
                    scroll_offset: (state.scroll_offset + 1).min(max_offset),
                    ..state
                }
            }
        }
    }
}
