use brandmatch::catalog::Brand;
use brandmatch::matches::{MatchFilter, MatchList, MatchRecord};
use brandmatch::ui::matches_view::{MatchesViewIntent, MatchesViewReducer, MatchesViewState};
use brandmatch::ui::mvi::Reducer;
use chrono::{Duration, Utc};

fn brand(id: &str) -> Brand {
    Brand {
        id: id.to_string(),
        name: id.to_uppercase(),
        industry: "Retail".to_string(),
        location: "Hanoi".to_string(),
        total_locations: 1,
        franchise_fee: 1,
        minimum_investment: 1,
        description: String::new(),
        tags: Vec::new(),
    }
}

#[test]
fn cycling_twice_returns_to_all() {
    let state = MatchesViewState::default();
    assert_eq!(state.filter, MatchFilter::All);
    let state = MatchesViewReducer::reduce(state, MatchesViewIntent::CycleFilter);
    assert_eq!(state.filter, MatchFilter::Recent);
    let state = MatchesViewReducer::reduce(state, MatchesViewIntent::CycleFilter);
    assert_eq!(state.filter, MatchFilter::All);
}

#[test]
fn scroll_follows_the_filtered_count() {
    let now = Utc::now();
    let list = MatchList::seeded(vec![
        MatchRecord::dated(brand("newest"), now),
        MatchRecord::dated(brand("fresh"), now - Duration::hours(2)),
        MatchRecord::dated(brand("old"), now - Duration::days(30)),
    ]);

    assert_eq!(list.filtered(MatchFilter::All, now).len(), 3);
    let recent_count = list.filtered(MatchFilter::Recent, now).len();
    assert_eq!(recent_count, 2);

    // Scrolling is clamped to the rows the active filter shows.
    let mut state = MatchesViewState {
        filter: MatchFilter::Recent,
        scroll_offset: 0,
    };
    for _ in 0..5 {
        state = MatchesViewReducer::reduce(
            state,
            MatchesViewIntent::ScrollDown {
                count: recent_count,
            },
        );
    }
    assert_eq!(state.scroll_offset, recent_count - 1);

    state = MatchesViewReducer::reduce(state, MatchesViewIntent::ScrollUp);
    assert_eq!(state.scroll_offset, recent_count - 2);
}
