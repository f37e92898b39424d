use crate::ui::mvi::Reducer;

use super::intent::BannerIntent;
use super::state::MatchBannerState;

/// Reducer for the match banner lifecycle.
///
/// Pure function — dismissing the engine's pending match is the caller's
/// side effect around the dispatch.
pub struct BannerReducer;

impl Reducer for BannerReducer {
    type State = MatchBannerState;
    type Intent = BannerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BannerIntent::Show { brand, ticks } => {
                if ticks == 0 {
                    MatchBannerState::Hidden
                } else {
                    MatchBannerState::Visible {
                        brand,
                        ticks_left: ticks,
                    }
                }
            }

            BannerIntent::Dismiss => MatchBannerState::Hidden,

            BannerIntent::Tick => match state {
                MatchBannerState::Visible { brand, ticks_left } => {
                    if ticks_left <= 1 {
                        MatchBannerState::Hidden
                    } else {
                        MatchBannerState::Visible {
                            brand,
                            ticks_left: ticks_left - 1,
                        }
                    }
                }
                MatchBannerState::Hidden => MatchBannerState::Hidden,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock::demo_brands;
    use crate::catalog::Brand;

    fn brand() -> Brand {
        demo_brands().remove(1)
    }

    #[test]
    fn show_makes_banner_visible() {
        let state = BannerReducer::reduce(
            MatchBannerState::Hidden,
            BannerIntent::Show {
                brand: brand(),
                ticks: 12,
            },
        );
        assert!(matches!(
            state,
            MatchBannerState::Visible { ticks_left: 12, .. }
        ));
    }

    #[test]
    fn show_with_zero_ticks_stays_hidden() {
        let state = BannerReducer::reduce(
            MatchBannerState::Hidden,
            BannerIntent::Show {
                brand: brand(),
                ticks: 0,
            },
        );
        assert_eq!(state, MatchBannerState::Hidden);
    }

    #[test]
    fn tick_counts_down() {
        let state = MatchBannerState::Visible {
            brand: brand(),
            ticks_left: 3,
        };
        let state = BannerReducer::reduce(state, BannerIntent::Tick);
        assert!(matches!(
            state,
            MatchBannerState::Visible { ticks_left: 2, .. }
        ));
    }

    #[test]
    fn last_tick_hides_banner() {
        let state = MatchBannerState::Visible {
            brand: brand(),
            ticks_left: 1,
        };
        let state = BannerReducer::reduce(state, BannerIntent::Tick);
        assert_eq!(state, MatchBannerState::Hidden);
    }

    #[test]
    fn tick_on_hidden_is_noop() {
        let state = BannerReducer::reduce(MatchBannerState::Hidden, BannerIntent::Tick);
        assert_eq!(state, MatchBannerState::Hidden);
    }

    #[test]
    fn dismiss_hides_immediately() {
        let state = MatchBannerState::Visible {
            brand: brand(),
            ticks_left: 10,
        };
        let state = BannerReducer::reduce(state, BannerIntent::Dismiss);
        assert_eq!(state, MatchBannerState::Hidden);
    }

    #[test]
    fn show_replaces_a_visible_banner() {
        let first = MatchBannerState::Visible {
            brand: brand(),
            ticks_left: 2,
        };
        let replacement = demo_brands().remove(2);
        let state = BannerReducer::reduce(
            first,
            BannerIntent::Show {
                brand: replacement.clone(),
                ticks: 8,
            },
        );
        match state {
            MatchBannerState::Visible { brand, ticks_left } => {
                assert_eq!(brand.id, replacement.id);
                assert_eq!(ticks_left, 8);
            }
            _ => panic!("expected Visible"),
        }
    }
}
