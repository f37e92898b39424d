use crate::engine::{SessionError, SwipeDirection, SwipeSession};
use crate::matches::MatchList;
use crate::ui::banner::{BannerIntent, BannerReducer, MatchBannerState};
use crate::ui::matches_view::{MatchesViewIntent, MatchesViewReducer, MatchesViewState};
use crate::ui::mvi::Reducer;
use chrono::Utc;

/// Top-level screens the app can show.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Discover,
    Matches,
}

impl Screen {
    pub fn next(self) -> Self {
        match self {
            Screen::Discover => Screen::Matches,
            Screen::Matches => Screen::Discover,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    /// The session aggregate (engine-owned state).
    session: SwipeSession,
    matches: MatchList,
    /// State of the match banner (MVI pattern).
    banner: MatchBannerState,
    /// State of the matches screen (MVI pattern).
    matches_view: MatchesViewState,
    /// Ticks a fresh banner stays visible.
    banner_ticks: u32,
}

impl App {
    pub fn new(session: SwipeSession, matches: MatchList, banner_ticks: u32) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Discover,
            session,
            matches,
            banner: MatchBannerState::default(),
            matches_view: MatchesViewState::default(),
            banner_ticks,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn next_screen(&mut self) {
        self.screen = self.screen.next();
    }

    pub fn session(&self) -> &SwipeSession {
        &self.session
    }

    pub fn matches(&self) -> &MatchList {
        &self.matches
    }

    pub fn banner(&self) -> &MatchBannerState {
        &self.banner
    }

    pub fn matches_view(&self) -> &MatchesViewState {
        &self.matches_view
    }

    /// Counts the banner down; when it auto-hides, the engine's pending
    /// match is dismissed with it.
    pub fn on_tick(&mut self) {
        let was_visible = self.banner.is_visible();
        dispatch_mvi!(self, banner, BannerReducer, BannerIntent::Tick);
        if was_visible && !self.banner.is_visible() {
            self.session.dismiss_match();
        }
    }

    /// Routes one swipe into the engine and fans the outcome out to the
    /// banner and the match list.
    pub fn swipe(&mut self, direction: SwipeDirection) {
        match self.session.decide(direction) {
            Ok(outcome) => {
                if let Some(brand) = outcome.matched {
                    self.matches.record(brand.clone());
                    dispatch_mvi!(
                        self,
                        banner,
                        BannerReducer,
                        BannerIntent::Show {
                            brand,
                            ticks: self.banner_ticks,
                        }
                    );
                }
            }
            Err(SessionError::Exhausted) => {
                tracing::debug!("swipe ignored: session exhausted");
            }
        }
    }

    pub fn undo(&mut self) {
        if self.session.undo() {
            dispatch_mvi!(self, banner, BannerReducer, BannerIntent::Dismiss);
        }
    }

    pub fn reset_session(&mut self) {
        self.session.reset();
        dispatch_mvi!(self, banner, BannerReducer, BannerIntent::Dismiss);
    }

    pub fn dismiss_banner(&mut self) {
        self.session.dismiss_match();
        dispatch_mvi!(self, banner, BannerReducer, BannerIntent::Dismiss);
    }

    pub fn cycle_match_filter(&mut self) {
        dispatch_mvi!(
            self,
            matches_view,
            MatchesViewReducer,
            MatchesViewIntent::CycleFilter
        );
    }

    pub fn scroll_matches_up(&mut self) {
        dispatch_mvi!(
            self,
            matches_view,
            MatchesViewReducer,
            MatchesViewIntent::ScrollUp
        );
    }

    pub fn scroll_matches_down(&mut self) {
        let count = self
            .matches
            .filtered(self.matches_view.filter, Utc::now())
            .len();
        dispatch_mvi!(
            self,
            matches_view,
            MatchesViewReducer,
            MatchesViewIntent::ScrollDown { count }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock::{demo_brands, DEMO_OWNER_ID};
    use crate::engine::{AlwaysMatch, NeverMatch};

    fn app_with_policy(policy: Box<dyn crate::engine::MatchPolicy>) -> App {
        let session = SwipeSession::with_policy(demo_brands(), DEMO_OWNER_ID, policy);
        App::new(session, MatchList::new(), 12)
    }

    #[test]
    fn match_shows_banner_and_records_match() {
        let mut app = app_with_policy(Box::new(AlwaysMatch));
        app.swipe(SwipeDirection::Right);
        assert!(app.banner().is_visible());
        assert_eq!(app.matches().len(), 1);
    }

    #[test]
    fn pass_shows_no_banner() {
        let mut app = app_with_policy(Box::new(AlwaysMatch));
        app.swipe(SwipeDirection::Left);
        assert!(!app.banner().is_visible());
        assert!(app.matches().is_empty());
    }

    #[test]
    fn banner_auto_hides_and_dismisses_engine_match() {
        let mut app = app_with_policy(Box::new(AlwaysMatch));
        app.swipe(SwipeDirection::Right);
        for _ in 0..12 {
            app.on_tick();
        }
        assert!(!app.banner().is_visible());
        assert!(app.session().state().pending_match().is_none());
    }

    #[test]
    fn undo_dismisses_banner() {
        let mut app = app_with_policy(Box::new(AlwaysMatch));
        app.swipe(SwipeDirection::Right);
        assert!(app.banner().is_visible());
        app.undo();
        assert!(!app.banner().is_visible());
        assert!(app.session().state().history().is_empty());
    }

    #[test]
    fn exhausted_swipes_are_ignored() {
        let mut app = app_with_policy(Box::new(NeverMatch));
        let total = app.session().state().position().1;
        for _ in 0..total + 3 {
            app.swipe(SwipeDirection::Left);
        }
        assert_eq!(app.session().stats().viewed, total);
    }

    #[test]
    fn screens_toggle() {
        let mut app = app_with_policy(Box::new(NeverMatch));
        assert_eq!(app.screen(), Screen::Discover);
        app.next_screen();
        assert_eq!(app.screen(), Screen::Matches);
        app.next_screen();
        assert_eq!(app.screen(), Screen::Discover);
    }
}
