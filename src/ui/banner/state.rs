use crate::catalog::Brand;
use crate::ui::mvi::UiState;

/// State of the match banner overlay.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MatchBannerState {
    #[default]
    Hidden,
    Visible {
        brand: Brand,
        /// Ticks until auto-hide.
        ticks_left: u32,
    },
}

impl UiState for MatchBannerState {}

impl MatchBannerState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
