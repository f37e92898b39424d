use crate::catalog::Brand;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BannerIntent {
    /// A match was declared; show it for `ticks` ticks.
    Show { brand: Brand, ticks: u32 },
    /// One app tick elapsed.
    Tick,
    /// User dismissed the banner early.
    Dismiss,
}

impl Intent for BannerIntent {}
