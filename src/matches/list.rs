use chrono::{DateTime, Duration, Utc};

use crate::catalog::Brand;
use crate::matches::record::{MatchRecord, MatchStatus};

/// How far back the Recent tab looks.
pub const RECENT_WINDOW_DAYS: i64 = 3;

/// Filter tabs over the match list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchFilter {
    #[default]
    All,
    Recent,
}

impl MatchFilter {
    pub fn next(self) -> Self {
        match self {
            MatchFilter::All => MatchFilter::Recent,
            MatchFilter::Recent => MatchFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchFilter::All => "All",
            MatchFilter::Recent => "Recent",
        }
    }
}

/// In-memory store of declared matches, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchList {
    records: Vec<MatchRecord>,
}

impl MatchList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(records: Vec<MatchRecord>) -> Self {
        let mut list = Self { records };
        list.records
            .sort_by(|a, b| b.matched_at.cmp(&a.matched_at));
        list
    }

    /// Records a fresh match at the top of the list.
    pub fn record(&mut self, brand: Brand) {
        tracing::info!(brand = %brand.name, "match recorded");
        self.records.insert(0, MatchRecord::new(brand));
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records visible under `filter`, evaluated against `now`.
    ///
    /// Archived matches are never shown; Recent additionally restricts to
    /// the last [`RECENT_WINDOW_DAYS`] days.
    pub fn filtered(&self, filter: MatchFilter, now: DateTime<Utc>) -> Vec<&MatchRecord> {
        let cutoff = now - Duration::days(RECENT_WINDOW_DAYS);
        self.records
            .iter()
            .filter(|record| record.status == MatchStatus::Active)
            .filter(|record| match filter {
                MatchFilter::All => true,
                MatchFilter::Recent => record.matched_at > cutoff,
            })
            .collect()
    }
}

/// Human date for list rows: "today", "yesterday", then day / week /
/// month granularity.
pub fn relative_date(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - date).num_days();
    match days {
        d if d <= 0 => "today".to_string(),
        1 => "yesterday".to_string(),
        d if d < 7 => format!("{d} days ago"),
        d if d < 30 => {
            let weeks = d / 7;
            if weeks == 1 {
                "1 week ago".to_string()
            } else {
                format!("{weeks} weeks ago")
            }
        }
        d => {
            let months = d / 30;
            if months == 1 {
                "1 month ago".to_string()
            } else {
                format!("{months} months ago")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock::demo_brands;

    fn brand(n: usize) -> Brand {
        demo_brands().into_iter().nth(n).unwrap()
    }

    #[test]
    fn record_inserts_newest_first() {
        let mut list = MatchList::new();
        list.record(brand(1));
        list.record(brand(2));
        let now = Utc::now();
        let visible = list.filtered(MatchFilter::All, now);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].brand.id, brand(2).id);
    }

    #[test]
    fn recent_filter_cuts_off_old_matches() {
        let now = Utc::now();
        let list = MatchList::seeded(vec![
            MatchRecord::dated(brand(1), now - Duration::days(1)),
            MatchRecord::dated(brand(2), now - Duration::days(10)),
        ]);
        assert_eq!(list.filtered(MatchFilter::All, now).len(), 2);
        let recent = list.filtered(MatchFilter::Recent, now);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].brand.id, brand(1).id);
    }

    #[test]
    fn archived_matches_are_hidden() {
        let now = Utc::now();
        let mut archived = MatchRecord::dated(brand(1), now);
        archived.status = MatchStatus::Archived;
        let list = MatchList::seeded(vec![archived, MatchRecord::dated(brand(2), now)]);
        let visible = list.filtered(MatchFilter::All, now);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].brand.id, brand(2).id);
    }

    #[test]
    fn seeded_list_is_sorted_newest_first() {
        let now = Utc::now();
        let list = MatchList::seeded(vec![
            MatchRecord::dated(brand(1), now - Duration::days(5)),
            MatchRecord::dated(brand(2), now - Duration::days(1)),
        ]);
        let visible = list.filtered(MatchFilter::All, now);
        assert_eq!(visible[0].brand.id, brand(2).id);
    }

    #[test]
    fn filter_tabs_cycle() {
        assert_eq!(MatchFilter::All.next(), MatchFilter::Recent);
        assert_eq!(MatchFilter::Recent.next(), MatchFilter::All);
    }

    #[test]
    fn relative_dates_cover_the_ranges() {
        let now = Utc::now();
        assert_eq!(relative_date(now, now), "today");
        assert_eq!(relative_date(now - Duration::days(1), now), "yesterday");
        assert_eq!(relative_date(now - Duration::days(4), now), "4 days ago");
        assert_eq!(relative_date(now - Duration::days(8), now), "1 week ago");
        assert_eq!(relative_date(now - Duration::days(21), now), "3 weeks ago");
        assert_eq!(relative_date(now - Duration::days(31), now), "1 month ago");
        assert_eq!(relative_date(now - Duration::days(100), now), "3 months ago");
    }
}
