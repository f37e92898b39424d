//! Demo matches seeding the list on startup, like the rest of the mock
//! data set.

use chrono::{Duration, Utc};

use crate::catalog::mock::{demo_brands, DEMO_OWNER_ID};
use crate::matches::record::{MatchRecord, MatchStatus};

/// A couple of pre-existing matches for the demo owner, spread out in
/// time so both filter tabs have something to show.
pub fn demo_matches() -> Vec<MatchRecord> {
    let now = Utc::now();
    let mut brands = demo_brands()
        .into_iter()
        .filter(|b| b.id != DEMO_OWNER_ID);

    let mut records = Vec::new();
    if let Some(brand) = brands.next() {
        records.push(MatchRecord::dated(brand, now - Duration::days(1)));
    }
    if let Some(brand) = brands.next() {
        records.push(MatchRecord::dated(brand, now - Duration::days(6)));
    }
    if let Some(brand) = brands.next() {
        let mut record = MatchRecord::dated(brand, now - Duration::days(20));
        record.status = MatchStatus::Archived;
        records.push(record);
    }
    records
}
