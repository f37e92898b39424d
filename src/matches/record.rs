use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::catalog::Brand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Active,
    Archived,
}

/// A declared mutual-interest match, as seen from the session owner's
/// side: `brand` is the other party. `matched_at` lives here, not on the
/// brand, since a brand can appear in any number of matches.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub id: String,
    pub brand: Brand,
    pub matched_at: DateTime<Utc>,
    pub status: MatchStatus,
}

impl MatchRecord {
    /// A fresh active match, stamped now.
    pub fn new(brand: Brand) -> Self {
        Self::dated(brand, Utc::now())
    }

    /// A match with an explicit timestamp, for seeding and tests.
    pub fn dated(brand: Brand, matched_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            brand,
            matched_at,
            status: MatchStatus::Active,
        }
    }
}
