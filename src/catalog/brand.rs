use serde::{Deserialize, Serialize};

/// A brand profile eligible to appear in a swipe session.
///
/// Identity is the `id` field; everything else is display metadata.
/// Brands are immutable once loaded into a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    /// Unique, stable identifier within one catalog.
    pub id: String,
    pub name: String,
    pub industry: String,
    pub location: String,
    /// Number of locations currently operating under the brand.
    #[serde(default)]
    pub total_locations: u32,
    /// One-time franchise fee, in the catalog's currency unit.
    pub franchise_fee: u64,
    /// Minimum investment required of a franchisee.
    pub minimum_investment: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
