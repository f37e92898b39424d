//! Built-in demo catalog. Stands in for a real catalog service.

use crate::catalog::Brand;

/// Brand id the demo session swipes as. Present in [`demo_brands`] so the
/// engine's self-exclusion is exercised out of the box.
pub const DEMO_OWNER_ID: &str = "bm-pho24";

fn brand(
    id: &str,
    name: &str,
    industry: &str,
    location: &str,
    total_locations: u32,
    franchise_fee: u64,
    minimum_investment: u64,
    description: &str,
    tags: &[&str],
) -> Brand {
    Brand {
        id: id.to_string(),
        name: name.to_string(),
        industry: industry.to_string(),
        location: location.to_string(),
        total_locations,
        franchise_fee,
        minimum_investment,
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The static demo catalog, owner brand included.
pub fn demo_brands() -> Vec<Brand> {
    vec![
        brand(
            DEMO_OWNER_ID,
            "Pho 24",
            "Fast Food",
            "Hanoi",
            50,
            500_000_000,
            2_000_000_000,
            "Well-known pho chain with a traditional recipe.",
            &["food", "franchise-ready"],
        ),
        brand(
            "bm-abc-coffee",
            "ABC Coffee",
            "Coffee",
            "Ho Chi Minh City",
            30,
            300_000_000,
            1_000_000_000,
            "Coffee chain with modern spaces and a wide menu.",
            &["beverage", "urban"],
        ),
        brand(
            "bm-xyz-tea",
            "XYZ Bubble Tea",
            "Beverage",
            "Da Nang",
            25,
            200_000_000,
            800_000_000,
            "Popular milk-tea brand with a proprietary recipe.",
            &["beverage", "youth"],
        ),
        brand(
            "bm-def-banhmi",
            "DEF Banh Mi",
            "Bakery",
            "Can Tho",
            15,
            150_000_000,
            500_000_000,
            "Banh mi with grilled meats and fresh greens.",
            &["food", "street-food"],
        ),
        brand(
            "bm-fitzone",
            "FitZone",
            "Fitness",
            "Hanoi",
            12,
            400_000_000,
            1_500_000_000,
            "Compact neighborhood gyms with a subscription model.",
            &["fitness", "urban"],
        ),
        brand(
            "bm-brighted",
            "BrightEd",
            "Education",
            "Ho Chi Minh City",
            8,
            250_000_000,
            900_000_000,
            "After-school learning centers for primary students.",
            &["education"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_contains_owner() {
        assert!(demo_brands().iter().any(|b| b.id == DEMO_OWNER_ID));
    }

    #[test]
    fn demo_catalog_ids_are_unique() {
        let brands = demo_brands();
        let mut ids: Vec<_> = brands.iter().map(|b| b.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), brands.len());
    }
}
