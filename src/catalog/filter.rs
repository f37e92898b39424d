use serde::{Deserialize, Serialize};

use crate::catalog::Brand;

/// Declarative filter applied to a catalog before a session starts.
///
/// Empty fields match everything; a populated list field matches if any of
/// its entries matches. String comparisons ignore ASCII case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFilter {
    pub industries: Vec<String>,
    pub locations: Vec<String>,
    pub min_investment: Option<u64>,
    pub max_investment: Option<u64>,
    pub tags: Vec<String>,
}

impl CatalogFilter {
    pub fn is_empty(&self) -> bool {
        self.industries.is_empty()
            && self.locations.is_empty()
            && self.min_investment.is_none()
            && self.max_investment.is_none()
            && self.tags.is_empty()
    }

    pub fn matches(&self, brand: &Brand) -> bool {
        if !self.industries.is_empty()
            && !contains_ignore_case(&self.industries, &brand.industry)
        {
            return false;
        }
        if !self.locations.is_empty() && !contains_ignore_case(&self.locations, &brand.location) {
            return false;
        }
        if let Some(min) = self.min_investment {
            if brand.minimum_investment < min {
                return false;
            }
        }
        if let Some(max) = self.max_investment {
            if brand.minimum_investment > max {
                return false;
            }
        }
        if !self.tags.is_empty()
            && !brand
                .tags
                .iter()
                .any(|tag| contains_ignore_case(&self.tags, tag))
        {
            return false;
        }
        true
    }

    pub fn apply(&self, brands: &[Brand]) -> Vec<Brand> {
        brands
            .iter()
            .filter(|brand| self.matches(brand))
            .cloned()
            .collect()
    }
}

fn contains_ignore_case(haystack: &[String], needle: &str) -> bool {
    haystack.iter().any(|item| item.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock::demo_brands;

    #[test]
    fn empty_filter_matches_all() {
        let filter = CatalogFilter::default();
        assert!(filter.is_empty());
        let brands = demo_brands();
        assert_eq!(filter.apply(&brands).len(), brands.len());
    }

    #[test]
    fn industry_filter_is_case_insensitive() {
        let filter = CatalogFilter {
            industries: vec!["coffee".to_string()],
            ..Default::default()
        };
        let matched = filter.apply(&demo_brands());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "ABC Coffee");
    }

    #[test]
    fn investment_range_bounds_are_inclusive() {
        let filter = CatalogFilter {
            min_investment: Some(800_000_000),
            max_investment: Some(1_000_000_000),
            ..Default::default()
        };
        let matched = filter.apply(&demo_brands());
        assert!(matched
            .iter()
            .all(|b| (800_000_000..=1_000_000_000).contains(&b.minimum_investment)));
        assert!(matched.iter().any(|b| b.minimum_investment == 800_000_000));
        assert!(matched
            .iter()
            .any(|b| b.minimum_investment == 1_000_000_000));
    }

    #[test]
    fn tag_filter_matches_any_overlap() {
        let filter = CatalogFilter {
            tags: vec!["URBAN".to_string()],
            ..Default::default()
        };
        let matched = filter.apply(&demo_brands());
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn combined_filters_intersect() {
        let filter = CatalogFilter {
            industries: vec!["Fitness".to_string()],
            locations: vec!["Da Nang".to_string()],
            ..Default::default()
        };
        assert!(filter.apply(&demo_brands()).is_empty());
    }
}
