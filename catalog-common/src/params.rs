//! Typed view of the filter/sort URL parameters
//!
//! `FilterParams` is always derived from a `QueryParams` snapshot and never
//! stored on its own, so it cannot drift from the URL.

use crate::query::{ParamStore, QueryParams, LIST_SEPARATOR};

pub const SEARCH: &str = "search";
pub const PRICING: &str = "pricing";
pub const SORT: &str = "sort";
pub const MIN: &str = "min";
pub const MAX: &str = "max";

pub const DEFAULT_MIN_PRICE: f64 = 0.0;
pub const DEFAULT_MAX_PRICE: f64 = 999.0;

/// Value of the `pricing` list parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PricingCategory {
    Free,
    Paid,
    View,
}

impl PricingCategory {
    /// Order the filter bar shows them in
    pub const ALL: [PricingCategory; 3] = [
        PricingCategory::Paid,
        PricingCategory::Free,
        PricingCategory::View,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PricingCategory::Free => "free",
            PricingCategory::Paid => "paid",
            PricingCategory::View => "view",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PricingCategory::Free => "Free",
            PricingCategory::Paid => "Paid",
            PricingCategory::View => "View Only",
        }
    }
}

/// Value of the `sort` parameter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Title, alphabetical
    #[default]
    Name,
    /// Price, highest first
    High,
    /// Price, lowest first
    Low,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Name, SortOrder::High, SortOrder::Low];

    /// Unknown or empty values fall back to `Name`
    pub fn from_param(raw: &str) -> Self {
        match raw {
            "high" => SortOrder::High,
            "low" => SortOrder::Low,
            _ => SortOrder::Name,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Name => "name",
            SortOrder::High => "high",
            SortOrder::Low => "low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Name => "Item Name",
            SortOrder::High => "Higher Price",
            SortOrder::Low => "Lower Price",
        }
    }
}

/// Parse a price bound. Empty or non-numeric input yields `default`.
pub fn parse_price(raw: &str, default: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => default,
    }
}

/// Parameters the filter-sort engine consumes
#[derive(Clone, Debug, PartialEq)]
pub struct FilterParams {
    /// Lower-cased search needle; empty disables the search filter
    pub search: String,
    /// Raw `pricing` entries. Unknown entries are kept and match nothing.
    pub pricing: Vec<String>,
    pub min_price: f64,
    pub max_price: f64,
    pub sort: SortOrder,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self::from_query(&QueryParams::new())
    }
}

impl FilterParams {
    pub fn from_query(query: &QueryParams) -> Self {
        let pricing = match query.get(PRICING) {
            Some(raw) if !raw.is_empty() => raw.split(LIST_SEPARATOR).map(str::to_string).collect(),
            _ => Vec::new(),
        };

        Self {
            search: query.get(SEARCH).unwrap_or_default().to_lowercase(),
            pricing,
            min_price: parse_price(query.get(MIN).unwrap_or_default(), DEFAULT_MIN_PRICE),
            max_price: parse_price(query.get(MAX).unwrap_or_default(), DEFAULT_MAX_PRICE),
            sort: SortOrder::from_param(query.get(SORT).unwrap_or_default()),
        }
    }

    pub fn from_store(store: &impl ParamStore) -> Self {
        Self::from_query(&store.snapshot())
    }

    pub fn includes(&self, category: PricingCategory) -> bool {
        self.pricing.iter().any(|p| p == category.as_str())
    }

    /// The price range only applies while `paid` is selected
    pub fn price_range_active(&self) -> bool {
        self.includes(PricingCategory::Paid)
    }
}

/// Parameter set the "Reset" action writes in one go
pub fn reset_defaults() -> QueryParams {
    QueryParams::from_pairs([
        (SORT, SortOrder::Name.as_str().to_string()),
        (MIN, DEFAULT_MIN_PRICE.to_string()),
        (MAX, DEFAULT_MAX_PRICE.to_string()),
    ])
}

/// `pricing` list with `category` toggled on or off
pub fn toggle_pricing(current: &[String], category: PricingCategory) -> Vec<String> {
    let value = category.as_str();
    if current.iter().any(|p| p == value) {
        current.iter().filter(|p| *p != value).cloned().collect()
    } else {
        let mut next = current.to_vec();
        next.push(value.to_string());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::MemoryParamStore;

    #[test]
    fn test_defaults_from_empty_query() {
        let params = FilterParams::default();
        assert_eq!(params.search, "");
        assert!(params.pricing.is_empty());
        assert_eq!(params.min_price, 0.0);
        assert_eq!(params.max_price, 999.0);
        assert_eq!(params.sort, SortOrder::Name);
    }

    #[test]
    fn test_search_is_lowercased() {
        let params = FilterParams::from_query(&QueryParams::parse("search=Denim"));
        assert_eq!(params.search, "denim");
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let params = FilterParams::from_query(&QueryParams::parse("min=abc&max=&sort=price"));
        assert_eq!(params.min_price, DEFAULT_MIN_PRICE);
        assert_eq!(params.max_price, DEFAULT_MAX_PRICE);
        assert_eq!(params.sort, SortOrder::Name);
    }

    #[test]
    fn test_explicit_zero_max_is_kept() {
        let params = FilterParams::from_query(&QueryParams::parse("max=0"));
        assert_eq!(params.max_price, 0.0);
    }

    #[test]
    fn test_unknown_pricing_values_are_kept() {
        let params = FilterParams::from_query(&QueryParams::parse("pricing=bogus"));
        assert_eq!(params.pricing, vec!["bogus"]);
        assert!(!params.includes(PricingCategory::Free));
    }

    #[test]
    fn test_reset_defaults_query() {
        let mut store = MemoryParamStore::from_query("search=x&pricing=paid&sort=high");
        store.reset_all(reset_defaults());

        assert_eq!(store.get_param("search"), "");
        assert!(store.get_param_array("pricing").is_empty());
        assert_eq!(store.get_param("sort"), "name");
        assert_eq!(store.query_string(), "sort=name&min=0&max=999");
    }

    #[test]
    fn test_toggle_pricing() {
        let on = toggle_pricing(&["free".to_string()], PricingCategory::Paid);
        assert_eq!(on, vec!["free", "paid"]);

        let off = toggle_pricing(&on, PricingCategory::Free);
        assert_eq!(off, vec!["paid"]);
    }
}
