//! Filter-sort engine
//!
//! `process` turns the full item list plus a parameter snapshot into the
//! ordered list the view paginates over. It is pure; `ProcessCache` sits in
//! front of it so unchanged inputs hand back the same allocation.

use crate::item::{Item, PricingOption};
use crate::params::{FilterParams, SortOrder};
use std::cmp::Ordering;
use std::ops::Deref;
use std::sync::Arc;
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Filtered and sorted projection of the catalog.
///
/// Equality checks pointer identity first and falls back to comparing
/// contents, so a recomputation that yields the same items still compares
/// equal.
#[derive(Clone, Debug)]
pub struct ProcessedList(Arc<[Item]>);

impl Default for ProcessedList {
    fn default() -> Self {
        Self(Vec::new().into())
    }
}

impl ProcessedList {
    /// True when both lists share one allocation
    pub fn same_allocation(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// First `n` items, clamped to the list length
    pub fn head(&self, n: usize) -> &[Item] {
        &self.0[..n.min(self.0.len())]
    }
}

impl PartialEq for ProcessedList {
    fn eq(&self, other: &Self) -> bool {
        self.same_allocation(other) || self.0 == other.0
    }
}

impl Deref for ProcessedList {
    type Target = [Item];

    fn deref(&self) -> &[Item] {
        &self.0
    }
}

impl From<Vec<Item>> for ProcessedList {
    fn from(items: Vec<Item>) -> Self {
        Self(items.into())
    }
}

/// Whether `item` passes every active filter
pub fn matches(item: &Item, params: &FilterParams) -> bool {
    let matches_pricing =
        params.pricing.is_empty() || params.includes(item.pricing_option.category());

    let matches_search = params.search.is_empty()
        || item.title.to_lowercase().contains(&params.search)
        || item.creator.to_lowercase().contains(&params.search);

    // With `paid` selected only in-range paid items pass, whatever else is selected
    let matches_price_range = !params.price_range_active()
        || (item.pricing_option == PricingOption::Paid
            && item.price >= params.min_price
            && item.price <= params.max_price);

    matches_pricing && matches_search && matches_price_range
}

/// Lowercased canonical decomposition, optionally without accents
fn fold(title: &str, strip_accents: bool) -> String {
    title
        .nfd()
        .filter(|c| !(strip_accents && is_combining_mark(*c)))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Title order as a root-locale collator sees it: base letters first, then
/// accents (unaccented first), then case (lowercase first)
fn compare_titles(a: &str, b: &str) -> Ordering {
    fold(a, true)
        .cmp(&fold(b, true))
        .then_with(|| fold(a, false).cmp(&fold(b, false)))
        .then_with(|| b.cmp(a))
}

pub fn compare(a: &Item, b: &Item, sort: SortOrder) -> Ordering {
    match sort {
        SortOrder::High => b.price.total_cmp(&a.price),
        SortOrder::Low => a.price.total_cmp(&b.price),
        SortOrder::Name => compare_titles(&a.title, &b.title),
    }
}

/// Filter then stable-sort `items` for `params`
pub fn process(items: &[Item], params: &FilterParams) -> ProcessedList {
    let mut kept: Vec<Item> = items
        .iter()
        .filter(|item| matches(item, params))
        .cloned()
        .collect();
    kept.sort_by(|a, b| compare(a, b, params.sort));
    kept.into()
}

/// Memo for `process` keyed on the item list's identity and the parameter value
#[derive(Debug, Default)]
pub struct ProcessCache {
    key: Option<(Arc<[Item]>, FilterParams)>,
    output: ProcessedList,
    computations: u64,
}

impl ProcessCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, items: &Arc<[Item]>, params: &FilterParams) -> ProcessedList {
        let fresh = match &self.key {
            Some((cached_items, cached_params)) => {
                Arc::ptr_eq(cached_items, items) && cached_params == params
            }
            None => false,
        };

        if !fresh {
            self.output = process(items, params);
            self.key = Some((Arc::clone(items), params.clone()));
            self.computations += 1;
            debug!(
                "Processed {} of {} items (sort: {})",
                self.output.len(),
                items.len(),
                params.sort.as_str()
            );
        }

        self.output.clone()
    }

    /// How many times `process` actually ran
    pub fn computations(&self) -> u64 {
        self.computations
    }
}
