//! Infinite-scroll pagination over a processed list
//!
//! The visible window is always a prefix of the current `ProcessedList`.
//! Growing it is a two-step affair: `begin_load_more` hands out a ticket and
//! the caller completes it after the simulated delay. Completion slices the
//! list the controller holds *at that moment*, and a ticket issued before a
//! reset is refused, so a late timer can never resurrect an old filter result.

use crate::item::Item;
use crate::process::ProcessedList;
use tracing::debug;

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Simulated latency of a "load more"
pub const LOAD_MORE_DELAY_MS: u64 = 500;

/// Distance from the document bottom that triggers a load
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Handle for one in-flight load-more
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Status line shown under the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Footer {
    LoadingMore,
    /// Everything that matches is on screen
    Exhausted,
    /// The catalog has items but none match
    NoMatches,
    /// The source returned no items at all
    EmptyCatalog,
    None,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pagination {
    page_size: usize,
    page: usize,
    visible_len: usize,
    processed: ProcessedList,
    pending: Option<LoadTicket>,
    next_ticket: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 1,
            visible_len: 0,
            processed: ProcessedList::default(),
            pending: None,
            next_ticket: 0,
        }
    }

    /// Adopt a new processed list. Returns true if the window was reset.
    ///
    /// A list equal to the current one (by identity or by value) leaves the
    /// page and any pending load alone.
    pub fn sync(&mut self, processed: ProcessedList) -> bool {
        if processed == self.processed {
            return false;
        }

        if let Some(ticket) = self.pending.take() {
            debug!("Dropping pending load {:?} after list change", ticket);
        }
        self.page = 1;
        self.visible_len = self.page_size.min(processed.len());
        self.processed = processed;
        debug!(
            "Pagination reset: showing {} of {}",
            self.visible_len,
            self.processed.len()
        );
        true
    }

    /// Start growing the window. `None` if a load is already running or
    /// nothing is left to show.
    pub fn begin_load_more(&mut self) -> Option<LoadTicket> {
        if self.pending.is_some() || !self.has_more() {
            return None;
        }
        let ticket = LoadTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        Some(ticket)
    }

    /// Finish a load started by `begin_load_more`. Returns false for a ticket
    /// that is no longer pending.
    pub fn complete_load_more(&mut self, ticket: LoadTicket) -> bool {
        if self.pending != Some(ticket) {
            debug!("Ignoring stale load {:?}", ticket);
            return false;
        }
        self.pending = None;
        self.page += 1;
        self.visible_len = (self.page * self.page_size).min(self.processed.len());
        debug!(
            "Page {}: showing {} of {}",
            self.page,
            self.visible_len,
            self.processed.len()
        );
        true
    }

    pub fn visible(&self) -> &[Item] {
        self.processed.head(self.visible_len)
    }

    pub fn processed(&self) -> &ProcessedList {
        &self.processed
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loading_more(&self) -> bool {
        self.pending.is_some()
    }

    pub fn has_more(&self) -> bool {
        self.visible_len < self.processed.len()
    }

    /// Placeholder cards to render while a load is running
    pub fn skeleton_count(&self) -> usize {
        if self.is_loading_more() && self.has_more() {
            self.page_size
        } else {
            0
        }
    }

    /// `catalog_len` is the size of the unfiltered catalog
    pub fn footer(&self, catalog_len: usize) -> Footer {
        if self.is_loading_more() {
            Footer::LoadingMore
        } else if !self.processed.is_empty() && !self.has_more() {
            Footer::Exhausted
        } else if self.processed.is_empty() {
            if catalog_len > 0 {
                Footer::NoMatches
            } else {
                Footer::EmptyCatalog
            }
        } else {
            Footer::None
        }
    }
}

/// Whether the viewport bottom is within `threshold` of the document bottom
pub fn near_bottom(
    viewport_height: f64,
    scroll_y: f64,
    document_height: f64,
    threshold: f64,
) -> bool {
    viewport_height + scroll_y >= document_height - threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::PricingOption;

    fn list(n: usize) -> ProcessedList {
        (0..n)
            .map(|i| Item {
                id: format!("item-{i}"),
                creator: "c".to_string(),
                title: format!("Title {i}"),
                pricing_option: PricingOption::Free,
                image_path: String::new(),
                price: 0.0,
            })
            .collect::<Vec<_>>()
            .into()
    }

    fn load_more(p: &mut Pagination) -> bool {
        match p.begin_load_more() {
            Some(ticket) => p.complete_load_more(ticket),
            None => false,
        }
    }

    #[test]
    fn test_growth_clamps_to_list_length() {
        let mut p = Pagination::new(12);
        p.sync(list(25));
        assert_eq!(p.visible().len(), 12);

        assert!(load_more(&mut p));
        assert_eq!(p.visible().len(), 24);

        assert!(load_more(&mut p));
        assert_eq!(p.visible().len(), 25);
        assert!(!p.has_more());

        assert!(!load_more(&mut p));
        assert_eq!(p.page(), 3);
    }

    #[test]
    fn test_second_begin_while_loading_is_noop() {
        let mut p = Pagination::new(12);
        p.sync(list(30));

        let ticket = p.begin_load_more();
        assert!(ticket.is_some());
        assert!(p.is_loading_more());
        assert_eq!(p.begin_load_more(), None);
    }

    #[test]
    fn test_reset_drops_stale_ticket() {
        let mut p = Pagination::new(12);
        p.sync(list(30));
        let ticket = p.begin_load_more().unwrap();

        assert!(p.sync(list(20)));
        assert!(!p.complete_load_more(ticket));
        assert_eq!(p.page(), 1);
        assert_eq!(p.visible().len(), 12);
        assert!(!p.is_loading_more());
    }

    #[test]
    fn test_equal_list_does_not_reset() {
        let mut p = Pagination::new(12);
        p.sync(list(30));
        load_more(&mut p);

        assert!(!p.sync(list(30)));
        assert_eq!(p.page(), 2);
        assert_eq!(p.visible().len(), 24);
    }

    #[test]
    fn test_skeletons_only_while_loading() {
        let mut p = Pagination::new(12);
        p.sync(list(30));
        assert_eq!(p.skeleton_count(), 0);

        p.begin_load_more();
        assert_eq!(p.skeleton_count(), 12);
    }

    #[test]
    fn test_footer_states() {
        let mut p = Pagination::new(12);
        assert_eq!(p.footer(0), Footer::EmptyCatalog);

        p.sync(list(0));
        assert_eq!(p.footer(5), Footer::NoMatches);

        p.sync(list(5));
        assert_eq!(p.footer(5), Footer::Exhausted);

        p.sync(list(30));
        assert_eq!(p.footer(30), Footer::None);
        p.begin_load_more();
        assert_eq!(p.footer(30), Footer::LoadingMore);
    }

    #[test]
    fn test_empty_catalog_is_not_reported_as_no_matches() {
        let mut p = Pagination::new(12);
        p.sync(list(0));
        assert_eq!(p.footer(0), Footer::EmptyCatalog);
        assert_eq!(p.skeleton_count(), 0);
        assert_eq!(p.begin_load_more(), None);
    }

    #[test]
    fn test_near_bottom() {
        assert!(near_bottom(800.0, 1150.0, 2000.0, SCROLL_THRESHOLD_PX));
        assert!(near_bottom(800.0, 1100.0, 2000.0, SCROLL_THRESHOLD_PX));
        assert!(!near_bottom(800.0, 1000.0, 2000.0, SCROLL_THRESHOLD_PX));
    }
}
