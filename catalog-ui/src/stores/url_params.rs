//! URL-backed parameter store
//!
//! `UrlParams` keeps a reactive copy of the query string in a signal. The
//! router owns the real URL: every commit is written out through a
//! `UrlSubstrate`, and every query the router shows is fed back in with
//! `sync_from_url`. A commit updates the substrate before the signal, so
//! anything that re-renders on the signal already sees the new URL.

use catalog_common::{FilterParams, ParamStore, QueryParams};
use dioxus::prelude::*;
use std::rc::Rc;
use tracing::debug;

/// Where committed query strings are written
pub trait UrlSubstrate {
    /// Replace the query string of the current location, without the `?`
    fn write_query(&self, query: &str);
}

/// Copyable handle to the URL parameters, provided through context
#[derive(Clone, Copy, PartialEq)]
pub struct UrlParams {
    params: Signal<QueryParams>,
    substrate: CopyValue<Rc<dyn UrlSubstrate>>,
}

impl UrlParams {
    /// Typed filter parameters; subscribes the caller to URL changes
    pub fn filter_params(&self) -> FilterParams {
        FilterParams::from_query(&self.params.read())
    }

    /// Adopt the query the URL currently shows. Navigation the app did not
    /// commit itself (links, back/forward) arrives here.
    pub fn sync_from_url(&mut self, query: &str) {
        let current = QueryParams::parse(query);
        if *self.params.peek() != current {
            debug!("URL changed externally: {:?}", current.to_query_string());
            self.params.set(current);
        }
    }
}

impl ParamStore for UrlParams {
    fn snapshot(&self) -> QueryParams {
        self.params.read().clone()
    }

    fn commit(&mut self, next: QueryParams) {
        if *self.params.peek() == next {
            return;
        }
        let query = next.to_query_string();
        debug!("Writing URL params: {:?}", query);
        self.substrate.read().write_query(&query);
        self.params.set(next);
    }
}

/// Create the `UrlParams` handle from the query the page was opened with and
/// provide it to descendants
pub fn use_url_params_provider(
    initial_query: &str,
    substrate: impl FnOnce() -> Rc<dyn UrlSubstrate>,
) -> UrlParams {
    let initial_query = initial_query.to_string();
    use_context_provider(move || UrlParams {
        params: Signal::new(QueryParams::parse(&initial_query)),
        substrate: CopyValue::new(substrate()),
    })
}

/// Fetch the `UrlParams` handle provided by an ancestor
pub fn use_url_params() -> UrlParams {
    use_context::<UrlParams>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_common::params::{reset_defaults, SEARCH, SORT};
    use std::cell::{Cell, RefCell};

    /// Records each write together with what the signal held at that moment
    #[derive(Default)]
    struct RecordingUrl {
        watched: Cell<Option<UrlParams>>,
        writes: RefCell<Vec<(String, String)>>,
    }

    impl UrlSubstrate for RecordingUrl {
        fn write_query(&self, query: &str) {
            let signal_at_write = self
                .watched
                .get()
                .map(|url| url.params.peek().to_query_string())
                .unwrap_or_default();
            self.writes
                .borrow_mut()
                .push((query.to_string(), signal_at_write));
        }
    }

    type Check = fn(UrlParams, &RecordingUrl);

    /// Run `check` inside a component so hooks and signals have an owner
    fn run(initial_query: &'static str, check: Check) {
        fn harness(props: (&'static str, Check)) -> Element {
            let (initial_query, check) = props;
            let recorder = use_hook(|| Rc::new(RecordingUrl::default()));
            let substrate: Rc<dyn UrlSubstrate> = recorder.clone();
            let url = use_url_params_provider(initial_query, move || substrate);
            recorder.watched.set(Some(url));
            check(url, &recorder);
            rsx! {}
        }

        let mut dom = VirtualDom::new_with_props(harness, (initial_query, check));
        dom.rebuild_in_place();
    }

    #[test]
    fn test_substrate_written_before_signal() {
        run("sort=low", |mut url, recorder| {
            url.set_param(SEARCH, "hat");

            let writes = recorder.writes.borrow();
            assert_eq!(
                *writes,
                vec![("sort=low&search=hat".to_string(), "sort=low".to_string())]
            );
            assert_eq!(url.get_param(SEARCH), "hat");
        });
    }

    #[test]
    fn test_noop_commit_is_skipped() {
        run("sort=low", |mut url, recorder| {
            url.set_param(SORT, "low");
            assert!(recorder.writes.borrow().is_empty());
        });
    }

    #[test]
    fn test_reset_all_is_one_write() {
        run("search=x&pricing=paid&sort=high", |mut url, recorder| {
            url.reset_all(reset_defaults());

            let writes = recorder.writes.borrow();
            assert_eq!(writes.len(), 1);
            assert_eq!(writes[0].0, "sort=name&min=0&max=999");
            assert_eq!(url.get_param(SEARCH), "");
        });
    }

    #[test]
    fn test_sync_from_url_adopts_external_change() {
        run("search=x", |mut url, recorder| {
            url.sync_from_url("?search=coat&sort=high");

            assert_eq!(url.filter_params().search, "coat");
            assert_eq!(url.get_param(SORT), "high");
            assert!(recorder.writes.borrow().is_empty());

            url.sync_from_url("");
            assert_eq!(url.filter_params().search, "");
        });
    }
}
