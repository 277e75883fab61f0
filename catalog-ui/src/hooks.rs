//! Hooks that wire the catalog pipeline into Dioxus
//!
//! items + URL -> `use_processed_items` (memo) -> `use_pagination` (signal)
//! -> view. Each stage only notifies downstream when its value changed.

use crate::stores::{CatalogState, CatalogStateStoreExt, UrlParams};
use crate::wasm_utils::WindowEventListener;
use catalog_common::{
    load_items, near_bottom, CatalogConfig, ItemSource, LoadStatus, Pagination, ProcessCache,
    ProcessedList,
};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Load the catalog once on mount. The returned callback re-runs the load
/// and is only wired to the manual retry button.
pub fn use_catalog_loader<S>(
    state: Store<CatalogState>,
    source: S,
    config: &CatalogConfig,
) -> Callback<()>
where
    S: ItemSource + 'static,
{
    let source = use_hook(move || Rc::new(source));
    let placeholder_image = config.placeholder_image.clone();

    let load = use_callback(move |()| {
        let source = source.clone();
        let placeholder_image = placeholder_image.clone();
        spawn(async move {
            state.status().set(LoadStatus::Loading);
            match load_items(&*source, &placeholder_image).await {
                Ok(items) => {
                    state.items().set(items.into());
                    state.status().set(LoadStatus::Succeeded);
                }
                Err(e) => state.status().set(LoadStatus::Failed(e.to_string())),
            }
        });
    });

    use_hook(move || load.call(()));
    load
}

/// Filtered and sorted catalog for the current URL.
///
/// The memo re-runs on any URL or item change; the cache inside it returns
/// the previous allocation when the inputs that matter are unchanged.
pub fn use_processed_items(state: Store<CatalogState>, url: UrlParams) -> Memo<ProcessedList> {
    let cache = use_hook(|| Rc::new(RefCell::new(ProcessCache::new())));

    use_memo(move || {
        let params = url.filter_params();
        let items = state.items().read().clone();
        cache.borrow_mut().get(&items, &params)
    })
}

/// Handle to the pagination state plus the delayed load-more action
#[derive(Clone, Copy, PartialEq)]
pub struct Pager {
    state: Signal<Pagination>,
    delay_ms: u64,
}

impl Pager {
    pub fn state(&self) -> ReadSignal<Pagination> {
        self.state.into()
    }

    /// Reveal the next page after the simulated delay. No-op while a load is
    /// running or when everything is visible.
    pub fn load_more(&self) {
        let mut state = self.state;
        let Some(ticket) = state.write().begin_load_more() else {
            return;
        };
        let delay_ms = self.delay_ms;
        spawn(async move {
            sleep_ms(delay_ms).await;
            state.write().complete_load_more(ticket);
        });
    }
}

/// Pagination over `processed`, reset whenever the processed list changes
pub fn use_pagination(processed: Memo<ProcessedList>, config: &CatalogConfig) -> Pager {
    let page_size = config.page_size;
    let mut state = use_signal(|| Pagination::new(page_size));

    use_effect(move || {
        let list = processed();
        state.write().sync(list);
    });

    Pager {
        state,
        delay_ms: config.load_more_delay_ms,
    }
}

/// Call `on_near_bottom` whenever a window scroll ends within `threshold`
/// pixels of the bottom of the document
pub fn use_scroll_trigger(threshold: f64, on_near_bottom: Callback<()>) {
    let mut hit = use_signal(|| false);

    use_hook(move || {
        let window = web_sys_x::window()?;
        let listener = WindowEventListener::new(window, "scroll", move |_| {
            let Some(window) = web_sys_x::window() else {
                return;
            };
            let viewport = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let document_height = window
                .document()
                .and_then(|d| d.document_element())
                .map(|el| el.scroll_height() as f64)
                .unwrap_or(0.0);

            if near_bottom(viewport, scroll_y, document_height, threshold) && !*hit.peek() {
                hit.set(true);
            }
        });
        Some(Rc::new(listener))
    });

    use_effect(move || {
        if !hit() {
            return;
        }
        hit.set(false);
        debug!("Scrolled near bottom");
        on_near_bottom.call(());
    });
}

