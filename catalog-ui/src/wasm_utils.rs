//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a Rust `Closure` must keep that closure
//! alive for as long as it is attached. `closure.forget()` does that by leaking
//! it, which also leaves the listener attached after the component is gone.
//!
//! Instead the closure is stored in a struct whose `Drop` removes the
//! listener, so the listener lives exactly as long as its owner:
//!
//! ```ignore
//! let listener = WindowEventListener::new(window, "scroll", callback);
//! // removed again here
//! drop(listener);
//! ```
//!
//! Held in a hook (`use_hook(|| Rc::new(listener))`) it goes away when the
//! component unmounts.

use wasm_bindgen_x::prelude::*;

/// A window event listener that removes itself when dropped.
pub struct WindowEventListener {
    window: web_sys_x::Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl WindowEventListener {
    /// Attach `callback` to `event_name` on the window as a passive listener.
    pub fn new(
        window: web_sys_x::Window,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        let options = web_sys_x::AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_name,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok();

        Self {
            window,
            event_name,
            callback,
        }
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
