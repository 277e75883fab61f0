//! catalog-ui - Stores, hooks and view components for the catalog browser
//!
//! Components here are pure views driven by props and callbacks. The web
//! crate wires them to the URL and the HTTP source.

pub mod components;
pub mod hooks;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
