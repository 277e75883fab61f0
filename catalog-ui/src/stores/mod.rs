//! Store types for UI state management
//!
//! The catalog store derives `Store` for fine-grained reactivity via lensing.
//! Filter state is not a store: it lives in the URL behind `UrlParams`.

pub mod catalog;
pub mod url_params;

pub use catalog::*;
pub use url_params::*;
