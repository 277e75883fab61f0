//! catalog-common - Pure catalog core shared by the UI and the web app
//!
//! Holds the item model, the query-parameter store, the filter-sort engine,
//! pagination, and the repository loader. Nothing in here touches the DOM or
//! the network directly.

pub mod config;
pub mod error;
pub mod item;
pub mod pagination;
pub mod params;
pub mod process;
pub mod query;
pub mod repository;

pub use config::CatalogConfig;
pub use error::FetchError;
pub use item::{Item, PricingOption, RawItem};
pub use pagination::{near_bottom, Footer, LoadTicket, Pagination};
pub use params::{FilterParams, PricingCategory, SortOrder};
pub use process::{process, ProcessCache, ProcessedList};
pub use query::{MemoryParamStore, ParamStore, QueryParams};
pub use repository::{load_items, ItemSource, LoadStatus};
