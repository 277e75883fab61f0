//! Shared UI components

pub mod button;
pub mod catalog;
pub mod content_card;
pub mod content_skeleton;
pub mod filter_bar;
pub mod icons;
pub mod status;
pub mod text_input;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use catalog::CatalogView;
pub use content_card::ContentCard;
pub use content_skeleton::ContentSkeleton;
pub use filter_bar::FilterBar;
pub use icons::{ImageIcon, RefreshIcon, SearchIcon};
pub use status::{LoadError, LoadingState};
pub use text_input::{TextInput, TextInputSize};
