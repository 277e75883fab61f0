mod home;
mod layout;

pub use home::Home;
pub use layout::AppLayout;
