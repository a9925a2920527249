mod auth;
mod selection;

pub use auth::TokenProvider;
pub use selection::MAX_SELECTED;
pub use selection::SelectionManager;
