pub mod crypto;
pub mod favorites;
pub mod news;
pub mod notifications;
pub mod weather;

mod store;

pub use store::{Action, AppState, Store};
