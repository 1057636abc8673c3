pub mod filter;
pub mod form;
pub mod manager;
pub mod render;
pub mod store;
pub mod tags;

pub use manager::{ContactManager, Effect, Request, UiEvent};
