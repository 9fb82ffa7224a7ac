//! Application state module

mod app_state;
mod focus;
pub mod forms;

pub use app_state::*;
pub use focus::{focus_order, FocusTarget};
