mod app_state;
mod modal;
mod panels;

pub use app_state::*;
pub use modal::*;
pub use panels::*;
