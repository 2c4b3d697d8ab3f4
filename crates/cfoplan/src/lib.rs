//! Terminal dashboard for CFOPlan budget sheets

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod export;
pub mod logging;
pub mod modals;
pub mod prompter;
pub mod state;
pub mod util;

pub use app::App;
pub use config::AppConfig;
pub use logging::init_logging;
