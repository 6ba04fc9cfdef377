mod app;
mod config;
mod effects;
mod i18n;
mod input;
mod logging;
mod page;
mod ui;

pub use app::run_app;
pub use config::Args;
