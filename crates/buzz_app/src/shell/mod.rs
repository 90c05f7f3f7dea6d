//! Terminal shell around the pure core: the command loop and everything
//! it needs to run effects and draw results.

mod app;
mod effects;
mod logging;
pub mod ui;

pub use app::run_app;
