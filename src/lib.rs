//! Interactive terminal process monitor: one snapshot of the busiest
//! processes, a navigable table, and kill-by-name on `enter`.

pub mod config;
pub mod error;
pub mod logging;
pub mod manager;
pub mod process;
pub mod tui;
