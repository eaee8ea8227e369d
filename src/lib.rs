// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app_dirs;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod menu;
pub mod runtime;
pub mod session;
pub mod speech;
pub mod util;

pub use error::{Error, Result};
