use std::fs::{self, OpenOptions};
use std::path::Path;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::error::Result;

/// Send log records to `path` (appending). The terminal belongs to the UI,
/// so there is no console logger.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file)?;
    log::info!("logging to {} at {}", path.display(), level);
    Ok(())
}
