use std::path::PathBuf;

use crate::config::project_dirs;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> Option<PathBuf> {
        project_dirs().map(|pd| pd.config_dir().join("config.json"))
    }

    /// Default location for `--log-file` when only a level is given
    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("kanapro");
            Some(state_dir.join("kanapro.log"))
        } else {
            project_dirs().map(|proj_dirs| proj_dirs.data_local_dir().join("kanapro.log"))
        }
    }
}
