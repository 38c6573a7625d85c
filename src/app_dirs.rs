use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    fn project() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "tapr")
    }

    pub fn config_path() -> PathBuf {
        Self::project()
            .map(|pd| pd.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from("tapr_config.json"))
    }

    /// Fetched word lists live here.
    pub fn cache_dir() -> Option<PathBuf> {
        Self::project().map(|pd| pd.cache_dir().join("word_lists"))
    }

    pub fn log_path() -> Option<PathBuf> {
        Self::project().map(|pd| pd.data_local_dir().join("tapr.log"))
    }
}
