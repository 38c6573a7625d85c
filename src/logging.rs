use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Install a file logger when `RUST_LOG` is set. The terminal belongs to the
/// TUI, so nothing is ever written to stdout or stderr.
///
/// Returns true if a subscriber was installed.
pub fn init(log_path: Option<&Path>) -> bool {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return false;
    };
    let Some(path) = log_path else {
        return false;
    };

    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return false;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok()
}
