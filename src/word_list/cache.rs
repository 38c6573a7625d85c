use std::fs;
use std::path::{Path, PathBuf};

use super::WordListError;
use crate::app_dirs::AppDirs;

/// On-disk cache of fetched word lists, one file per URL.
#[derive(Debug, Clone)]
pub struct DiskCache {
    base_dir: PathBuf,
}

impl DiskCache {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Option<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).ok()?;
        Some(Self { base_dir })
    }

    pub fn in_default_location() -> Option<Self> {
        Self::new(AppDirs::cache_dir()?)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    pub fn put(&self, key: &str, content: &str) -> bool {
        fs::write(self.path_for(key), content).is_ok()
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(file_name_for(key))
    }
}

/// Percent-encode every byte outside `[A-Za-z0-9._-]`. `%` itself is
/// encoded, so distinct keys never share a file.
fn file_name_for(key: &str) -> String {
    let mut name = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'.' | b'_' | b'-' => {
                name.push(byte as char)
            }
            _ => name.push_str(&format!("%{byte:02X}")),
        }
    }
    name
}

#[cfg(feature = "network")]
pub fn fetch_url(url: &str) -> Result<String, WordListError> {
    let network = |e: reqwest::Error| WordListError::Network {
        url: url.to_string(),
        message: e.to_string(),
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .map_err(network)?;
    let response = client.get(url).send().map_err(network)?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(WordListError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    response.text().map_err(network)
}

#[cfg(not(feature = "network"))]
pub fn fetch_url(url: &str) -> Result<String, WordListError> {
    Err(WordListError::NetworkDisabled(url.to_string()))
}
