//! Resolves the `--word-list` argument into an ordered list of words and
//! draws the test words from it.

pub mod builtin;
pub mod cache;

use std::fmt;
use std::io;
use std::path::PathBuf;

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

pub use builtin::BuiltinList;
pub use cache::DiskCache;

#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("word list file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not fetch {url}: {message}")]
    Network { url: String, message: String },
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
    #[error("word list {0} contains no words")]
    Empty(String),
    #[error("built-in word list {0} is malformed: {1}")]
    Malformed(String, #[source] serde_json::Error),
    #[error("cannot fetch {0}: this build has no network support")]
    NetworkDisabled(String),
}

/// Where the words come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Builtin(BuiltinList),
    Url(String),
    File(PathBuf),
}

impl WordSource {
    pub fn parse(arg: &str) -> Self {
        if let Some(list) = BuiltinList::from_name(arg) {
            WordSource::Builtin(list)
        } else if arg.starts_with("http://") || arg.starts_with("https://") {
            WordSource::Url(arg.to_string())
        } else {
            WordSource::File(PathBuf::from(arg))
        }
    }

    /// Comma separated names of the built-in lists, for help text.
    pub fn builtin_names() -> String {
        BuiltinList::ALL.iter().join(", ")
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSource::Builtin(list) => write!(f, "{list}"),
            WordSource::Url(url) => write!(f, "{url}"),
            WordSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load every word of `source`, in order. URLs go through `cache` when one
/// is available.
pub fn load(source: &WordSource, cache: Option<&DiskCache>) -> Result<Vec<String>, WordListError> {
    let words = match source {
        WordSource::Builtin(list) => list.load()?,
        WordSource::File(path) => {
            let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => WordListError::NotFound(path.clone()),
                _ => WordListError::Io {
                    path: path.clone(),
                    source: e,
                },
            })?;
            split_words(&contents)
        }
        WordSource::Url(url) => load_url(url, cache)?,
    };

    if words.is_empty() {
        return Err(WordListError::Empty(source.to_string()));
    }

    tracing::info!(source = %source, words = words.len(), "word list loaded");
    Ok(words)
}

fn load_url(url: &str, cache: Option<&DiskCache>) -> Result<Vec<String>, WordListError> {
    if let Some(cached) = cache.and_then(|c| c.get(url)) {
        tracing::debug!(url, "word list cache hit");
        return Ok(split_words(&cached));
    }

    let body = cache::fetch_url(url)?;
    let words = split_words(&body);
    if !words.is_empty() {
        if let Some(cache) = cache {
            if !cache.put(url, &body) {
                tracing::warn!(url, "could not cache word list");
            }
        }
    }
    Ok(words)
}

fn split_words(contents: &str) -> Vec<String> {
    contents.split_whitespace().map(str::to_string).collect()
}

/// Draw `count` words without replacement; asking for more words than the
/// list holds yields the whole list in random order.
pub fn sample<R: Rng + ?Sized>(words: &[String], count: usize, rng: &mut R) -> Vec<String> {
    words
        .choose_multiple(rng, count.min(words.len()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn parse_recognizes_each_kind() {
        assert_eq!(
            WordSource::parse("english"),
            WordSource::Builtin(BuiltinList::English)
        );
        assert_eq!(
            WordSource::parse("https://example.com/w.txt"),
            WordSource::Url("https://example.com/w.txt".into())
        );
        assert_eq!(
            WordSource::parse("http://example.com/w.txt"),
            WordSource::Url("http://example.com/w.txt".into())
        );
        assert_eq!(
            WordSource::parse("./words.txt"),
            WordSource::File(PathBuf::from("./words.txt"))
        );
    }

    #[test]
    fn builtin_names_lists_all() {
        assert_eq!(WordSource::builtin_names(), "english, code");
    }

    #[test]
    fn loads_file_split_on_whitespace() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "alpha beta\ngamma\t delta\n").unwrap();

        let source = WordSource::File(file.path().to_path_buf());
        let words = load(&source, None).unwrap();
        assert_eq!(words, vec!["alpha", "beta", "gamma", "delta"]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let source = WordSource::File(PathBuf::from("/definitely/not/here.txt"));
        assert_matches!(load(&source, None), Err(WordListError::NotFound(_)));
    }

    #[test]
    fn blank_file_is_empty_error() {
        let file = NamedTempFile::new().unwrap();
        let source = WordSource::File(file.path().to_path_buf());
        assert_matches!(load(&source, None), Err(WordListError::Empty(_)));
    }

    #[test]
    fn url_served_from_cache_without_network() {
        let dir = tempdir().unwrap();
        let cache = DiskCache::new(dir.path()).unwrap();
        let url = "https://example.invalid/words.txt";
        cache.put(url, "one two three");

        let words = load(&WordSource::Url(url.into()), Some(&cache)).unwrap();
        assert_eq!(words, vec!["one", "two", "three"]);
    }

    #[test]
    fn error_messages_are_readable() {
        let err = WordListError::NotFound(PathBuf::from("/tmp/x.txt"));
        assert_eq!(err.to_string(), "word list file not found: /tmp/x.txt");

        let err = WordListError::Status {
            url: "https://a.b".into(),
            status: 404,
        };
        assert_eq!(err.to_string(), "https://a.b responded with status 404");
    }

    #[test]
    fn sample_clamps_to_list_length() {
        let words: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let mut rng = StdRng::seed_from_u64(7);

        let picked = sample(&words, 5, &mut rng);
        assert_eq!(picked.len(), 3);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn sample_is_without_replacement() {
        let words: Vec<String> = (0..50).map(|i| format!("w{i}")).collect();
        let mut rng = StdRng::seed_from_u64(42);

        let picked = sample(&words, 20, &mut rng);
        assert_eq!(picked.len(), 20);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 20);
        assert!(picked.iter().all(|w| words.contains(w)));
    }

    #[test]
    fn sample_is_reproducible_with_seed() {
        let words: Vec<String> = (0..50).map(|i| format!("w{i}")).collect();
        let a = sample(&words, 10, &mut StdRng::seed_from_u64(1));
        let b = sample(&words, 10, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
