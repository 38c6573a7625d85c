use include_dir::{include_dir, Dir};
use serde::Deserialize;

use super::WordListError;

static LISTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/word_list/lists");

/// Word lists compiled into the binary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BuiltinList {
    English,
    Code,
}

#[allow(dead_code)]
#[derive(Deserialize, Debug)]
struct ListFile {
    name: String,
    size: usize,
    words: Vec<String>,
}

impl BuiltinList {
    pub const ALL: [BuiltinList; 2] = [BuiltinList::English, BuiltinList::Code];

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|list| list.to_string().eq_ignore_ascii_case(name.trim()))
    }

    pub fn load(self) -> Result<Vec<String>, WordListError> {
        let name = self.to_string();
        let file = LISTS_DIR
            .get_file(format!("{name}.json"))
            .ok_or_else(|| WordListError::Empty(name.clone()))?;
        let contents = file.contents_utf8().unwrap_or_default();
        let list: ListFile = serde_json::from_str(contents)
            .map_err(|e| WordListError::Malformed(name.clone(), e))?;

        if list.words.is_empty() {
            return Err(WordListError::Empty(name));
        }
        Ok(list.words)
    }
}
