use std::collections::HashMap;

use crate::logging;
use crate::model::SearchMode;

/// Typed snapshot of the host's key -> value preference map, taken at event
/// time and read-only until the host pushes a replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub all_keyword: String,
    pub files_keyword: String,
    pub files_ext_keyword: String,
    pub dirs_keyword: String,
    pub base_dir: String,
    pub ignored_folders: Vec<String>,
    pub ignored_files: Vec<String>,
    pub terminal_emulator: String,
}

impl Preferences {
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        Self {
            all_keyword: string_pref(map, "fa_kw", "fa"),
            files_keyword: string_pref(map, "ff_kw", "ff"),
            files_ext_keyword: string_pref(map, "ffe_kw", "ffe"),
            dirs_keyword: string_pref(map, "fd_kw", "fd"),
            base_dir: string_pref(map, "base_dir", &default_base_dir()),
            ignored_folders: split_patterns(map.get("ignore_folders").map(String::as_str)),
            ignored_files: split_patterns(map.get("ignore_files").map(String::as_str)),
            terminal_emulator: string_pref(map, "terminal_emulator", ""),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordBinding {
    pub mode: SearchMode,
    pub append_extension: bool,
}

/// Explicit keyword -> binding lookup built once per preferences snapshot.
/// First binding wins; a duplicate keyword is logged and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMap {
    bindings: HashMap<String, KeywordBinding>,
}

impl KeywordMap {
    pub fn from_preferences(prefs: &Preferences) -> Self {
        let declared = [
            (&prefs.all_keyword, SearchMode::All, false),
            (&prefs.files_keyword, SearchMode::File, false),
            (&prefs.files_ext_keyword, SearchMode::File, true),
            (&prefs.dirs_keyword, SearchMode::Directory, false),
        ];

        let mut bindings = HashMap::new();
        for (keyword, mode, append_extension) in declared {
            let keyword = keyword.trim();
            if keyword.is_empty() {
                continue;
            }
            if bindings.contains_key(keyword) {
                logging::warn(&format!(
                    "keyword '{keyword}' is bound more than once; keeping the first binding"
                ));
                continue;
            }
            bindings.insert(
                keyword.to_string(),
                KeywordBinding {
                    mode,
                    append_extension,
                },
            );
        }

        Self { bindings }
    }

    pub fn resolve(&self, keyword: &str) -> Option<KeywordBinding> {
        self.bindings.get(keyword).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

fn string_pref(map: &HashMap<String, String>, key: &str, fallback: &str) -> String {
    match map.get(key) {
        Some(value) => value.clone(),
        None => fallback.to_string(),
    }
}

fn split_patterns(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

fn default_base_dir() -> String {
    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => home,
        _ => "/".to_string(),
    }
}
