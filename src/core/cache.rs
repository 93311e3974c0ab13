//! File system helpers for the on-disk reference data snapshot.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

/// `~/.cache/match-browser` (or `./.cache/match-browser` without a home).
pub fn cache_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("match-browser")
}

/// File-name-safe key for an API base URL.
///
/// `http://127.0.0.1:3000/api` → `http_127_0_0_1_3000_api`
pub fn api_cache_key(api_url: &str) -> String {
    api_url
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Path: ~/.cache/match-browser/reference_{api-key}.json
pub fn reference_cache_path(api_url: &str) -> PathBuf {
    cache_dir().join(format!("reference_{}.json", api_cache_key(api_url)))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
