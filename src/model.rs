use std::path::PathBuf;

/// A junk directory found during a scan, with the bytes held beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JunkMatch {
    pub path: PathBuf,
    pub size: u64,
}

impl JunkMatch {
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }
}

pub fn total_size(matches: &[JunkMatch]) -> u64 {
    matches.iter().map(|m| m.size).sum()
}
