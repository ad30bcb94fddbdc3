use jwalk::{Parallelism, WalkDir};
use std::path::Path;

/// Sums the sizes of all regular files under `path`.
///
/// Entries whose metadata cannot be read contribute nothing. Symlinks are
/// neither followed nor counted.
pub fn calculate_size(path: &Path) -> u64 {
    let mut size = 0;

    // Serial walk: directory listings are streamed one at a time
    for entry in WalkDir::new(path)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(Parallelism::Serial)
        .into_iter()
        .flatten()
    {
        if let Ok(metadata) = entry.metadata()
            && metadata.is_file()
        {
            size += metadata.len();
        }
    }

    size
}
