pub mod utils;

use crate::constants::is_junk_name;
use crate::error::PathError;
use crate::model::JunkMatch;
use crate::scanner::utils::calculate_size;
use jwalk::{Parallelism, WalkDir};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Checks that `path` exists and is a directory.
pub fn resolve_root(path: &Path) -> Result<PathBuf, PathError> {
    if !path.exists() {
        return Err(PathError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(PathError::NotADirectory(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}

/// Walks everything strictly below `root` and returns the junk directories in
/// traversal order.
///
/// A matched directory is measured once and never descended into, so junk
/// nested inside junk is covered by the outer match. The root itself is never
/// reported, whatever its name. Symlinks are not followed.
pub fn scan(root: &Path, progress_cb: Option<&dyn Fn(&Path)>) -> Vec<JunkMatch> {
    let walker = WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(Parallelism::Serial)
        .process_read_dir(|depth, _path, _read_dir_state, children| {
            // The root arrives here too, with no depth; its own name never prunes it
            if depth.is_none() {
                return;
            }
            for child in children.iter_mut().flatten() {
                if child.file_type.is_dir() && is_junk_name(&child.file_name) {
                    child.read_children_path = None;
                }
            }
        });

    let mut matches: Vec<JunkMatch> = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("skipping unreadable entry: {err}");
                continue;
            }
        };

        if entry.depth == 0 || !entry.file_type().is_dir() || !is_junk_name(entry.file_name()) {
            continue;
        }

        let path = entry.path();
        if matches.iter().any(|m| path.starts_with(&m.path)) {
            debug!(path = %path.display(), "already covered by an outer match");
            continue;
        }

        if let Some(cb) = progress_cb {
            cb(&path);
        }
        let size = calculate_size(&path);
        debug!(path = %path.display(), size, "junk folder");
        matches.push(JunkMatch::new(path, size));
    }

    info!(root = %root.display(), found = matches.len(), "scan finished");
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::total_size;
    use anyhow::Result;
    use std::cell::Cell;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(path: &Path, len: usize) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        File::create(path)?.write_all(&vec![0u8; len])?;
        Ok(())
    }

    fn size_of(matches: &[JunkMatch], root: &Path, rel: &str) -> Option<u64> {
        matches
            .iter()
            .find(|m| m.path == root.join(rel))
            .map(|m| m.size)
    }

    #[test]
    fn finds_junk_across_project() -> Result<()> {
        let dir = tempdir()?;
        let root = dir.path();
        write_file(&root.join("node_modules/a.js"), 100)?;
        write_file(&root.join("src/build/out.bin"), 50)?;
        fs::create_dir(root.join("dist"))?;
        write_file(&root.join("src/main.rs"), 999)?;

        let matches = scan(root, None);

        assert_eq!(matches.len(), 3);
        assert_eq!(size_of(&matches, root, "node_modules"), Some(100));
        assert_eq!(size_of(&matches, root, "src/build"), Some(50));
        assert_eq!(size_of(&matches, root, "dist"), Some(0));
        assert_eq!(total_size(&matches), 150);
        Ok(())
    }

    #[test]
    fn nested_junk_is_suppressed() -> Result<()> {
        let dir = tempdir()?;
        let root = dir.path();
        write_file(&root.join("node_modules/dist/x"), 10)?;

        let matches = scan(root, None);

        assert_eq!(matches, vec![JunkMatch::new(root.join("node_modules"), 10)]);
        Ok(())
    }

    #[test]
    fn deeply_nested_junk_yields_only_outermost() -> Result<()> {
        let dir = tempdir()?;
        let root = dir.path();
        write_file(
            &root.join("app/build/node_modules/pkg/dist/__pycache__/build/f"),
            5,
        )?;
        write_file(&root.join("app/build/other.o"), 3)?;

        let matches = scan(root, None);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].path, root.join("app/build"));
        assert_eq!(matches[0].size, 8);
        for a in &matches {
            for b in &matches {
                assert!(a == b || !b.path.starts_with(&a.path));
            }
        }
        Ok(())
    }

    #[test]
    fn hidden_junk_is_found() -> Result<()> {
        let dir = tempdir()?;
        let root = dir.path();
        write_file(&root.join(".idea/workspace.xml"), 12)?;
        write_file(&root.join(".vscode/settings.json"), 4)?;
        write_file(&root.join("android/.gradle/cache.bin"), 30)?;

        let matches = scan(root, None);

        assert_eq!(matches.len(), 3);
        assert_eq!(size_of(&matches, root, ".idea"), Some(12));
        assert_eq!(size_of(&matches, root, ".vscode"), Some(4));
        assert_eq!(size_of(&matches, root, "android/.gradle"), Some(30));
        Ok(())
    }

    #[test]
    fn files_named_like_junk_are_ignored() -> Result<()> {
        let dir = tempdir()?;
        write_file(&dir.path().join("build"), 64)?;

        assert!(scan(dir.path(), None).is_empty());
        Ok(())
    }

    #[test]
    fn root_with_junk_name_is_not_reported() -> Result<()> {
        let dir = tempdir()?;
        let root = dir.path().join("build");
        write_file(&root.join("dist/bundle.js"), 20)?;
        write_file(&root.join("notes.txt"), 1)?;

        let matches = scan(&root, None);

        assert_eq!(matches, vec![JunkMatch::new(root.join("dist"), 20)]);
        Ok(())
    }

    #[test]
    fn root_with_junk_name_is_still_walked() -> Result<()> {
        let dir = tempdir()?;
        let root = dir.path().join("node_modules");
        write_file(&root.join("pkg/__pycache__/m.pyc"), 6)?;
        write_file(&root.join("pkg/.idea/x.xml"), 2)?;

        let matches = scan(&root, None);

        assert_eq!(matches.len(), 2);
        assert_eq!(size_of(&matches, &root, "pkg/__pycache__"), Some(6));
        assert_eq!(size_of(&matches, &root, "pkg/.idea"), Some(2));
        Ok(())
    }

    #[test]
    fn empty_project_has_no_matches() -> Result<()> {
        let dir = tempdir()?;
        assert!(scan(dir.path(), None).is_empty());
        Ok(())
    }

    #[test]
    fn progress_called_once_per_match() -> Result<()> {
        let dir = tempdir()?;
        let root = dir.path();
        fs::create_dir_all(root.join("a/node_modules/build"))?;
        fs::create_dir_all(root.join("b/__pycache__"))?;

        let calls = Cell::new(0);
        let cb = |_: &Path| calls.set(calls.get() + 1);
        let matches = scan(root, Some(&cb));

        assert_eq!(matches.len(), 2);
        assert_eq!(calls.get(), 2);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn symlink_cycles_terminate() -> Result<()> {
        let dir = tempdir()?;
        let root = dir.path();
        write_file(&root.join("pkg/dist/app.js"), 9)?;
        std::os::unix::fs::symlink(root, root.join("pkg/loop"))?;
        std::os::unix::fs::symlink(root.join("pkg/dist"), root.join("build"))?;

        let matches = scan(root, None);

        assert_eq!(matches, vec![JunkMatch::new(root.join("pkg/dist"), 9)]);
        Ok(())
    }

    #[test]
    fn resolve_root_rejects_missing_and_files() -> Result<()> {
        let dir = tempdir()?;
        let file = dir.path().join("file.txt");
        write_file(&file, 1)?;

        assert!(matches!(
            resolve_root(&dir.path().join("nope")),
            Err(PathError::NotFound(_))
        ));
        assert!(matches!(resolve_root(&file), Err(PathError::NotADirectory(_))));
        assert_eq!(resolve_root(dir.path())?, dir.path());
        Ok(())
    }
}
