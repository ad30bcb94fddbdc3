use std::ffi::OsStr;

pub const NODE_MODULES: &str = "node_modules";
pub const PYCACHE: &str = "__pycache__";
pub const DIST_DIR: &str = "dist";
pub const BUILD_DIR: &str = "build";
pub const GRADLE_DIR: &str = ".gradle";
pub const IDEA_DIR: &str = ".idea";
pub const VSCODE_DIR: &str = ".vscode";

/// Directory names that are treated as junk wherever they appear below the scan root.
pub const JUNK_FOLDERS: &[&str] = &[
    NODE_MODULES,
    PYCACHE,
    DIST_DIR,
    BUILD_DIR,
    GRADLE_DIR,
    IDEA_DIR,
    VSCODE_DIR,
];

pub fn is_junk_name(name: &OsStr) -> bool {
    name.to_str().is_some_and(|n| JUNK_FOLDERS.contains(&n))
}
