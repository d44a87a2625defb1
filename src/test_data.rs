#[cfg(test)]
use std::fs;

#[cfg(test)]
use tempfile::TempDir;

/// Temporary posts root with one directory per post and some loose files.
#[cfg(test)]
pub fn make_posts_root(dirs: &[&str], files: &[&str]) -> TempDir {
    let root = tempfile::tempdir().unwrap();
    for dir in dirs {
        fs::create_dir(root.path().join(dir)).unwrap();
        fs::write(root.path().join(dir).join("index.md"), format!("# {}\n", dir)).unwrap();
    }
    for file in files {
        fs::write(root.path().join(file), "Not a post\n").unwrap();
    }
    root
}
