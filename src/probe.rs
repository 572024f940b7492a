use std::fs::{self, File};
use std::path::Path;

/// True when a regular file can be opened for reading at `path`. Any failure
/// counts as absent.
pub fn file_exists(path: &Path) -> bool {
    File::open(path).and_then(|f| f.metadata()).is_ok_and(|m| m.is_file())
}

pub fn dir_exists(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_dir())
}

/// True for anything at `path`, including a `.git` file pointing elsewhere.
pub fn exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

pub fn first_existing<'a>(root: &Path, names: &[&'a str]) -> Option<&'a str> {
    names.iter().copied().find(|name| file_exists(&root.join(name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_paths_are_false() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(!file_exists(&tmp.path().join("nope")));
        assert!(!dir_exists(&tmp.path().join("nope")));
    }

    #[test]
    fn file_and_dir_are_distinguished() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a.txt"), "a").unwrap();
        assert!(file_exists(&tmp.path().join("a.txt")));
        assert!(!dir_exists(&tmp.path().join("a.txt")));
        assert!(dir_exists(tmp.path()));
        assert!(!file_exists(tmp.path()));
        assert!(exists(&tmp.path().join("a.txt")));
        assert!(exists(tmp.path()));
        assert!(!exists(&tmp.path().join("nope")));
    }

    #[test]
    fn first_existing_respects_order() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(".eslintrc.js"), "").unwrap();
        fs::write(tmp.path().join(".eslintrc.cjs"), "").unwrap();
        let names = [".eslintrc", ".eslintrc.js", ".eslintrc.cjs"];
        assert_eq!(first_existing(tmp.path(), &names), Some(".eslintrc.js"));
        assert_eq!(first_existing(tmp.path(), &names[..1]), None);
    }
}
