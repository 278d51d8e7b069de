use log::debug;
use std::env;
use std::path::{Path, PathBuf};

/// Name of the metadata entry looked up at each level
pub const GIT_DIR_NAME: &str = ".git";

/// Find the nearest `.git` entry at or above `start`.
///
/// Relative paths are anchored at the current directory. The walk is purely
/// lexical (no symlink resolution) and stops at the filesystem root.
pub fn find_git_dir(start: &Path) -> Option<PathBuf> {
    let start = if start.is_absolute() {
        start.to_path_buf()
    } else {
        env::current_dir().ok()?.join(start)
    };

    let mut dir = Some(start.as_path());
    while let Some(current) = dir {
        let candidate = current.join(GIT_DIR_NAME);
        if candidate.exists() {
            debug!("Found {} at {:?}", GIT_DIR_NAME, candidate);
            return Some(candidate);
        }
        dir = current.parent();
    }

    debug!("No {} found above {:?}", GIT_DIR_NAME, start);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_finds_git_dir_in_start_directory() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();

        assert_eq!(find_git_dir(tmp.path()), Some(tmp.path().join(".git")));
    }

    #[test]
    fn test_finds_git_dir_in_ancestor() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        let nested = tmp.path().join("module-a/src/main/java");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_git_dir(&nested), Some(tmp.path().join(".git")));
    }

    #[test]
    fn test_nearest_ancestor_wins() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        let sub = tmp.path().join("vendor/lib");
        fs::create_dir_all(sub.join(".git")).unwrap();
        let deeper = sub.join("src");
        fs::create_dir_all(&deeper).unwrap();

        assert_eq!(find_git_dir(&deeper), Some(sub.join(".git")));
    }

    #[test]
    fn test_gitlink_file_counts() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".git"), "gitdir: ../elsewhere/.git\n").unwrap();

        assert_eq!(find_git_dir(tmp.path()), Some(tmp.path().join(".git")));
    }

    #[test]
    fn test_repeated_lookup_is_stable() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        let nested = tmp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        let first = find_git_dir(&nested);
        let second = find_git_dir(&nested);
        assert_eq!(first, second);
    }

    #[test]
    fn test_root_terminates_walk() {
        // Whatever the host has at `/`, the walk must return rather than loop
        let root = Path::new("/");
        let found = find_git_dir(root);
        assert_eq!(found.is_some(), root.join(".git").exists());
    }
}
