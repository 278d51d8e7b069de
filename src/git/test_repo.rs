/// Scratch repositories for tests, built with libgit2 so no `git` binary is needed
use git2::{IndexAddOption, Oid, Repository, RepositoryInitOptions, Signature};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Empty repository whose HEAD points at the unborn `main` branch
    pub fn init() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head("main");
        let repo = Repository::init_opts(dir.path(), &opts).expect("init repository");
        TestRepo { dir, repo }
    }

    /// Repository with one commit of `README.md` on `main`
    pub fn with_commit() -> Self {
        let repo = Self::init();
        repo.write("README.md", "hello\n");
        repo.commit_all("initial commit");
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn git_dir(&self) -> PathBuf {
        self.dir.path().join(".git")
    }

    pub fn write(&self, name: &str, contents: &str) {
        let file = self.path().join(name);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(file, contents).expect("write file");
    }

    /// Stage everything in the working tree and commit it on HEAD
    pub fn commit_all(&self, message: &str) -> Oid {
        let mut index = self.repo.index().expect("open index");
        index.add_all(["*"], IndexAddOption::DEFAULT, None).expect("stage files");
        index.write().expect("write index");
        self.commit_index(message)
    }

    /// Stage a single path without committing it
    pub fn stage(&self, name: &str) {
        let mut index = self.repo.index().expect("open index");
        index.add_path(Path::new(name)).expect("stage file");
        index.write().expect("write index");
    }

    fn commit_index(&self, message: &str) -> Oid {
        let mut index = self.repo.index().expect("open index");
        let tree_id = index.write_tree().expect("write tree");
        let tree = self.repo.find_tree(tree_id).expect("find tree");
        let sig = Signature::now("Test User", "test@example.com").expect("signature");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents).expect("commit")
    }
}
