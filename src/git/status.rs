/// Working-tree status buckets and the two cleanliness predicates
use crate::types::CleanState;
use git2::{Repository, Status, StatusOptions};
use log::debug;

/// Paths grouped the way the status buckets are reported
///
/// - `added`: new in the index
/// - `changed`: modified, renamed or retyped in the index
/// - `removed`: deleted from the index
/// - `missing`: tracked but deleted from the working tree
/// - `modified`: tracked and changed in the working tree
/// - `conflicting`: unresolved merge entries
/// - `untracked`: present on disk, unknown to the index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingTreeStatus {
    pub added: Vec<String>,
    pub changed: Vec<String>,
    pub removed: Vec<String>,
    pub missing: Vec<String>,
    pub modified: Vec<String>,
    pub conflicting: Vec<String>,
    pub untracked: Vec<String>,
}

impl WorkingTreeStatus {
    /// Query libgit2 with untracked files included and ignored files excluded
    pub fn query(repo: &Repository) -> Result<Self, git2::Error> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true).recurse_untracked_dirs(true).include_ignored(false);

        let statuses = repo.statuses(Some(&mut opts))?;
        let mut status = WorkingTreeStatus::default();
        for entry in statuses.iter() {
            let path = String::from_utf8_lossy(entry.path_bytes()).into_owned();
            status.record(&path, entry.status());
        }

        debug!(
            "Status: {} added, {} changed, {} removed, {} missing, {} modified, {} conflicting, {} untracked",
            status.added.len(),
            status.changed.len(),
            status.removed.len(),
            status.missing.len(),
            status.modified.len(),
            status.conflicting.len(),
            status.untracked.len()
        );
        Ok(status)
    }

    /// File one status entry into every bucket its flags name
    pub fn record(&mut self, path: &str, flags: Status) {
        if flags.is_conflicted() {
            // Conflicts also carry index/worktree bits that would double count
            self.conflicting.push(path.to_string());
            return;
        }
        if flags.is_index_new() {
            self.added.push(path.to_string());
        }
        if flags.intersects(Status::INDEX_MODIFIED | Status::INDEX_RENAMED | Status::INDEX_TYPECHANGE) {
            self.changed.push(path.to_string());
        }
        if flags.is_index_deleted() {
            self.removed.push(path.to_string());
        }
        if flags.is_wt_deleted() {
            self.missing.push(path.to_string());
        }
        if flags.intersects(Status::WT_MODIFIED | Status::WT_RENAMED | Status::WT_TYPECHANGE) {
            self.modified.push(path.to_string());
        }
        if flags.is_wt_new() {
            self.untracked.push(path.to_string());
        }
    }

    /// No differences except possibly untracked files
    pub fn is_loose_clean(&self) -> bool {
        self.added.is_empty()
            && self.changed.is_empty()
            && self.conflicting.is_empty()
            && self.missing.is_empty()
            && self.modified.is_empty()
            && self.removed.is_empty()
    }

    /// No differences at all, untracked files included
    pub fn is_strict_clean(&self) -> bool {
        self.is_loose_clean() && self.untracked.is_empty()
    }

    pub fn clean_state(&self) -> CleanState {
        CleanState { strict_clean: self.is_strict_clean(), loose_clean: self.is_loose_clean() }
    }
}
