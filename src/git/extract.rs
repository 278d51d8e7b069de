/// Open a repository and read the HEAD revision out of it
use super::status::WorkingTreeStatus;
use crate::error::VersioningError;
use crate::types::RevisionInfo;
use git2::Repository;
use log::{debug, info, warn};
use std::path::Path;

const HEADS_PREFIX: &str = "refs/heads/";

/// Open the repository behind `git_dir`.
///
/// The located directory is tried first. An explicit override (`GIT_DIR`) may
/// replace it. libgit2's own discovery from `start_dir` is accepted only when it
/// lands on the located entry; an outer repository found past a broken `.git`
/// is rejected. The error of the first attempt is reported when all fail.
pub fn open_repository(
    git_dir: &Path,
    start_dir: &Path,
    git_dir_override: Option<&Path>,
) -> Result<Repository, VersioningError> {
    let first_err = match Repository::open(git_dir) {
        Ok(repo) => return Ok(repo),
        Err(e) => {
            warn!("Could not open {:?}: {}", git_dir, e);
            e
        }
    };

    if let Some(override_dir) = git_dir_override {
        match Repository::open(override_dir) {
            Ok(repo) => {
                info!("Opened repository from override {:?}", override_dir);
                return Ok(repo);
            }
            Err(e) => warn!("Could not open override {:?}: {}", override_dir, e),
        }
    }

    match Repository::discover(start_dir) {
        Ok(repo) if is_located_repository(&repo, git_dir) => {
            info!("Discovered repository at {:?}", repo.path());
            Ok(repo)
        }
        Ok(repo) => {
            warn!("Discovered {:?} does not match located {:?}; ignoring it", repo.path(), git_dir);
            Err(VersioningError::Open { path: git_dir.to_path_buf(), source: first_err })
        }
        Err(e) => {
            debug!("Discovery from {:?} failed: {}", start_dir, e);
            Err(VersioningError::Open { path: git_dir.to_path_buf(), source: first_err })
        }
    }
}

/// Whether `repo` is the one `git_dir` names, either as its metadata dir or,
/// for a gitlink file, through its working tree
fn is_located_repository(repo: &Repository, git_dir: &Path) -> bool {
    let same = |a: &Path, b: &Path| match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    };

    if same(repo.path(), git_dir) {
        return true;
    }
    match (repo.workdir(), git_dir.parent()) {
        (Some(workdir), Some(located_root)) => same(workdir, located_root),
        _ => false,
    }
}

/// Read `(branch, full_branch, commit_id)` from HEAD.
///
/// `full_branch` is `refs/heads/<branch>` on a branch; on a detached HEAD both
/// names are the commit id. An unborn branch fails to resolve.
pub fn read_head(repo: &Repository) -> Result<(String, String, String), VersioningError> {
    let head = repo
        .find_reference("HEAD")
        .map_err(|e| VersioningError::Resolve { reference: "HEAD".to_string(), source: e })?;

    let full_branch = match head.symbolic_target() {
        Some(target) => target.to_string(),
        None => match head.target() {
            Some(oid) => oid.to_string(),
            None => {
                return Err(VersioningError::Resolve {
                    reference: "HEAD".to_string(),
                    source: git2::Error::from_str("HEAD is neither symbolic nor direct"),
                });
            }
        },
    };
    let branch = full_branch.strip_prefix(HEADS_PREFIX).unwrap_or(&full_branch).to_string();
    info!("Branch is: {}", branch);
    info!("Full branch is: {}", full_branch);

    let commit = repo
        .revparse_single(&full_branch)
        .and_then(|object| object.peel_to_commit())
        .map_err(|e| VersioningError::Resolve { reference: full_branch.clone(), source: e })?;
    let id = commit.id().to_string();
    info!("Branch {} points to {}", branch, id);

    Ok((branch, full_branch, id))
}

/// Extract revision info from the repository at `git_dir`.
///
/// The repository handle lives only inside this call and is dropped on every
/// return path.
pub fn extract(
    git_dir: &Path,
    start_dir: &Path,
    git_dir_override: Option<&Path>,
    with_status: bool,
) -> Result<RevisionInfo, VersioningError> {
    let repo = open_repository(git_dir, start_dir, git_dir_override)?;
    info!("Git dir: {}", repo.path().display());
    debug!("Repository state: {:?}", repo.state());

    let (branch, _full_branch, id) = read_head(&repo)?;

    let clean = if with_status {
        let status = WorkingTreeStatus::query(&repo).map_err(VersioningError::Status)?;
        let state = status.clean_state();
        info!("Strict clean: {}, loose clean: {}", state.strict_clean, state.loose_clean);
        Some(state)
    } else {
        None
    };

    Ok(RevisionInfo::new(branch, id, clean))
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;
