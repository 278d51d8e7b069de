/// Git repository utilities
///
/// This module handles:
/// - Locating the `.git` entry above a project directory
/// - Opening the repository and resolving HEAD to a commit
/// - Computing strict and loose working-tree cleanliness
mod extract;
mod locate;
mod status;

#[cfg(test)]
pub mod test_repo;

pub use extract::extract;
pub use locate::find_git_dir;
