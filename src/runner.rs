/// Versioning run orchestration
///
/// This module handles:
/// - Locating and reading the repository for a Config
/// - Applying the soft/hard failure policy
/// - Rendering and writing the generated source
use crate::config::{Config, FailurePolicy};
use crate::emit;
use crate::error::VersioningError;
use crate::git;
use crate::output;
use crate::types::{DegradeCause, Outcome, RevisionInfo};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// What a run produced
#[derive(Debug, Clone)]
pub struct Report {
    pub outcome: Outcome,
    /// Generated file path; None on a dry run
    pub written: Option<PathBuf>,
    pub source: String,
}

/// Locate, extract and apply the failure policy.
///
/// A missing repository always degrades; open, resolve and status failures
/// degrade only under the soft policy.
pub fn extract_outcome(config: &Config) -> Result<Outcome, VersioningError> {
    let project_dir = config.output_directory.as_path();
    let with_status = config.variant.includes_status();

    let Some(git_dir) = git::find_git_dir(project_dir) else {
        warn!("No git repository found above {}", project_dir.display());
        return Ok(Outcome::Degraded { sentinel: RevisionInfo::unknown(with_status), cause: DegradeCause::NoRepository });
    };

    match git::extract(&git_dir, project_dir, config.git_dir_override.as_deref(), with_status) {
        Ok(info) => Ok(Outcome::Resolved { info }),
        Err(e) if config.failure_policy == FailurePolicy::Soft && e.is_recoverable() => {
            warn!("{}; using placeholder revision", e);
            Ok(Outcome::Degraded { sentinel: RevisionInfo::unknown(with_status), cause: DegradeCause::Failed(e.to_string()) })
        }
        Err(e) => Err(e),
    }
}

/// Run the generator for one project
pub fn run(config: &Config) -> Result<Report, VersioningError> {
    info!("Dir is: {}", config.output_directory.display());

    let outcome = extract_outcome(config)?;
    let source = emit::render(config.language, &config.package_name, &config.class_name, outcome.info());

    let written = if config.dry_run {
        None
    } else {
        let path = config.output_file();
        output::write_generated(&path, &source)?;
        info!("Wrote {}", display_relative(&path, &config.output_directory));
        Some(path)
    };

    Ok(Report { outcome, written, source })
}

fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base).unwrap_or(path).display().to_string()
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;
