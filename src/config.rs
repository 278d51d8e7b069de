/// Configuration resolution module
///
/// This module handles:
/// - Layering CLI flags over `[package.metadata.git-versioning]` and defaults
/// - Deriving the failure policy from the variant
/// - Computing the generated file's location
use crate::cli::CliArgs;
use crate::emit::Language;
use crate::error::VersioningError;
use crate::manifest;
use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Which fields are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Branch and revision only
    Basic,
    /// Branch, revision and strict/loose clean flags
    #[default]
    Extended,
}

impl Variant {
    pub fn includes_status(self) -> bool {
        matches!(self, Variant::Extended)
    }

    /// Basic builds favor availability, extended builds favor correctness
    pub fn default_policy(self) -> FailurePolicy {
        match self {
            Variant::Basic => FailurePolicy::Soft,
            Variant::Extended => FailurePolicy::Hard,
        }
    }
}

/// Handling of open, resolve and status failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log the failure and emit "Unknown" placeholders
    Soft,
    /// Abort with the underlying error
    Hard,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Project base directory; lookup start and output root
    pub output_directory: PathBuf,
    pub package_name: String,
    pub class_name: String,
    /// Relative to `output_directory`
    pub sources_dir: PathBuf,
    pub language: Language,
    pub variant: Variant,
    pub failure_policy: FailurePolicy,
    pub git_dir_override: Option<PathBuf>,
    pub dry_run: bool,
}

impl Config {
    /// Minimal config with defaults for everything but the names
    pub fn new(output_directory: impl Into<PathBuf>, package_name: &str, class_name: &str) -> Self {
        let language = Language::default();
        let variant = Variant::default();
        Config {
            output_directory: output_directory.into(),
            package_name: package_name.to_string(),
            class_name: class_name.to_string(),
            sources_dir: PathBuf::from(language.default_sources_dir()),
            language,
            variant,
            failure_policy: variant.default_policy(),
            git_dir_override: None,
            dry_run: false,
        }
    }

    /// Absolute location of the generated file
    pub fn output_file(&self) -> PathBuf {
        self.output_directory
            .join(&self.sources_dir)
            .join(self.language.relative_path(&self.package_name, &self.class_name))
    }
}

/// Build a Config from CLI arguments, the project manifest and defaults
pub fn build_config(args: &CliArgs) -> Result<Config, VersioningError> {
    let output_directory = match args.dir {
        Some(ref dir) => dir.clone(),
        None => env::current_dir().map_err(|e| VersioningError::Config(format!("No current directory: {}", e)))?,
    };
    debug!("Resolving configuration for {:?}", output_directory);

    let settings = manifest::read_settings(&output_directory).map_err(|message| VersioningError::Manifest {
        path: output_directory.join("Cargo.toml"),
        message,
    })?;

    let package_name = args
        .package_name
        .clone()
        .or(settings.package_name)
        .ok_or_else(|| VersioningError::Config("Missing package name (--package or package-name)".to_string()))?;

    let class_name = args
        .class_name
        .clone()
        .or(settings.class_name)
        .ok_or_else(|| VersioningError::Config("Missing class name (--class or class-name)".to_string()))?;

    let language = args.language.or(settings.language).unwrap_or_default();
    let variant = args.variant.or(settings.variant).unwrap_or_default();
    let failure_policy = args.on_error.or(settings.on_error).unwrap_or_else(|| variant.default_policy());
    let sources_dir = args
        .sources_dir
        .clone()
        .or(settings.sources_dir)
        .unwrap_or_else(|| PathBuf::from(language.default_sources_dir()));

    Ok(Config {
        sources_dir,
        language,
        variant,
        failure_policy,
        git_dir_override: args.git_dir.clone(),
        dry_run: args.dry_run,
        ..Config::new(output_directory, &package_name, &class_name)
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
