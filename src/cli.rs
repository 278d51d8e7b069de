use crate::config::{FailurePolicy, Variant};
use crate::emit::Language;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "git-versioning")]
#[command(about = "Generate a source file with the branch, revision and clean state of the enclosing git repository")]
#[command(version)]
pub struct CliArgs {
    /// Project base directory; the git lookup starts here and output paths are relative to it
    #[arg(long, short = 'd', value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Package (Java) or module path (Rust) of the generated type, e.g. "com.example.app"
    #[arg(long = "package", short = 'p', value_name = "NAME")]
    pub package_name: Option<String>,

    /// Name of the generated type
    #[arg(long = "class", short = 'c', value_name = "NAME")]
    pub class_name: Option<String>,

    /// Sources directory below the project dir (default: src/main/java for java, src for rust)
    #[arg(long, value_name = "DIR")]
    pub sources_dir: Option<PathBuf>,

    /// Language of the generated file
    #[arg(long, value_enum)]
    pub language: Option<Language>,

    /// basic: branch and revision only; extended: also strict/loose clean flags
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// What to do when the repository cannot be read (default depends on --variant)
    #[arg(long = "on-error", value_enum)]
    pub on_error: Option<FailurePolicy>,

    /// Explicit git metadata directory, tried when the located .git cannot be opened
    #[arg(long, env = "GIT_DIR", value_name = "PATH")]
    pub git_dir: Option<PathBuf>,

    /// Print the generated source to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print the extracted revision info as JSON
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref dir) = self.dir {
            if !dir.is_dir() {
                return Err(format!("Project directory {} does not exist", dir.display()));
            }
        }

        if let Some(ref class) = self.class_name {
            if class.trim().is_empty() {
                return Err("--class must not be empty".to_string());
            }
        }

        Ok(())
    }
}
