/// Cargo.toml manifest parsing utilities
///
/// This module handles:
/// - Reading a project's Cargo.toml if it has one
/// - Extracting the `[package.metadata.git-versioning]` settings table
use crate::config::{FailurePolicy, Variant};
use crate::emit::Language;
use log::debug;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Key under `[package.metadata]` holding the generator settings
pub const METADATA_KEY: &str = "git-versioning";

/// Settings read from `[package.metadata.git-versioning]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ManifestSettings {
    pub package_name: Option<String>,
    pub class_name: Option<String>,
    pub sources_dir: Option<PathBuf>,
    pub language: Option<Language>,
    pub variant: Option<Variant>,
    pub on_error: Option<FailurePolicy>,
}

/// Read generator settings from `<dir>/Cargo.toml`.
///
/// A missing manifest or a manifest without the table yields defaults.
pub fn read_settings(dir: &Path) -> Result<ManifestSettings, String> {
    let manifest_path = dir.join("Cargo.toml");
    if !manifest_path.is_file() {
        debug!("No manifest at {:?}", manifest_path);
        return Ok(ManifestSettings::default());
    }

    let toml_str = load_string(&manifest_path)?;
    parse_settings(&toml_str)
}

/// Extract the settings table from manifest text
pub fn parse_settings(toml_str: &str) -> Result<ManifestSettings, String> {
    let value: toml::Value = toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))?;

    let table = value.get("package").and_then(|p| p.get("metadata")).and_then(|m| m.get(METADATA_KEY));

    match table {
        Some(t @ toml::Value::Table(_)) => {
            let settings = t
                .clone()
                .try_into::<ManifestSettings>()
                .map_err(|e| format!("Invalid [package.metadata.{}]: {}", METADATA_KEY, e))?;
            debug!("Manifest settings: {:?}", settings);
            Ok(settings)
        }
        Some(_) => Err(format!("[package.metadata.{}] must be a table", METADATA_KEY)),
        None => Ok(ManifestSettings::default()),
    }
}

/// Load a file's contents as a string
pub fn load_string(path: &Path) -> Result<String, String> {
    let mut file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut s = String::new();
    file.read_to_string(&mut s).map_err(|e| format!("Failed to read file: {}", e))?;
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_table() {
        let toml_str = r#"
[package]
name = "app"
version = "0.1.0"

[package.metadata.git-versioning]
package-name = "app::build"
class-name = "GitVersion"
sources-dir = "generated"
language = "rust"
variant = "basic"
on-error = "hard"
"#;
        let settings = parse_settings(toml_str).unwrap();
        assert_eq!(settings.package_name.as_deref(), Some("app::build"));
        assert_eq!(settings.class_name.as_deref(), Some("GitVersion"));
        assert_eq!(settings.sources_dir, Some(PathBuf::from("generated")));
        assert_eq!(settings.language, Some(Language::Rust));
        assert_eq!(settings.variant, Some(Variant::Basic));
        assert_eq!(settings.on_error, Some(FailurePolicy::Hard));
    }

    #[test]
    fn test_missing_table_is_default() {
        let settings = parse_settings("[package]\nname = \"app\"\n").unwrap();
        assert_eq!(settings, ManifestSettings::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let toml_str = "[package.metadata.git-versioning]\nclassname = \"Version\"\n";
        assert!(parse_settings(toml_str).is_err());
    }

    #[test]
    fn test_non_table_is_rejected() {
        let toml_str = "[package.metadata]\ngit-versioning = \"yes\"\n";
        assert!(parse_settings(toml_str).is_err());
    }

    #[test]
    fn test_missing_manifest_is_default() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(read_settings(tmp.path()).unwrap(), ManifestSettings::default());
    }

    #[test]
    fn test_reads_manifest_from_dir() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("Cargo.toml"),
            "[package]\nname = \"x\"\n\n[package.metadata.git-versioning]\nclass-name = \"Rev\"\n",
        )
        .unwrap();

        let settings = read_settings(tmp.path()).unwrap();
        assert_eq!(settings.class_name.as_deref(), Some("Rev"));
    }
}
