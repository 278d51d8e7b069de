/// Source emitter
///
/// This module handles:
/// - Rendering a RevisionInfo as a Java class or a Rust unit struct
/// - Escaping string values for the target language
/// - Mapping a package name and type name to the generated file's path
use crate::types::RevisionInfo;
use serde::Deserialize;
use std::fmt::Write;
use std::path::PathBuf;

pub const STRICT_CLEAN_DOC: &str = "Strict clean means no changes, not even untracked files.";
pub const LOOSE_CLEAN_DOC: &str = "Loose clean means no changes except untracked files.";

/// Language of the generated source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Java,
    Rust,
}

impl Language {
    /// Sources directory used when none is configured
    pub fn default_sources_dir(self) -> &'static str {
        match self {
            Language::Java => "src/main/java",
            Language::Rust => "src",
        }
    }

    /// Path of the generated file relative to the sources directory
    pub fn relative_path(self, package_name: &str, class_name: &str) -> PathBuf {
        let mut path: PathBuf = package_segments(package_name).collect();
        match self {
            Language::Java => path.push(format!("{}.java", class_name)),
            Language::Rust => path.push(format!("{}.rs", to_snake_case(class_name))),
        }
        path
    }
}

/// Split `a.b.c` or `a::b::c` into its segments
fn package_segments(package_name: &str) -> impl Iterator<Item = &str> {
    package_name.split(['.', ':']).filter(|s| !s.is_empty())
}

/// Render the generated source for `info`
pub fn render(language: Language, package_name: &str, class_name: &str, info: &RevisionInfo) -> String {
    match language {
        Language::Java => render_java(package_name, class_name, info),
        Language::Rust => render_rust(package_name, class_name, info),
    }
}

fn render_java(package_name: &str, class_name: &str, info: &RevisionInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "// Code generated by git-versioning. Do not edit.");
    if !package_name.is_empty() {
        let _ = writeln!(out, "package {};", package_name);
    }
    out.push('\n');
    let _ = writeln!(out, "public final class {} {{", class_name);
    java_string_field(&mut out, "BRANCH", &info.branch);
    java_string_field(&mut out, "REVISION", &info.revision_full);
    java_string_field(&mut out, "REVISION_SHORT", &info.revision_short);
    if let Some(clean) = info.clean {
        let _ = writeln!(out, "  /**\n   * {}\n   */", STRICT_CLEAN_DOC);
        let _ = writeln!(out, "  public static final boolean STRICT_CLEAN = {};", clean.strict_clean);
        let _ = writeln!(out, "  /**\n   * {}\n   */", LOOSE_CLEAN_DOC);
        let _ = writeln!(out, "  public static final boolean LOOSE_CLEAN = {};", clean.loose_clean);
    }
    out.push_str("}\n");
    out
}

fn java_string_field(out: &mut String, name: &str, value: &str) {
    let _ = writeln!(out, "  public static final String {} = {};", name, java_string_literal(value));
}

/// Quote `value` as a Java string literal
pub fn java_string_literal(value: &str) -> String {
    let mut lit = String::with_capacity(value.len() + 2);
    lit.push('"');
    for c in value.chars() {
        match c {
            '"' => lit.push_str("\\\""),
            '\\' => lit.push_str("\\\\"),
            '\n' => lit.push_str("\\n"),
            '\r' => lit.push_str("\\r"),
            '\t' => lit.push_str("\\t"),
            c if c.is_control() || !c.is_ascii() => {
                let mut buf = [0u16; 2];
                for unit in c.encode_utf16(&mut buf) {
                    let _ = write!(lit, "\\u{:04x}", unit);
                }
            }
            c => lit.push(c),
        }
    }
    lit.push('"');
    lit
}

fn render_rust(package_name: &str, class_name: &str, info: &RevisionInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "// @generated by git-versioning. Do not edit.");
    let module: Vec<&str> = package_segments(package_name).collect();
    if !module.is_empty() {
        let _ = writeln!(out, "// Module: {}", module.join("::"));
    }
    out.push('\n');
    let _ = writeln!(out, "/// Git revision this crate was built from.");
    let _ = writeln!(out, "#[derive(Debug, Clone, Copy)]");
    let _ = writeln!(out, "pub struct {};", class_name);
    out.push('\n');
    let _ = writeln!(out, "impl {} {{", class_name);
    rust_str_const(&mut out, "BRANCH", &info.branch);
    rust_str_const(&mut out, "REVISION", &info.revision_full);
    rust_str_const(&mut out, "REVISION_SHORT", &info.revision_short);
    if let Some(clean) = info.clean {
        let _ = writeln!(out, "    /// {}", STRICT_CLEAN_DOC);
        let _ = writeln!(out, "    pub const STRICT_CLEAN: bool = {};", clean.strict_clean);
        let _ = writeln!(out, "    /// {}", LOOSE_CLEAN_DOC);
        let _ = writeln!(out, "    pub const LOOSE_CLEAN: bool = {};", clean.loose_clean);
    }
    out.push_str("}\n");
    out
}

fn rust_str_const(out: &mut String, name: &str, value: &str) {
    // Debug formatting of a str is a valid Rust string literal
    let _ = writeln!(out, "    pub const {}: &'static str = {:?};", name, value);
}

/// `BuildInfo` -> `build_info`, `GitVERSION` -> `git_version`
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev_lower = i > 0 && (chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit());
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let prev_upper = i > 0 && chars[i - 1].is_uppercase();
            if i > 0 && !out.ends_with('_') && (prev_lower || (prev_upper && next_lower)) {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else if c == '-' {
            out.push('_');
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
#[path = "emit_test.rs"]
mod emit_test;
