/// Generated file writer
///
/// The destination is always fully replaced: contents go to a temporary file in
/// the same directory which is then renamed over the target.
use crate::error::VersioningError;
use log::debug;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `contents` to `path`, creating parent directories as needed
pub fn write_generated(path: &Path, contents: &str) -> Result<(), VersioningError> {
    let wrap = |source: std::io::Error| VersioningError::Write { path: path.to_path_buf(), source };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(wrap)?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(wrap)?;
    tmp.write_all(contents.as_bytes()).map_err(wrap)?;
    tmp.flush().map_err(wrap)?;
    tmp.persist(path).map_err(|e| wrap(e.error))?;

    debug!("Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}
