//! Renders enum files from the template and writes them out

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::member::EnumMember;
use super::template::EnumTemplate;
use crate::error::{CodegenError, Result};

/// Render one enum from the template at `template_path`.
///
/// The template is read on every call so edits take effect on the next run
/// without restarting anything.
pub fn render(
    template_path: &Path,
    enum_name: &str,
    value_type: &str,
    members: &[EnumMember],
) -> Result<String> {
    let template = EnumTemplate::load(template_path)?;
    template.render(enum_name, value_type, members)
}

/// Path of the generated file for `enum_name` in `dest_dir`
pub fn output_path(dest_dir: &Path, enum_name: &str, extension: &str) -> PathBuf {
    dest_dir.join(format!("{}.{}", enum_name, extension))
}

/// Write a rendered enum to `dest_dir/<enum_name>.<extension>`, replacing any
/// existing file.
pub fn write_file(dest_dir: &Path, enum_name: &str, extension: &str, text: &str) -> Result<PathBuf> {
    if !dest_dir.is_dir() {
        return Err(CodegenError::DestinationNotFound(dest_dir.to_path_buf()));
    }

    let path = output_path(dest_dir, enum_name, extension);
    fs::write(&path, text)?;
    debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(path)
}
