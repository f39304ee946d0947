//! Resource folder enumeration

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::source::{file_extension, file_stem};

/// Sidecar metadata files never become members
pub const META_EXTENSION: &str = ".meta";

/// List the base names (extension stripped) of every file under `folder`,
/// recursing into subdirectories, in walk order.
///
/// Symlinked files are listed under the link's name; symlinked directories
/// are not descended into. `.meta` files are always skipped. A non-empty
/// `valid` set keeps only
/// files whose extension is in it; any extension in `invalid` is skipped
/// regardless of `valid`.
pub fn list_names(
    folder: &Path,
    valid: &BTreeSet<String>,
    invalid: &BTreeSet<String>,
) -> Vec<String> {
    let mut names = Vec::new();

    for entry in WalkDir::new(folder) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", folder.display(), e);
                continue;
            }
        };
        if !is_file(&entry) {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            warn!("Skipping non UTF-8 file name {}", entry.path().display());
            continue;
        };

        if accepts(file_name, valid, invalid) {
            names.push(file_stem(file_name).to_string());
        }
    }

    debug!("Found {} matching files under {}", names.len(), folder.display());
    names
}

fn is_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

/// Whether a file name passes the `.meta` rule and both extension filters
pub fn accepts(file_name: &str, valid: &BTreeSet<String>, invalid: &BTreeSet<String>) -> bool {
    let extension = file_extension(file_name);

    if extension == META_EXTENSION {
        return false;
    }
    if !valid.is_empty() && !valid.contains(extension) {
        return false;
    }
    !invalid.contains(extension)
}
