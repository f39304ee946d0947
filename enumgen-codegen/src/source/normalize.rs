//! Normalization of paths and extension filters read from the enum config

use std::collections::BTreeSet;

/// Normalize an extension filter entry to the canonical `.ext` form.
///
/// `"txt"` and `".txt"` both become `".txt"`; anything before the first `.`
/// is dropped (`"file.txt"` becomes `".txt"`); an entry with nothing after
/// the dot (`"."`) becomes `""`, which stands for "no extension".
pub fn normalize_extension(raw: &str) -> String {
    let raw = raw.trim();
    let rest = match raw.find('.') {
        Some(idx) => raw[idx..].trim_start_matches('.'),
        None => raw,
    };
    if rest.is_empty() {
        String::new()
    } else {
        format!(".{}", rest)
    }
}

/// Normalize a whole extension list into a set.
pub fn normalize_extensions<I, S>(raw: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|ext| normalize_extension(ext.as_ref()))
        .collect()
}

/// Prefix a directory path with `/` when it does not start with one.
///
/// Empty input stays empty so validation can reject it.
pub fn normalize_directory(raw: Option<String>) -> Option<String> {
    match raw {
        None => None,
        Some(path) if path.is_empty() => None,
        Some(path) if path.starts_with('/') => Some(path),
        Some(path) => Some(format!("/{}", path)),
    }
}

/// Extension of a file name the way filters compare it: from the last `.`
/// on, or `""` when there is none.
pub fn file_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if idx + 1 < file_name.len() => &file_name[idx..],
        _ => "",
    }
}

/// File name without its extension.
pub fn file_stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => &file_name[..idx],
        None => file_name,
    }
}
