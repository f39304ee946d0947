//! Marker-based enum template
//!
//! A template is plain text with six literal markers:
//!
//! - `$CLASS_NAME`: replaced by the enum name everywhere
//! - `$ENUM_VALUE_TYPE`: replaced by the value-kind label everywhere
//! - `$REPEAT_START` / `$REPEAT_END`: delimit the member line pattern, which
//!   is instantiated once per member
//! - `$ENUM_NAME` / `$ENUM_VALUE`: member name and value inside the pattern
//!
//! ```text
//! public enum $CLASS_NAME : $ENUM_VALUE_TYPE
//! {
//! $REPEAT_START    $ENUM_NAME = $ENUM_VALUE,$REPEAT_END
//! }
//! ```

use std::fs;
use std::path::Path;

use tracing::warn;

use super::member::EnumMember;
use crate::error::{CodegenError, Result};

pub const CLASS_NAME: &str = "$CLASS_NAME";
pub const ENUM_VALUE_TYPE: &str = "$ENUM_VALUE_TYPE";
pub const REPEAT_START: &str = "$REPEAT_START";
pub const REPEAT_END: &str = "$REPEAT_END";
pub const ENUM_NAME: &str = "$ENUM_NAME";
pub const ENUM_VALUE: &str = "$ENUM_VALUE";

/// An enum template as read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumTemplate {
    source: String,
}

impl EnumTemplate {
    /// Wrap template text
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read a template file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CodegenError::TemplateNotFound(path.to_path_buf()));
        }
        Ok(Self::new(fs::read_to_string(path)?))
    }

    /// Render the template for one enum.
    ///
    /// Member lines are joined with a single `\n`; nothing follows the last
    /// one except the template text after `$REPEAT_END`.
    pub fn render(
        &self,
        enum_name: &str,
        value_type: &str,
        members: &[EnumMember],
    ) -> Result<String> {
        for marker in [CLASS_NAME, ENUM_VALUE_TYPE] {
            if !self.source.contains(marker) {
                return Err(CodegenError::MalformedTemplate(format!(
                    "missing {} marker",
                    marker
                )));
            }
        }

        let text = self
            .source
            .replace(CLASS_NAME, enum_name)
            .replace(ENUM_VALUE_TYPE, value_type);

        let start = find_single(&text, REPEAT_START)?;
        let end = find_single(&text, REPEAT_END)?;
        if end < start {
            return Err(CodegenError::MalformedTemplate(format!(
                "{} appears before {}",
                REPEAT_END, REPEAT_START
            )));
        }

        let head = &text[..start];
        let pattern = &text[start + REPEAT_START.len()..end];
        let tail = &text[end + REPEAT_END.len()..];

        if !pattern.contains(ENUM_NAME) {
            warn!(
                "Repeat block of the {} template has no {} marker",
                enum_name, ENUM_NAME
            );
        }

        let lines: Vec<String> = members
            .iter()
            .map(|member| {
                pattern
                    .replace(ENUM_NAME, &member.name)
                    .replace(ENUM_VALUE, &member.value.to_string())
            })
            .collect();

        let mut out = String::with_capacity(text.len() + lines.iter().map(String::len).sum::<usize>());
        out.push_str(head);
        out.push_str(&lines.join("\n"));
        out.push_str(tail);
        Ok(out)
    }
}

/// Position of the only occurrence of `marker` in `text`
fn find_single(text: &str, marker: &str) -> Result<usize> {
    let mut found = text.match_indices(marker).map(|(idx, _)| idx);
    match (found.next(), found.next()) {
        (Some(idx), None) => Ok(idx),
        (None, _) => Err(CodegenError::MalformedTemplate(format!(
            "missing {} marker",
            marker
        ))),
        (Some(_), Some(_)) => Err(CodegenError::MalformedTemplate(format!(
            "{} marker appears more than once",
            marker
        ))),
    }
}
