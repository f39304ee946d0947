//! Outcome of a generation run

use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::error::{CodegenError, Result};
use crate::source::{ConfigEntry, RejectedEntry};

/// A rendered enum, written unless the run was a dry run
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Target file
    pub path: PathBuf,
    /// Full rendered text
    pub contents: String,
    /// Number of members in the enum
    pub member_count: usize,
    /// Whether `contents` was written to `path`
    pub written: bool,
}

/// A config entry that produced a file
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub entry: ConfigEntry,
    pub output: Rendered,
}

/// A config entry that was attempted and failed
#[derive(Debug)]
pub struct FailedEntry {
    pub entry: ConfigEntry,
    pub error: CodegenError,
}

/// Everything a generation run did, entry by entry
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Entries whose file was generated, in processing order
    pub succeeded: Vec<GeneratedFile>,
    /// Entries that were attempted but failed
    pub failed: Vec<FailedEntry>,
    /// Entries dropped while loading the enum config
    pub rejected: Vec<RejectedEntry>,
}

impl GenerationReport {
    /// True when no entry was rejected or failed
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && self.rejected.is_empty()
    }

    /// Find the generated file of an enum by name
    pub fn generated(&self, enum_name: &str) -> Option<&GeneratedFile> {
        self.succeeded
            .iter()
            .find(|file| file.entry.enum_name() == enum_name)
    }

    /// Find the failure of an enum by name
    pub fn failure(&self, enum_name: &str) -> Option<&FailedEntry> {
        self.failed
            .iter()
            .find(|failed| failed.entry.enum_name() == enum_name)
    }

    /// Record the outcome of one entry
    pub(crate) fn record(&mut self, entry: ConfigEntry, outcome: Result<Rendered>) {
        match outcome {
            Ok(output) => {
                info!(
                    "Finished generating {} ({} members)",
                    output.path.display(),
                    output.member_count
                );
                debug!("{}", output.contents);
                self.succeeded.push(GeneratedFile { entry, output });
            }
            Err(error) => {
                error!(
                    "Failed to generate enum {}: {}\n\n{}",
                    entry.enum_name(),
                    error,
                    entry
                );
                self.failed.push(FailedEntry { entry, error });
            }
        }
    }
}
