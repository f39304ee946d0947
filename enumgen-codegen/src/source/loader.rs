//! JSON enum config loader
//!
//! The config file has two arrays, `database` and `resources`. Every element
//! is parsed and validated on its own: an invalid element is rejected and
//! reported, the rest of the file still loads.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use super::entry::{DatabaseSourceConfig, FilesystemSourceConfig};
use super::normalize::{normalize_directory, normalize_extensions};
use crate::error::{CodegenError, Result};

/// Array of the config file an entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Database,
    Resources,
}

impl Section {
    /// JSON key of the section
    pub fn key(&self) -> &'static str {
        match self {
            Section::Database => "database",
            Section::Resources => "resources",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A config entry that was dropped while loading
#[derive(Debug)]
pub struct RejectedEntry {
    /// Section the entry was found in
    pub section: Section,
    /// Position within the section's array
    pub index: usize,
    /// The entry as written
    pub raw: serde_json::Value,
    /// Why it was dropped
    pub error: CodegenError,
}

/// Result of loading an enum config file
#[derive(Debug, Default)]
pub struct LoadedConfig {
    /// Valid database entries, in file order
    pub database: Vec<DatabaseSourceConfig>,
    /// Valid resource entries, in file order
    pub resources: Vec<FilesystemSourceConfig>,
    /// Entries that failed to parse or validate
    pub rejected: Vec<RejectedEntry>,
}

#[derive(Debug, Deserialize)]
struct RawConfigFile {
    database: Option<Vec<serde_json::Value>>,
    resources: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct RawDatabaseEntry {
    #[serde(rename = "TableName")]
    table_name: Option<String>,
    #[serde(rename = "EnumName")]
    enum_name: Option<String>,
    #[serde(rename = "VariableNameColumn")]
    variable_name_column: Option<String>,
    #[serde(rename = "VariableValueColumn")]
    variable_value_column: Option<String>,
    #[serde(rename = "VariableValueType")]
    variable_value_type: Option<String>,
    #[serde(rename = "DestinationPath")]
    destination_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawResourceEntry {
    #[serde(rename = "FolderPath")]
    folder_path: Option<String>,
    #[serde(rename = "EnumName")]
    enum_name: Option<String>,
    #[serde(rename = "DestinationPath")]
    destination_path: Option<String>,
    #[serde(rename = "ValidExtensions")]
    valid_extensions: Option<Vec<Option<String>>>,
    #[serde(rename = "InvalidExtensions")]
    invalid_extensions: Option<Vec<Option<String>>>,
}

impl From<RawDatabaseEntry> for DatabaseSourceConfig {
    fn from(raw: RawDatabaseEntry) -> Self {
        Self {
            table: raw.table_name.unwrap_or_default(),
            enum_name: raw.enum_name.unwrap_or_default(),
            name_column: raw.variable_name_column.unwrap_or_default(),
            value_column: raw.variable_value_column,
            value_kind: raw.variable_value_type,
            destination_path: normalize_directory(raw.destination_path).unwrap_or_default(),
        }
    }
}

impl From<RawResourceEntry> for FilesystemSourceConfig {
    fn from(raw: RawResourceEntry) -> Self {
        Self {
            folder_path: normalize_directory(raw.folder_path).unwrap_or_default(),
            enum_name: raw.enum_name.unwrap_or_default(),
            destination_path: normalize_directory(raw.destination_path).unwrap_or_default(),
            valid_extensions: normalize_extensions(
                raw.valid_extensions.into_iter().flatten().flatten(),
            ),
            invalid_extensions: normalize_extensions(
                raw.invalid_extensions.into_iter().flatten().flatten(),
            ),
        }
    }
}

/// Load and validate the enum config at `path`.
///
/// Fails only when the file is missing or is not a JSON object with the
/// expected arrays; individual bad entries end up in
/// [`LoadedConfig::rejected`].
pub fn load_config(path: &Path) -> Result<LoadedConfig> {
    if !path.is_file() {
        return Err(CodegenError::ConfigNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let loaded = LoadedConfig::from_json(&content).map_err(|e| CodegenError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    debug!(
        "Loaded {} database and {} resource entries from {} ({} rejected)",
        loaded.database.len(),
        loaded.resources.len(),
        path.display(),
        loaded.rejected.len()
    );
    Ok(loaded)
}

impl LoadedConfig {
    /// Parse an enum config document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let file: RawConfigFile = serde_json::from_str(json)?;
        let mut loaded = LoadedConfig::default();

        for (index, raw) in file.database.unwrap_or_default().into_iter().enumerate() {
            match parse_database_entry(&raw) {
                Ok(config) => loaded.database.push(config),
                Err(error) => loaded.reject(Section::Database, index, raw, error),
            }
        }

        for (index, raw) in file.resources.unwrap_or_default().into_iter().enumerate() {
            match parse_resource_entry(&raw) {
                Ok(config) => loaded.resources.push(config),
                Err(error) => loaded.reject(Section::Resources, index, raw, error),
            }
        }

        Ok(loaded)
    }

    fn reject(
        &mut self,
        section: Section,
        index: usize,
        raw: serde_json::Value,
        error: CodegenError,
    ) {
        warn!(
            "Encountered an invalid {} configuration at index {}: {}\n\n{}",
            section, index, error, raw
        );
        self.rejected.push(RejectedEntry {
            section,
            index,
            raw,
            error,
        });
    }
}

fn parse_database_entry(raw: &serde_json::Value) -> Result<DatabaseSourceConfig> {
    let entry = RawDatabaseEntry::deserialize(raw)
        .map_err(|e| CodegenError::InvalidConfigEntry(e.to_string()))?;
    let config = DatabaseSourceConfig::from(entry);
    if config.is_valid() {
        return Ok(config);
    }

    let missing = [
        ("TableName", config.table.is_empty()),
        ("EnumName", config.enum_name.is_empty()),
        ("VariableNameColumn", config.name_column.is_empty()),
        ("DestinationPath", config.destination_path.is_empty()),
    ];
    Err(missing_fields(&missing))
}

fn parse_resource_entry(raw: &serde_json::Value) -> Result<FilesystemSourceConfig> {
    let entry = RawResourceEntry::deserialize(raw)
        .map_err(|e| CodegenError::InvalidConfigEntry(e.to_string()))?;
    let config = FilesystemSourceConfig::from(entry);
    if config.is_valid() {
        return Ok(config);
    }

    let missing = [
        ("FolderPath", config.folder_path.is_empty()),
        ("EnumName", config.enum_name.is_empty()),
        ("DestinationPath", config.destination_path.is_empty()),
    ];
    Err(missing_fields(&missing))
}

fn missing_fields(fields: &[(&str, bool)]) -> CodegenError {
    let names: Vec<&str> = fields
        .iter()
        .filter(|(_, missing)| *missing)
        .map(|(name, _)| *name)
        .collect();
    CodegenError::InvalidConfigEntry(format!("missing required fields: {}", names.join(", ")))
}
