//! Config entries describing one enum each

use std::collections::BTreeSet;
use std::fmt;

use enumgen_db::ValueKind;

/// An enum whose members come from a database table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DatabaseSourceConfig {
    /// Table to project from
    pub table: String,

    /// Name of the generated enum (and of its file)
    pub enum_name: String,

    /// Column holding member names
    pub name_column: String,

    /// Column holding member values; members are numbered 1..N without it
    pub value_column: Option<String>,

    /// Raw value-type tag as written in the config
    pub value_kind: Option<String>,

    /// Destination folder, relative to the output root, with a leading `/`
    pub destination_path: String,
}

impl DatabaseSourceConfig {
    /// Check the required fields are all present
    pub fn is_valid(&self) -> bool {
        !self.table.is_empty()
            && !self.enum_name.is_empty()
            && !self.name_column.is_empty()
            && !self.destination_path.is_empty()
    }

    /// Value column, treating an empty string as absent
    pub fn value_column(&self) -> Option<&str> {
        self.value_column.as_deref().filter(|c| !c.is_empty())
    }

    /// Kind of the generated values.
    ///
    /// Without a value column the members are numbered, so the tag is ignored.
    pub fn resolved_kind(&self) -> ValueKind {
        match self.value_column() {
            Some(_) => ValueKind::from_tag(self.value_kind.as_deref()),
            None => ValueKind::Int,
        }
    }
}

impl fmt::Display for DatabaseSourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TableName: {},", self.table)?;
        writeln!(f, "EnumName: {},", self.enum_name)?;
        writeln!(f, "VariableNameColumn: {},", self.name_column)?;
        writeln!(
            f,
            "VariableValueColumn: {},",
            self.value_column.as_deref().unwrap_or_default()
        )?;
        writeln!(
            f,
            "VariableValueType: {},",
            self.value_kind.as_deref().unwrap_or_default()
        )?;
        writeln!(f, "DestinationPath: {}", self.destination_path)
    }
}

/// An enum whose members are the files of a resource folder
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilesystemSourceConfig {
    /// Folder to walk, relative to the project root, with a leading `/`
    pub folder_path: String,

    /// Name of the generated enum (and of its file)
    pub enum_name: String,

    /// Destination folder, relative to the output root, with a leading `/`
    pub destination_path: String,

    /// Allow-list of normalized extensions; empty allows every extension
    pub valid_extensions: BTreeSet<String>,

    /// Deny-list of normalized extensions; wins over the allow-list
    pub invalid_extensions: BTreeSet<String>,
}

impl FilesystemSourceConfig {
    /// Check the required fields are all present
    pub fn is_valid(&self) -> bool {
        !self.folder_path.is_empty()
            && !self.enum_name.is_empty()
            && !self.destination_path.is_empty()
    }
}

impl fmt::Display for FilesystemSourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FolderPath: {},", self.folder_path)?;
        writeln!(f, "EnumName: {},", self.enum_name)?;
        writeln!(f, "DestinationPath: {},", self.destination_path)?;
        writeln!(f, "ValidExtensions: {:?},", self.valid_extensions)?;
        writeln!(f, "InvalidExtensions: {:?}", self.invalid_extensions)
    }
}

/// Either kind of config entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigEntry {
    Database(DatabaseSourceConfig),
    Filesystem(FilesystemSourceConfig),
}

impl ConfigEntry {
    /// Name of the enum this entry generates
    pub fn enum_name(&self) -> &str {
        match self {
            ConfigEntry::Database(c) => &c.enum_name,
            ConfigEntry::Filesystem(c) => &c.enum_name,
        }
    }
}

impl fmt::Display for ConfigEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigEntry::Database(c) => fmt::Display::fmt(c, f),
            ConfigEntry::Filesystem(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl From<DatabaseSourceConfig> for ConfigEntry {
    fn from(config: DatabaseSourceConfig) -> Self {
        ConfigEntry::Database(config)
    }
}

impl From<FilesystemSourceConfig> for ConfigEntry {
    fn from(config: FilesystemSourceConfig) -> Self {
        ConfigEntry::Filesystem(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> DatabaseSourceConfig {
        DatabaseSourceConfig {
            table: "Items".into(),
            enum_name: "ItemType".into(),
            name_column: "Name".into(),
            value_column: None,
            value_kind: None,
            destination_path: "/Enums".into(),
        }
    }

    #[test]
    fn test_database_validity() {
        assert!(items().is_valid());
        assert!(!DatabaseSourceConfig {
            enum_name: String::new(),
            ..items()
        }
        .is_valid());
        assert!(!DatabaseSourceConfig {
            name_column: String::new(),
            ..items()
        }
        .is_valid());
    }

    #[test]
    fn test_resolved_kind() {
        let config = DatabaseSourceConfig {
            value_kind: Some("long".into()),
            ..items()
        };
        // no value column, so the tag does not apply
        assert_eq!(config.resolved_kind(), ValueKind::Int);

        let config = DatabaseSourceConfig {
            value_column: Some("Id".into()),
            value_kind: Some("SHORT".into()),
            ..items()
        };
        assert_eq!(config.resolved_kind(), ValueKind::Short);

        let config = DatabaseSourceConfig {
            value_column: Some(String::new()),
            value_kind: Some("byte".into()),
            ..items()
        };
        assert_eq!(config.value_column(), None);
        assert_eq!(config.resolved_kind(), ValueKind::Int);
    }

    #[test]
    fn test_filesystem_validity() {
        let config = FilesystemSourceConfig {
            folder_path: "/Resources/Icons".into(),
            enum_name: "Icon".into(),
            destination_path: "/Enums".into(),
            ..Default::default()
        };
        assert!(config.is_valid());
        assert!(!FilesystemSourceConfig {
            folder_path: String::new(),
            ..config
        }
        .is_valid());
    }

    #[test]
    fn test_dump_lists_every_field() {
        let dump = items().to_string();
        for key in [
            "TableName: Items",
            "EnumName: ItemType",
            "VariableNameColumn: Name",
            "VariableValueColumn: ",
            "VariableValueType: ",
            "DestinationPath: /Enums",
        ] {
            assert!(dump.contains(key), "missing {key} in {dump}");
        }
    }
}
