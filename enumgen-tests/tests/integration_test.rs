//! Integration tests for enumgen with real SQLite files and resource folders
//!
//! Each test lays out a throwaway project (enum config, template, database,
//! resource folders, destination folders) in a temp directory and runs the
//! full pipeline against it, asserting on the returned report and on the
//! files written to disk.
//!
//! The `Icon` enum below is produced by this crate's build script from
//! `fixtures/`, so it also proves that generated Rust code compiles.

use std::fs;
use std::path::{Path, PathBuf};

use enumgen_codegen::source::ConfigEntry;
use enumgen_codegen::{CodegenError, GenerationReport, GeneratorBuilder};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};

// Include generated code from build.rs
#[allow(dead_code)]
mod generated {
    include!(concat!(env!("OUT_DIR"), "/Icon.rs"));
}

const CSHARP_TEMPLATE: &str = include_str!("../../demos/Enumeration.cs.template");

/// A project root with the default generator layout
struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    fn new(enum_config: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let project = Self { dir };
        project.write("EnumGenerator/enumconfig.json", enum_config);
        project.write("EnumGenerator/Enumeration.cs.template", CSHARP_TEMPLATE);
        fs::create_dir_all(project.path("Enums")).unwrap();
        fs::create_dir_all(project.path("StreamingAssets")).unwrap();
        project
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    fn write(&self, relative: &str, contents: &str) {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    fn database(&self, statements: &[&str]) {
        let path = self.path("StreamingAssets/database.db");
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async {
            let mut conn = SqliteConnectOptions::new()
                .filename(&path)
                .create_if_missing(true)
                .connect()
                .await
                .unwrap();
            for stmt in statements {
                sqlx::query(stmt).execute(&mut conn).await.unwrap();
            }
            conn.close().await.unwrap();
        });
    }

    fn generate(&self) -> enumgen_codegen::Result<GenerationReport> {
        GeneratorBuilder::new(self.root()).generate()
    }
}

const ITEMS_TABLE: &[&str] = &[
    "CREATE TABLE Items (Id INTEGER PRIMARY KEY, Name TEXT NOT NULL)",
    "INSERT INTO Items (Id, Name) VALUES (1, 'Sword'), (2, 'Shield'), (3, 'Potion')",
];

/// Members of a rendered C# enum, in file order
fn parse_members(source: &str) -> Vec<(String, String)> {
    source
        .lines()
        .filter_map(|line| line.trim().strip_suffix(','))
        .filter_map(|line| line.split_once(" = "))
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(n, v)| (n.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_build_script_enum_compiles() {
    use generated::Icon;

    let mut values: Vec<i32> = [Icon::Sword, Icon::Shield, Icon::Potion]
        .iter()
        .map(|icon| *icon as i32)
        .collect();
    values.sort();
    assert_eq!(values, vec![1, 2, 3]);
    assert_eq!(Icon::VALUE_TYPE, "int");
}

#[test]
fn test_database_enum_numbered_in_row_order() {
    let project = Project::new(
        r#"{ "database": [ {
            "TableName": "Items", "EnumName": "ItemType",
            "VariableNameColumn": "Name", "DestinationPath": "/Enums"
        } ] }"#,
    );
    project.database(ITEMS_TABLE);

    let report = project.generate().unwrap();
    assert!(report.is_clean(), "{:?}", report.failed);

    let source = project.read("Enums/ItemType.cs");
    assert!(source.contains("public enum ItemType : int"));
    assert_eq!(
        parse_members(&source),
        pairs(&[("Sword", "1"), ("Shield", "2"), ("Potion", "3")])
    );
}

#[test]
fn test_database_enum_with_value_column() {
    let project = Project::new(
        r#"{ "database": [ {
            "TableName": "Stats", "EnumName": "StatType",
            "VariableNameColumn": "Name", "VariableValueColumn": "Code",
            "VariableValueType": "SHORT", "DestinationPath": "Enums"
        } ] }"#,
    );
    project.database(&[
        "CREATE TABLE Stats (Name TEXT NOT NULL, Code INTEGER NOT NULL)",
        "INSERT INTO Stats (Name, Code) VALUES ('Strength', 100), ('Agility', -20), ('Intellect', 3000)",
    ]);

    let report = project.generate().unwrap();
    assert!(report.is_clean(), "{:?}", report.failed);

    let source = project.read("Enums/StatType.cs");
    assert!(source.contains("public enum StatType : short"));
    assert_eq!(
        parse_members(&source),
        pairs(&[("Strength", "100"), ("Agility", "-20"), ("Intellect", "3000")])
    );
}

#[test]
fn test_bad_table_does_not_block_next_entry() {
    let project = Project::new(
        r#"{ "database": [
            { "TableName": "Nonexistent", "EnumName": "Broken",
              "VariableNameColumn": "Name", "DestinationPath": "/Enums" },
            { "TableName": "Items", "EnumName": "ItemType",
              "VariableNameColumn": "Name", "DestinationPath": "/Enums" }
        ] }"#,
    );
    project.database(ITEMS_TABLE);

    let report = project.generate().unwrap();

    let failure = report.failure("Broken").unwrap();
    match &failure.error {
        CodegenError::Query { entry, .. } => assert!(entry.contains("TableName: Nonexistent")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!project.path("Enums/Broken.cs").exists());

    assert!(report.generated("ItemType").is_some());
    assert!(project.path("Enums/ItemType.cs").is_file());
}

#[test]
fn test_out_of_range_value_fails_entry() {
    let project = Project::new(
        r#"{ "database": [ {
            "TableName": "Items", "EnumName": "ItemType",
            "VariableNameColumn": "Name", "VariableValueColumn": "Weight",
            "VariableValueType": "byte", "DestinationPath": "/Enums"
        } ] }"#,
    );
    project.database(&[
        "CREATE TABLE Items (Name TEXT NOT NULL, Weight INTEGER NOT NULL)",
        "INSERT INTO Items (Name, Weight) VALUES ('Anvil', 900)",
    ]);

    let report = project.generate().unwrap();
    let failure = report.failure("ItemType").unwrap();
    assert!(matches!(
        &failure.error,
        CodegenError::Query {
            source: enumgen_db::Error::TypeConversion { .. },
            ..
        }
    ));
}

#[test]
fn test_resource_enum_filters_extensions() {
    let project = Project::new(
        r#"{ "resources": [ {
            "FolderPath": "/Resources/Icons", "EnumName": "Icon",
            "DestinationPath": "/Enums", "ValidExtensions": ["png"]
        } ] }"#,
    );
    for file in ["a.png", "b.png", "c.meta", "d.jpg"] {
        project.write(&format!("Resources/Icons/{}", file), "");
    }

    let report = project.generate().unwrap();
    assert!(report.is_clean(), "{:?}", report.failed);

    // numbered by position in the file, whatever order the walk produced
    let members = parse_members(&project.read("Enums/Icon.cs"));
    let values: Vec<&str> = members.iter().map(|(_, v)| v.as_str()).collect();
    assert_eq!(values, vec!["1", "2"]);

    let mut names: Vec<&str> = members.iter().map(|(n, _)| n.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn test_resource_meta_files_never_listed() {
    let project = Project::new(
        r#"{ "resources": [ {
            "FolderPath": "/Audio", "EnumName": "Sound",
            "DestinationPath": "/Enums", "ValidExtensions": ["meta", "wav"],
            "InvalidExtensions": ["txt"]
        } ] }"#,
    );
    project.write("Audio/hit.wav", "");
    project.write("Audio/hit.wav.meta", "");
    project.write("Audio/loops/music.wav", "");
    project.write("Audio/readme.txt", "");

    project.generate().unwrap();

    let mut names: Vec<String> = parse_members(&project.read("Enums/Sound.cs"))
        .into_iter()
        .map(|(n, _)| n)
        .collect();
    names.sort();
    assert_eq!(names, vec!["hit", "music"]);
}

#[test]
fn test_invalid_entry_dropped_and_reported() {
    let project = Project::new(
        r#"{
            "database": [ {
                "TableName": "Items", "EnumName": "",
                "VariableNameColumn": "Name", "DestinationPath": "/Enums"
            } ],
            "resources": [ {
                "FolderPath": "/Icons", "EnumName": "Icon", "DestinationPath": "/Enums"
            } ]
        }"#,
    );
    project.write("Icons/a.png", "");

    // no database file: the only database entry is invalid, so it is never opened
    let report = project.generate().unwrap();

    assert_eq!(report.rejected.len(), 1);
    assert!(report.failed.is_empty());
    assert_eq!(report.succeeded.len(), 1);
    assert!(matches!(report.succeeded[0].entry, ConfigEntry::Filesystem(_)));
    assert_eq!(
        fs::read_dir(project.path("Enums")).unwrap().count(),
        1,
        "only Icon.cs should be generated"
    );
}

#[test]
fn test_missing_destination_skips_entry() {
    let project = Project::new(
        r#"{ "resources": [
            { "FolderPath": "/Icons", "EnumName": "Lost", "DestinationPath": "/Missing" },
            { "FolderPath": "/Icons", "EnumName": "Icon", "DestinationPath": "/Enums" }
        ] }"#,
    );
    project.write("Icons/a.png", "");

    let report = project.generate().unwrap();
    assert!(matches!(
        report.failure("Lost").unwrap().error,
        CodegenError::DestinationNotFound(_)
    ));
    assert!(project.path("Enums/Icon.cs").is_file());
}

#[test]
fn test_missing_enum_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = GeneratorBuilder::new(dir.path()).generate().unwrap_err();
    assert!(matches!(err, CodegenError::ConfigNotFound(_)));
}

#[test]
fn test_unreadable_database_is_fatal() {
    let project = Project::new(
        r#"{ "database": [ {
            "TableName": "Items", "EnumName": "ItemType",
            "VariableNameColumn": "Name", "DestinationPath": "/Enums"
        } ] }"#,
    );
    project.write(
        "StreamingAssets/database.db",
        "this file only pretends to be a database and has no sqlite header",
    );

    let err = project.generate().unwrap_err();
    assert!(matches!(err, CodegenError::Connection(_)));
}

#[test]
fn test_missing_database_is_fatal() {
    let project = Project::new(
        r#"{ "database": [ {
            "TableName": "Items", "EnumName": "ItemType",
            "VariableNameColumn": "Name", "DestinationPath": "/Enums"
        } ] }"#,
    );

    let err = project.generate().unwrap_err();
    assert!(matches!(err, CodegenError::DatabaseNotFound(_)));
}

#[test]
fn test_malformed_template_writes_nothing() {
    let project = Project::new(
        r#"{ "database": [ {
            "TableName": "Items", "EnumName": "ItemType",
            "VariableNameColumn": "Name", "DestinationPath": "/Enums"
        } ] }"#,
    );
    project.database(ITEMS_TABLE);
    project.write(
        "EnumGenerator/Enumeration.cs.template",
        &CSHARP_TEMPLATE.replace("$REPEAT_END", ""),
    );

    let report = project.generate().unwrap();
    assert!(matches!(
        report.failure("ItemType").unwrap().error,
        CodegenError::MalformedTemplate(_)
    ));
    assert!(!project.path("Enums/ItemType.cs").exists());
}

#[test]
fn test_regeneration_overwrites_with_identical_output() {
    let project = Project::new(
        r#"{ "database": [ {
            "TableName": "Items", "EnumName": "ItemType",
            "VariableNameColumn": "Name", "DestinationPath": "/Enums"
        } ] }"#,
    );
    project.database(ITEMS_TABLE);
    project.write("Enums/ItemType.cs", "stale hand edits");

    project.generate().unwrap();
    let first = project.read("Enums/ItemType.cs");
    assert_ne!(first, "stale hand edits");

    project.generate().unwrap();
    assert_eq!(project.read("Enums/ItemType.cs"), first);
}

#[test]
fn test_phase_flags() {
    let project = Project::new(
        r#"{
            "database": [ {
                "TableName": "Items", "EnumName": "ItemType",
                "VariableNameColumn": "Name", "DestinationPath": "/Enums"
            } ],
            "resources": [ {
                "FolderPath": "/Icons", "EnumName": "Icon", "DestinationPath": "/Enums"
            } ]
        }"#,
    );
    project.write("Icons/a.png", "");

    // database phase disabled, so the missing database file is irrelevant
    let report = GeneratorBuilder::new(project.root())
        .resources_only()
        .generate()
        .unwrap();
    assert_eq!(report.succeeded.len(), 1);
    assert!(report.generated("Icon").is_some());
    assert!(!project.path("Enums/ItemType.cs").exists());

    project.database(ITEMS_TABLE);
    let report = GeneratorBuilder::new(project.root())
        .database_only()
        .output_extension(".txt")
        .generate()
        .unwrap();
    assert_eq!(report.succeeded.len(), 1);
    assert!(project.path("Enums/ItemType.txt").is_file());
}
