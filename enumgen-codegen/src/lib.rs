//! enumgen-codegen: Generate enum source files from SQLite columns and resource folders
//!
//! This crate provides both a CLI tool and a library for generating enums
//! from a JSON enum config. Each config entry describes one enum:
//!
//! - `database` entries project a name column (and optionally a value column)
//!   out of a table in a SQLite database file
//! - `resources` entries list the files of a folder, filtered by extension
//!
//! Every enum is rendered through a marker template (`$CLASS_NAME`,
//! `$ENUM_VALUE_TYPE`, `$REPEAT_START`/`$REPEAT_END`, `$ENUM_NAME`,
//! `$ENUM_VALUE`) and written to `<DestinationPath>/<EnumName>.<ext>`.
//!
//! # Enum config
//!
//! ```json
//! {
//!   "database": [
//!     { "TableName": "Items", "EnumName": "ItemType",
//!       "VariableNameColumn": "Name", "DestinationPath": "/Enums" }
//!   ],
//!   "resources": [
//!     { "FolderPath": "/Resources/Icons", "EnumName": "Icon",
//!       "DestinationPath": "/Enums", "ValidExtensions": ["png"] }
//!   ]
//! }
//! ```
//!
//! # Programmatic Configuration
//!
//! ```rust,ignore
//! let report = enumgen_codegen::GeneratorBuilder::new("Assets")
//!     .template_file("EnumGenerator/Enumeration.cs.template")
//!     .generate()?;
//!
//! for failed in &report.failed {
//!     eprintln!("{}: {}", failed.entry.enum_name(), failed.error);
//! }
//! ```
//!
//! # Usage in build.rs
//!
//! ```toml
//! [package.metadata.enumgen]
//! enum_config_file = "enums/enumconfig.json"
//! template_file = "enums/enum.rs.template"
//! output_extension = "rs"
//! ```
//!
//! ```rust,ignore
//! fn main() {
//!     enumgen_codegen::generate_from_cargo_metadata()
//!         .expect("Failed to generate enums");
//! }
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! enumgen-codegen --root ./Assets generate
//! ```

pub mod codegen;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod generator;
pub mod report;
pub mod source;

use std::path::{Path, PathBuf};

use tracing::info;

pub use config::GeneratorConfig;
pub use error::{CodegenError, Result};
pub use generator::EnumGenerator;
pub use report::{FailedEntry, GeneratedFile, GenerationReport, Rendered};

/// Main entry point for enum generation
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport> {
    config.validate()?;

    info!("Loading enum config: {:?}", config.enum_config_path());
    let report = EnumGenerator::new(config).generate()?;

    info!(
        "Enum generation complete: {} generated, {} failed, {} rejected",
        report.succeeded.len(),
        report.failed.len(),
        report.rejected.len()
    );
    Ok(report)
}

/// Builder pattern for easy configuration in build.rs or tools
pub struct GeneratorBuilder {
    config: GeneratorConfig,
}

impl GeneratorBuilder {
    /// Create a new builder rooted at `project_root`
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            config: GeneratorConfig::default_with_root(project_root.as_ref().to_path_buf()),
        }
    }

    /// Set the JSON enum config path
    pub fn enum_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config.enum_config_file = path.as_ref().to_path_buf();
        self
    }

    /// Set the SQLite database path
    pub fn database_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config.database_file = path.as_ref().to_path_buf();
        self
    }

    /// Set the template path
    pub fn template_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config.template_file = path.as_ref().to_path_buf();
        self
    }

    /// Resolve destination folders under `dir` instead of the project root
    pub fn output_root(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.output_root = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Set the extension of generated files
    pub fn output_extension(mut self, extension: &str) -> Self {
        self.config.output_extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Take the file paths as given instead of resolving them under the root
    pub fn absolute_paths(mut self) -> Self {
        self.config.relative_to_root = false;
        self
    }

    /// Generate only resource enums
    pub fn resources_only(mut self) -> Self {
        self.config.generate_database = false;
        self
    }

    /// Generate only database enums
    pub fn database_only(mut self) -> Self {
        self.config.generate_resources = false;
        self
    }

    /// Enable dry run mode (render without writing files)
    pub fn dry_run(mut self) -> Self {
        self.config.dry_run = true;
        self
    }

    /// The configuration built so far
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the enums
    pub fn generate(self) -> Result<GenerationReport> {
        generate(&self.config)
    }
}

/// Configuration for `[package.metadata.enumgen]` in Cargo.toml
#[derive(Debug, Clone, Default, serde::Deserialize)]
struct CargoMetadataConfig {
    /// Path to the JSON enum config (required)
    enum_config_file: Option<String>,

    /// Path to the enum template (required)
    template_file: Option<String>,

    /// Path to the SQLite database
    database_file: Option<String>,

    /// Extension of generated files (default: "rs")
    output_extension: Option<String>,

    /// Output root for destination folders (default: OUT_DIR)
    output_root: Option<String>,

    /// Whether to generate resource enums (default: true)
    generate_resources: Option<bool>,

    /// Whether to generate database enums (default: true)
    generate_database: Option<bool>,
}

#[derive(Debug, serde::Deserialize)]
struct CargoToml {
    package: Option<CargoPackage>,
}

#[derive(Debug, serde::Deserialize)]
struct CargoPackage {
    metadata: Option<CargoPackageMetadata>,
}

#[derive(Debug, serde::Deserialize)]
struct CargoPackageMetadata {
    enumgen: Option<CargoMetadataConfig>,
}

/// Generate enums from `[package.metadata.enumgen]` in Cargo.toml
///
/// Paths are resolved against the crate's manifest directory and generated
/// files land under `OUT_DIR` unless `output_root` says otherwise:
///
/// ```rust,ignore
/// // build.rs
/// fn main() {
///     enumgen_codegen::generate_from_cargo_metadata()
///         .expect("Failed to generate enums");
/// }
/// ```
///
/// Any failed or rejected entry is turned into an error so the build stops.
pub fn generate_from_cargo_metadata() -> Result<GenerationReport> {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").map_err(|_| {
        CodegenError::ConfigError(
            "CARGO_MANIFEST_DIR not set - are you running from build.rs?".into(),
        )
    })?;
    let manifest_dir = PathBuf::from(manifest_dir);

    let cargo_toml_path = manifest_dir.join("Cargo.toml");
    let cargo_toml_content = std::fs::read_to_string(&cargo_toml_path)?;

    let cargo_toml: CargoToml = toml::from_str(&cargo_toml_content).map_err(|e| {
        CodegenError::ConfigError(format!(
            "Failed to parse {}: {}",
            cargo_toml_path.display(),
            e
        ))
    })?;

    let metadata_config = cargo_toml
        .package
        .and_then(|p| p.metadata)
        .and_then(|m| m.enumgen)
        .ok_or_else(|| {
            CodegenError::ConfigError(
                "Missing [package.metadata.enumgen] section in Cargo.toml".into(),
            )
        })?;

    let enum_config_file = metadata_config.enum_config_file.ok_or_else(|| {
        CodegenError::ConfigError("enum_config_file is required in [package.metadata.enumgen]".into())
    })?;
    let template_file = metadata_config.template_file.ok_or_else(|| {
        CodegenError::ConfigError("template_file is required in [package.metadata.enumgen]".into())
    })?;

    let mut builder = GeneratorBuilder::new(&manifest_dir)
        .enum_config_file(&enum_config_file)
        .template_file(&template_file)
        .output_extension(metadata_config.output_extension.as_deref().unwrap_or("rs"));

    if let Some(database_file) = &metadata_config.database_file {
        builder = builder.database_file(database_file);
    }

    // Determine output root (default to OUT_DIR)
    builder = match metadata_config.output_root {
        Some(dir) => builder.output_root(manifest_dir.join(dir)),
        None => {
            let out_dir = std::env::var("OUT_DIR").map(PathBuf::from).map_err(|_| {
                CodegenError::ConfigError("OUT_DIR not set - are you running from build.rs?".into())
            })?;
            builder.output_root(out_dir)
        }
    };

    if let Some(false) = metadata_config.generate_resources {
        builder = builder.database_only();
    }
    if let Some(false) = metadata_config.generate_database {
        builder = builder.resources_only();
    }

    // Emit rerun-if-changed
    let config = builder.config();
    println!("cargo:rerun-if-changed={}", cargo_toml_path.display());
    println!("cargo:rerun-if-changed={}", config.enum_config_path().display());
    println!("cargo:rerun-if-changed={}", config.template_path().display());
    if config.generate_database {
        println!("cargo:rerun-if-changed={}", config.database_path().display());
    }

    let project_root = builder.config().project_root.clone();
    let report = builder.generate()?;

    for generated in &report.succeeded {
        if let source::ConfigEntry::Filesystem(entry) = &generated.entry {
            let folder = project_root.join(entry.folder_path.trim_start_matches('/'));
            println!("cargo:rerun-if-changed={}", folder.display());
        }
    }

    if let Some(failed) = report.failed.first() {
        return Err(CodegenError::ValidationError(format!(
            "enum {} failed: {}",
            failed.entry.enum_name(),
            failed.error
        )));
    }
    if let Some(rejected) = report.rejected.first() {
        return Err(CodegenError::ValidationError(format!(
            "{} entry {} rejected: {}",
            rejected.section, rejected.index, rejected.error
        )));
    }

    Ok(report)
}
