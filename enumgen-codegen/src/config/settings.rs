//! Configuration settings for enumgen-codegen

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::defaults;
use crate::error::{CodegenError, Result};

/// Main configuration struct for enum generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Project root; resource folders always resolve against it
    #[serde(default = "default_project_root")]
    pub project_root: PathBuf,

    /// Root that destination folders resolve against (defaults to project_root)
    #[serde(default)]
    pub output_root: Option<PathBuf>,

    /// Resolve the enum config, database and template paths under project_root
    #[serde(default = "default_relative_to_root")]
    pub relative_to_root: bool,

    /// Path to the JSON enum config
    #[serde(default = "default_enum_config_file")]
    pub enum_config_file: PathBuf,

    /// Path to the SQLite database file
    #[serde(default = "default_database_file")]
    pub database_file: PathBuf,

    /// Path to the enum template
    #[serde(default = "default_template_file")]
    pub template_file: PathBuf,

    /// Extension of generated files, without the leading dot
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// Whether to generate enums from resource folders
    #[serde(default = "default_generate_resources")]
    pub generate_resources: bool,

    /// Whether to generate enums from database tables
    #[serde(default = "default_generate_database")]
    pub generate_database: bool,

    /// Dry run mode - render without writing files
    #[serde(default = "default_dry_run")]
    pub dry_run: bool,

    /// Log level (trace, debug, info, warn, error)
    /// Can be overridden by RUST_LOG env var
    #[serde(default)]
    pub log_level: Option<String>,
}

// Default value functions for serde
fn default_project_root() -> PathBuf {
    PathBuf::from(defaults::PROJECT_ROOT)
}
fn default_relative_to_root() -> bool {
    defaults::RELATIVE_TO_ROOT
}
fn default_enum_config_file() -> PathBuf {
    PathBuf::from(defaults::ENUM_CONFIG_FILE)
}
fn default_database_file() -> PathBuf {
    PathBuf::from(defaults::DATABASE_FILE)
}
fn default_template_file() -> PathBuf {
    PathBuf::from(defaults::TEMPLATE_FILE)
}
fn default_output_extension() -> String {
    defaults::OUTPUT_EXTENSION.to_string()
}
fn default_generate_resources() -> bool {
    defaults::GENERATE_RESOURCES
}
fn default_generate_database() -> bool {
    defaults::GENERATE_DATABASE
}
fn default_dry_run() -> bool {
    defaults::DRY_RUN
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_root: default_project_root(),
            output_root: None,
            relative_to_root: default_relative_to_root(),
            enum_config_file: default_enum_config_file(),
            database_file: default_database_file(),
            template_file: default_template_file(),
            output_extension: default_output_extension(),
            generate_resources: default_generate_resources(),
            generate_database: default_generate_database(),
            dry_run: default_dry_run(),
            log_level: None,
        }
    }
}

impl GeneratorConfig {
    /// Create a default config rooted at `project_root`
    pub fn default_with_root(project_root: PathBuf) -> Self {
        Self {
            project_root,
            ..Default::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GeneratorConfig = toml::from_str(&content).map_err(|e| {
            CodegenError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Load configuration using config-rs (file + environment variables)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from config file if specified
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        } else {
            // Try default locations
            builder = builder.add_source(File::with_name("enumgen").required(false));
        }

        // Override with environment variables (ENUMGEN_*)
        builder = builder.add_source(
            Environment::with_prefix("ENUMGEN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: GeneratorConfig = builder.build()?.try_deserialize()?;

        Ok(config)
    }

    /// Path of the JSON enum config
    pub fn enum_config_path(&self) -> PathBuf {
        self.resolve_file(&self.enum_config_file)
    }

    /// Path of the SQLite database
    pub fn database_path(&self) -> PathBuf {
        self.resolve_file(&self.database_file)
    }

    /// Path of the enum template
    pub fn template_path(&self) -> PathBuf {
        self.resolve_file(&self.template_file)
    }

    /// Resolve a config entry's `FolderPath`
    pub fn source_dir(&self, folder_path: &str) -> PathBuf {
        join_rooted(&self.project_root, folder_path)
    }

    /// Resolve a config entry's `DestinationPath`
    pub fn destination_dir(&self, destination_path: &str) -> PathBuf {
        let root = self.output_root.as_ref().unwrap_or(&self.project_root);
        join_rooted(root, destination_path)
    }

    fn resolve_file(&self, path: &Path) -> PathBuf {
        if self.relative_to_root && path.is_relative() {
            self.project_root.join(path)
        } else {
            path.to_path_buf()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.output_extension.trim().is_empty() {
            return Err(CodegenError::ValidationError(
                "output_extension is required".into(),
            ));
        }

        if self.output_extension.contains(['/', '\\']) {
            return Err(CodegenError::ValidationError(format!(
                "output_extension must not contain a path separator: {}",
                self.output_extension
            )));
        }

        if !self.generate_resources && !self.generate_database {
            return Err(CodegenError::ValidationError(
                "at least one of generate_resources or generate_database must be true".into(),
            ));
        }

        Ok(())
    }
}

/// Join a config path (always written with a leading `/`) under `root`.
fn join_rooted(root: &Path, path: &str) -> PathBuf {
    root.join(path.trim_start_matches('/'))
}
