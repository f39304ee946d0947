//! Main generation orchestrator

use std::path::{Path, PathBuf};

use enumgen_db::{Connection, SqliteConnection, ValueKind};
use tracing::{debug, info, warn};

use crate::codegen::{numbered_members, output_path, render, write_file, EnumMember};
use crate::config::GeneratorConfig;
use crate::enumerate::{list_names, query_members};
use crate::error::{CodegenError, Result};
use crate::report::{GenerationReport, Rendered};
use crate::source::{load_config, DatabaseSourceConfig, FilesystemSourceConfig};

/// Runs both generation phases for one configuration.
///
/// Each config entry is attempted on its own; its failure is recorded in the
/// report and the next entry still runs. Only a missing or unreadable enum
/// config, a missing database file, or a database that cannot be opened
/// abort the run.
pub struct EnumGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> EnumGenerator<'a> {
    /// Create a new generator with the given configuration
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Load the enum config and run every enabled phase
    pub fn generate(&self) -> Result<GenerationReport> {
        let loaded = load_config(&self.config.enum_config_path())?;
        let mut report = GenerationReport {
            rejected: loaded.rejected,
            ..Default::default()
        };

        if self.config.generate_resources {
            self.generate_resources(&loaded.resources, &mut report);
        }
        if self.config.generate_database {
            self.generate_database(&loaded.database, &mut report)?;
        }

        Ok(report)
    }

    /// Generate one enum per resource folder entry
    pub fn generate_resources(
        &self,
        configs: &[FilesystemSourceConfig],
        report: &mut GenerationReport,
    ) {
        info!("Generating {} resource enums", configs.len());
        for config in configs {
            let outcome = self.generate_resource(config);
            report.record(config.clone().into(), outcome);
        }
    }

    fn generate_resource(&self, config: &FilesystemSourceConfig) -> Result<Rendered> {
        let folder = self.config.source_dir(&config.folder_path);
        if !folder.is_dir() {
            return Err(CodegenError::FolderNotFound(folder));
        }
        let destination = self.destination(&config.destination_path)?;

        let names = list_names(
            &folder,
            &config.valid_extensions,
            &config.invalid_extensions,
        );
        let members = numbered_members(names);
        self.emit(
            &destination,
            &config.enum_name,
            ValueKind::Int.label(),
            &members,
        )
    }

    /// Generate one enum per database entry over a single shared connection
    pub fn generate_database(
        &self,
        configs: &[DatabaseSourceConfig],
        report: &mut GenerationReport,
    ) -> Result<()> {
        if configs.is_empty() {
            debug!("No database enums configured, not opening the database");
            return Ok(());
        }

        let database = self.config.database_path();
        if !database.is_file() {
            return Err(CodegenError::DatabaseNotFound(database));
        }

        // Queries run one after another on the calling thread.
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        runtime.block_on(async {
            let mut conn = SqliteConnection::open(&database)
                .await
                .map_err(CodegenError::Connection)?;
            info!(
                "Generating {} database enums from {}",
                configs.len(),
                conn.path().display()
            );

            self.generate_tables(&mut conn, configs, report).await;

            if let Err(e) = conn.close().await {
                warn!("Failed to close {}: {}", database.display(), e);
            }
            Ok::<(), CodegenError>(())
        })
    }

    /// Generate database enums over an already open connection
    pub async fn generate_tables<C: Connection + ?Sized>(
        &self,
        conn: &mut C,
        configs: &[DatabaseSourceConfig],
        report: &mut GenerationReport,
    ) {
        for config in configs {
            let outcome = self.generate_table(conn, config).await;
            report.record(config.clone().into(), outcome);
        }
    }

    async fn generate_table<C: Connection + ?Sized>(
        &self,
        conn: &mut C,
        config: &DatabaseSourceConfig,
    ) -> Result<Rendered> {
        // Checked before any query is issued.
        let destination = self.destination(&config.destination_path)?;

        let members = query_members(conn, config).await?;
        self.emit(
            &destination,
            &config.enum_name,
            config.resolved_kind().label(),
            &members,
        )
    }

    fn destination(&self, destination_path: &str) -> Result<PathBuf> {
        let destination = self.config.destination_dir(destination_path);
        if destination.is_dir() {
            Ok(destination)
        } else {
            Err(CodegenError::DestinationNotFound(destination))
        }
    }

    fn emit(
        &self,
        destination: &Path,
        enum_name: &str,
        value_type: &str,
        members: &[EnumMember],
    ) -> Result<Rendered> {
        let contents = render(
            &self.config.template_path(),
            enum_name,
            value_type,
            members,
        )?;

        let ext = &self.config.output_extension;
        let path = if self.config.dry_run {
            let path = output_path(destination, enum_name, ext);
            info!("Dry run - would write {}", path.display());
            path
        } else {
            write_file(destination, enum_name, ext, &contents)?
        };

        Ok(Rendered {
            path,
            contents,
            member_count: members.len(),
            written: !self.config.dry_run,
        })
    }
}
