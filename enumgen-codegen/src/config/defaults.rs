//! Default configuration values - single source of truth

/// Default project root that relative paths resolve against
pub const PROJECT_ROOT: &str = ".";

/// Whether the generator files are resolved under the project root by default
pub const RELATIVE_TO_ROOT: bool = true;

/// Default location of the JSON enum config
pub const ENUM_CONFIG_FILE: &str = "EnumGenerator/enumconfig.json";

/// Default location of the SQLite database
pub const DATABASE_FILE: &str = "StreamingAssets/database.db";

/// Default location of the enum template
pub const TEMPLATE_FILE: &str = "EnumGenerator/Enumeration.cs.template";

/// Default extension of generated files
pub const OUTPUT_EXTENSION: &str = "cs";

/// Whether to generate enums from resource folders by default
pub const GENERATE_RESOURCES: bool = true;

/// Whether to generate enums from database tables by default
pub const GENERATE_DATABASE: bool = true;

/// Whether to run in dry-run mode by default
pub const DRY_RUN: bool = false;
