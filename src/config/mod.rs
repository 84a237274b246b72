//! Generator configuration.
//!
//! Settings come from (later overrides earlier):
//! 1. Built-in defaults
//! 2. YAML file named by `CONFIG_ENV_VAR` (if set)
//! 3. Environment variables with `CONFIG_ENV_PREFIX` prefix
//! 4. Plugin parameters passed by protoc (`--go-client_opt=k=v,...`)

mod parameter;

use std::collections::HashMap;

use serde::Deserialize;

use crate::model::GoImportPath;

pub use parameter::PluginParameters;

/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "PROTOC_GEN_GO_CLIENT_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "PROTOC_GEN_GO_CLIENT";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "PROTOC_GEN_GO_CLIENT_LOG";

/// Default output file name.
pub const DEFAULT_FILENAME: &str = "client.go";
/// Default Go package of the output file.
pub const DEFAULT_PACKAGE: &str = "client";
/// Default package providing `ClientConnInterface` and `CallOptionFromContext`.
pub const DEFAULT_TRANSPORT_IMPORT_PATH: &str =
    "github.com/erda-project/erda-infra/pkg/transport/grpc";
/// Default package providing `CallOption`.
pub const DEFAULT_GRPC_IMPORT_PATH: &str = "google.golang.org/grpc";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown parameter {0:?}")]
    UnknownParameter(String),

    #[error("invalid parameter {name:?}: {message}")]
    InvalidParameter { name: String, message: String },

    #[error("configuration error: {0}")]
    Load(#[from] ::config::ConfigError),
}

/// Where the output file is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathsMode {
    /// Output name is used as given.
    #[default]
    Import,
    /// Output is placed in the directory of the root definition file.
    SourceRelative,
}

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Output file name.
    pub filename: String,
    /// Go package name of the output file.
    pub package: String,
    /// Import path providing `ClientConnInterface` and `CallOptionFromContext`.
    pub transport_import_path: String,
    /// Import path providing `CallOption`.
    pub grpc_import_path: String,
    /// Output placement.
    pub paths: PathsMode,
    /// Per-file Go import path overrides (`M<file>=<import path>`).
    #[serde(skip)]
    pub import_mappings: HashMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            filename: DEFAULT_FILENAME.to_string(),
            package: DEFAULT_PACKAGE.to_string(),
            transport_import_path: DEFAULT_TRANSPORT_IMPORT_PATH.to_string(),
            grpc_import_path: DEFAULT_GRPC_IMPORT_PATH.to_string(),
            paths: PathsMode::default(),
            import_mappings: HashMap::new(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from file, environment and plugin parameters.
    pub fn load(parameter: Option<&str>) -> Result<Self, ConfigError> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let params = PluginParameters::parse(parameter.unwrap_or_default())?;

        let mut builder = ConfigLib::builder();

        // Add config file from CONFIG_ENV_VAR env var if set
        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(CONFIG_ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        for (key, value) in &params.overrides {
            builder = builder.set_override(key.as_str(), value.as_str())?;
        }

        let mut config: GeneratorConfig = builder.build()?.try_deserialize()?;
        config.import_mappings = params.import_mappings;
        Ok(config)
    }

    pub fn transport_import_path(&self) -> GoImportPath {
        GoImportPath::new(&self.transport_import_path)
    }

    pub fn grpc_import_path(&self) -> GoImportPath {
        GoImportPath::new(&self.grpc_import_path)
    }

    /// Output file name for a unit rooted at `root_path`.
    pub fn output_filename(&self, root_path: &str) -> String {
        match self.paths {
            PathsMode::Import => self.filename.clone(),
            PathsMode::SourceRelative => match root_path.rsplit_once('/') {
                Some((dir, _)) => format!("{dir}/{}", self.filename),
                None => self.filename.clone(),
            },
        }
    }
}
