//! Plugin parameter parsing.
//!
//! protoc passes `--go-client_opt` values as one comma-separated string of
//! `key=value` pairs. `M<file>=<import path>` entries map a proto file to a
//! Go import path; every other key overrides a [`GeneratorConfig`] field.
//!
//! [`GeneratorConfig`]: super::GeneratorConfig

use std::collections::HashMap;

use super::ConfigError;

const KNOWN_KEYS: &[&str] = &[
    "filename",
    "package",
    "transport_import_path",
    "grpc_import_path",
    "paths",
];

/// Parsed plugin parameter string.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PluginParameters {
    /// Configuration overrides in parameter order.
    pub overrides: Vec<(String, String)>,
    /// proto file -> Go import path
    pub import_mappings: HashMap<String, String>,
}

impl PluginParameters {
    pub fn parse(parameter: &str) -> Result<Self, ConfigError> {
        let mut params = Self::default();

        for part in parameter.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (name, value) = part.split_once('=').unwrap_or((part, ""));

            if let Some(file) = name.strip_prefix('M') {
                if file.is_empty() || value.is_empty() {
                    return Err(ConfigError::InvalidParameter {
                        name: name.to_string(),
                        message: "expected M<file>=<import path>".to_string(),
                    });
                }
                params
                    .import_mappings
                    .insert(file.to_string(), value.to_string());
                continue;
            }

            if !KNOWN_KEYS.contains(&name) {
                return Err(ConfigError::UnknownParameter(name.to_string()));
            }
            if value.is_empty() {
                return Err(ConfigError::InvalidParameter {
                    name: name.to_string(),
                    message: "missing value".to_string(),
                });
            }
            if name == "paths" && !matches!(value, "import" | "source_relative") {
                return Err(ConfigError::InvalidParameter {
                    name: name.to_string(),
                    message: format!("unknown mode {value:?}, want import or source_relative"),
                });
            }
            params.overrides.push((name.to_string(), value.to_string()));
        }

        Ok(params)
    }
}
