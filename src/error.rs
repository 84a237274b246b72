//! Crate-wide error type.

use crate::config::ConfigError;
use crate::unit::ConflictError;

/// Result type for generation.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to decode CodeGeneratorRequest: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("failed to encode CodeGeneratorResponse: {0}")]
    Encode(#[from] prost::EncodeError),

    #[error("invalid descriptors: {0}")]
    Descriptor(#[from] prost_reflect::DescriptorError),

    #[error("file {0} is not included in the request")]
    UnknownFile(String),

    #[error(
        "unable to determine Go import path for {file}: \
         set option go_package or pass M{file}=<import path>"
    )]
    MissingGoPackage { file: String },

    #[error("failed to render generated code: {0}")]
    Render(#[from] std::fmt::Error),
}
