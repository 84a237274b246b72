//! `CodeGeneratorResponse` as an [`OutputSink`].

use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::CodeGeneratorResponse;

use crate::emit::GeneratedFile;
use crate::generator::OutputSink;

/// Collects generated files for the response.
#[derive(Debug, Default)]
pub struct PluginResponse {
    files: Vec<File>,
}

impl PluginResponse {
    /// Successful response carrying every emitted file.
    pub fn into_response(self) -> CodeGeneratorResponse {
        CodeGeneratorResponse {
            supported_features: Some(Feature::Proto3Optional as u64),
            file: self.files,
            ..Default::default()
        }
    }

    /// Failed response: protoc reports `message` and writes no files.
    pub fn failure(message: impl Into<String>) -> CodeGeneratorResponse {
        CodeGeneratorResponse {
            error: Some(message.into()),
            supported_features: Some(Feature::Proto3Optional as u64),
            ..Default::default()
        }
    }
}

impl OutputSink for PluginResponse {
    fn emit(&mut self, file: GeneratedFile) {
        self.files.push(File {
            name: Some(file.filename().to_string()),
            content: Some(file.content()),
            ..Default::default()
        });
    }
}
