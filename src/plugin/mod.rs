//! protoc plugin protocol.
//!
//! protoc writes a serialized `CodeGeneratorRequest` to the plugin's stdin and
//! reads a `CodeGeneratorResponse` from its stdout. Generation failures are
//! reported through the response's `error` field; only a request that cannot
//! be decoded fails the process.

mod request;
mod response;

pub use request::PluginRequest;
pub use response::PluginResponse;

use prost::Message;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use tracing::error;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::generator::generate;

/// Decode a request, generate, and encode the response.
pub fn run(input: &[u8]) -> Result<Vec<u8>> {
    let request = CodeGeneratorRequest::decode(input)?;
    let response = handle(request);
    let mut output = Vec::with_capacity(response.encoded_len());
    response.encode(&mut output)?;
    Ok(output)
}

/// Generate for a decoded request.
pub fn handle(request: CodeGeneratorRequest) -> CodeGeneratorResponse {
    let mut sink = PluginResponse::default();
    match generate_into(request, &mut sink) {
        Ok(()) => sink.into_response(),
        Err(e) => {
            error!(error = %e, "generation failed");
            PluginResponse::failure(e.to_string())
        }
    }
}

fn generate_into(request: CodeGeneratorRequest, sink: &mut PluginResponse) -> Result<()> {
    let config = GeneratorConfig::load(request.parameter.as_deref())?;
    let source = PluginRequest::new(request, config.import_mappings.clone())?;
    generate(&source, sink, &config)?;
    Ok(())
}
