//! Per-service dispatch wrappers.
//!
//! Each wrapper holds a transport client plus a fixed list of default call
//! options. Every unary method forwards the caller's context and request,
//! appending the wrapper's options after those attached to the context, and
//! returns the transport's response and error untouched.
//!
//! The factory does not reference these types; they are emitted for callers
//! that construct wrappers themselves.

use std::fmt::{self, Write};

use tracing::warn;

use crate::config::GeneratorConfig;
use crate::emit::{write_aligned, GeneratedFile};
use crate::model::{DefinitionFile, GoImportPath, Method, Service};
use crate::naming::to_unexported;
use crate::unit::GenerationUnit;

/// Wrapper type name for a service, e.g. `userServiceWrapper`.
pub fn wrapper_name(service: &Service) -> String {
    format!("{}Wrapper", to_unexported(&service.go_name))
}

/// Emit a wrapper type and its dispatch methods for every service.
pub fn emit_wrappers(
    g: &mut GeneratedFile,
    unit: &GenerationUnit,
    config: &GeneratorConfig,
) -> fmt::Result {
    for (file, service) in unit.services() {
        emit_wrapper(g, file, service, config)?;
    }
    Ok(())
}

fn emit_wrapper(
    g: &mut GeneratedFile,
    file: &DefinitionFile,
    service: &Service,
    config: &GeneratorConfig,
) -> fmt::Result {
    let type_name = wrapper_name(service);
    let client = g.qualified(&file.client_ident(service));
    let call_option = g.qualified(&config.grpc_import_path().ident("CallOption"));

    writeln!(g, "type {type_name} struct {{")?;
    write_aligned(
        g,
        "\t",
        &[
            ("client".to_string(), client),
            ("opts".to_string(), format!("[]{call_option}")),
        ],
    )?;
    g.line("}");
    g.blank();

    for method in &service.methods {
        if !method.is_unary() {
            warn!(
                service = %service.name,
                method = %method.name,
                file = %file.path,
                "skipping wrapper for streaming method"
            );
            continue;
        }
        emit_dispatch(g, &type_name, method, &config.transport_import_path())?;
    }
    Ok(())
}

fn emit_dispatch(
    g: &mut GeneratedFile,
    type_name: &str,
    method: &Method,
    transport: &GoImportPath,
) -> fmt::Result {
    let context = g.qualified(&GoImportPath::new("context").ident("Context"));
    let input = g.qualified(&method.input);
    let output = g.qualified(&method.output);
    let from_context = g.qualified(&transport.ident("CallOptionFromContext"));

    writeln!(
        g,
        "func (s *{type_name}) {}(ctx {context}, req *{input}) (*{output}, error) {{",
        method.go_name
    )?;
    writeln!(
        g,
        "\treturn s.client.{}(ctx, req, append({from_context}(ctx), s.opts...)...)",
        method.go_name
    )?;
    g.line("}");
    g.blank();
    Ok(())
}
