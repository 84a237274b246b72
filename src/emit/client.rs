//! `Client` interface, `New` factory and the composite `serviceClients` type.

use std::fmt::{self, Write};

use crate::config::GeneratorConfig;
use crate::emit::{write_aligned, GeneratedFile};
use crate::naming::field_name;
use crate::unit::GenerationUnit;

/// Name written into the "Code generated by" header.
pub const GENERATOR_NAME: &str = "protoc-gen-go-client";

/// Emit the header, the `Client` interface, `New` and the accessors.
pub fn emit_client(
    g: &mut GeneratedFile,
    unit: &GenerationUnit,
    config: &GeneratorConfig,
) -> fmt::Result {
    g.header_comment(format!("Code generated by {GENERATOR_NAME}. DO NOT EDIT."));
    g.header_comment(format!("Sources: {}", unit.provenance()));

    g.line("// Client provide all service clients.");
    g.line("type Client interface {");
    for (file, service) in unit.services() {
        let client = g.qualified(&file.client_ident(service));
        writeln!(g, "\t// {} {}", service.go_name, file.path)?;
        writeln!(g, "\t{}() {}", service.go_name, client)?;
    }
    g.line("}");
    g.blank();

    let conn = g.qualified(&config.transport_import_path().ident("ClientConnInterface"));
    g.line("// New create client");
    writeln!(g, "func New(cc {conn}) Client {{")?;
    g.line("\treturn &serviceClients{");
    let entries: Vec<(String, String)> = unit
        .services()
        .map(|(file, service)| {
            let key = format!("{}:", field_name(&service.go_name));
            (key, format!("{}(cc),", g.qualified(&file.client_constructor(service))))
        })
        .collect();
    write_aligned(g, "\t\t", &entries)?;
    g.line("\t}");
    g.line("}");
    g.blank();

    g.line("type serviceClients struct {");
    let fields: Vec<(String, String)> = unit
        .services()
        .map(|(file, service)| {
            (field_name(&service.go_name), g.qualified(&file.client_ident(service)))
        })
        .collect();
    write_aligned(g, "\t", &fields)?;
    g.line("}");
    g.blank();

    for (file, service) in unit.services() {
        let client = g.qualified(&file.client_ident(service));
        writeln!(g, "func (c *serviceClients) {}() {} {{", service.go_name, client)?;
        writeln!(g, "\treturn c.{}", field_name(&service.go_name))?;
        g.line("}");
        g.blank();
    }
    Ok(())
}
