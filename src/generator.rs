//! Generation driver.
//!
//! The host compiler is kept behind two seams: a [`DefinitionSource`] that
//! supplies already-parsed definition files, and an [`OutputSink`] that
//! receives the generated files. [`generate`] validates first and only then
//! emits, so a failed run never hands anything to the sink.

use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::emit::client::emit_client;
use crate::emit::wrapper::emit_wrappers;
use crate::emit::GeneratedFile;
use crate::error::Result;
use crate::model::DefinitionFile;
use crate::unit::GenerationUnit;

/// Supplies the definition files selected for generation, in enumeration order.
pub trait DefinitionSource {
    fn definition_files(&self) -> Result<Vec<DefinitionFile>>;
}

/// Receives generated files.
pub trait OutputSink {
    fn emit(&mut self, file: GeneratedFile);
}

impl DefinitionSource for Vec<DefinitionFile> {
    fn definition_files(&self) -> Result<Vec<DefinitionFile>> {
        Ok(self.clone())
    }
}

impl OutputSink for Vec<GeneratedFile> {
    fn emit(&mut self, file: GeneratedFile) {
        self.push(file);
    }
}

/// Run one generation pass.
///
/// Returns `Ok(false)` when no file declares a service; nothing is emitted.
pub fn generate(
    source: &dyn DefinitionSource,
    sink: &mut dyn OutputSink,
    config: &GeneratorConfig,
) -> Result<bool> {
    let files = source.definition_files()?;
    debug!(files = files.len(), "received definition files");

    let Some(unit) = GenerationUnit::build(files)? else {
        info!("no services to generate");
        return Ok(false);
    };

    let file = render(&unit, config)?;
    info!(
        file = %file.filename(),
        services = unit.services().count(),
        sources = %unit.provenance(),
        "generated client"
    );
    sink.emit(file);
    Ok(true)
}

/// Render the client file for a validated unit.
pub fn render(unit: &GenerationUnit, config: &GeneratorConfig) -> Result<GeneratedFile> {
    let filename = config.output_filename(&unit.root().path);
    let mut g = GeneratedFile::new(filename, &config.package);
    emit_client(&mut g, unit, config)?;
    emit_wrappers(&mut g, unit, config)?;
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;
    use crate::model::{GoImportPath, Method, Service};
    use crate::unit::ConflictError;

    fn file(path: &str, import_path: &str, services: &[&str]) -> DefinitionFile {
        let pkg = GoImportPath::new(import_path);
        DefinitionFile {
            path: path.to_string(),
            package: "example.api".to_string(),
            go_import_path: pkg.clone(),
            services: services
                .iter()
                .map(|name| Service {
                    name: name.to_string(),
                    go_name: name.to_string(),
                    methods: vec![Method {
                        name: "Get".to_string(),
                        go_name: "Get".to_string(),
                        input: pkg.ident("GetRequest"),
                        output: pkg.ident("GetResponse"),
                        client_streaming: false,
                        server_streaming: false,
                    }],
                })
                .collect(),
        }
    }

    fn run(files: Vec<DefinitionFile>) -> (Result<bool>, Vec<GeneratedFile>) {
        let mut out = Vec::new();
        let result = generate(&files, &mut out, &GeneratorConfig::default());
        (result, out)
    }

    #[test]
    fn test_generates_single_file() {
        let (result, out) = run(vec![file("a.proto", "example.com/api", &["Users"])]);
        assert!(result.unwrap());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].filename(), "client.go");
        assert_eq!(out[0].package(), "client");
    }

    #[test]
    fn test_conflict_emits_nothing() {
        let (result, out) = run(vec![
            file("x.proto", "a/b", &["X"]),
            file("y.proto", "a/c", &["Y"]),
        ]);
        assert!(matches!(
            result,
            Err(GenerateError::Conflict(ConflictError::ImportPath { .. }))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_input_emits_nothing() {
        let (result, out) = run(vec![file("types.proto", "a/b", &[])]);
        assert!(!result.unwrap());
        assert!(out.is_empty());
    }

    #[test]
    fn test_body_identical_across_permutations() {
        let files = vec![
            file("b.proto", "a/b", &["Bravo"]),
            file("a.proto", "a/b", &["Alpha", "Apex"]),
            file("c.proto", "a/b", &["Charlie"]),
        ];
        let body = |files: Vec<DefinitionFile>| {
            let (result, out) = run(files);
            result.unwrap();
            let content = out[0].content();
            // Provenance follows enumeration order; compare everything after it.
            content.split_once("package client").unwrap().1.to_string()
        };

        let mut reversed = files.clone();
        reversed.reverse();
        let mut rotated = files.clone();
        rotated.rotate_left(1);

        let expected = body(files);
        assert_eq!(body(reversed), expected);
        assert_eq!(body(rotated), expected);
    }
}
