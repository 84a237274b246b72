//! `CodeGeneratorRequest` as a [`DefinitionSource`].
//!
//! Descriptors are resolved through a `prost-reflect` pool so method input
//! and output types can be traced back to the file (and therefore the Go
//! package) that declares them.

use std::collections::HashMap;

use prost_reflect::{DescriptorPool, FileDescriptor, MessageDescriptor, ServiceDescriptor};
use prost_types::compiler::CodeGeneratorRequest;
use prost_types::FileDescriptorSet;
use tracing::debug;

use crate::error::{GenerateError, Result};
use crate::generator::DefinitionSource;
use crate::model::{DefinitionFile, GoIdent, GoImportPath, Method, Service};
use crate::naming::{clean_package_name, go_camel_case};

/// Resolved plugin request.
pub struct PluginRequest {
    files_to_generate: Vec<String>,
    pool: DescriptorPool,
    /// proto file -> Go import path (`M` parameters)
    import_mappings: HashMap<String, String>,
}

impl PluginRequest {
    pub fn new(
        request: CodeGeneratorRequest,
        import_mappings: HashMap<String, String>,
    ) -> Result<Self> {
        let pool = DescriptorPool::from_file_descriptor_set(FileDescriptorSet {
            file: request.proto_file,
        })?;
        debug!(
            files = pool.files().len(),
            targets = request.file_to_generate.len(),
            "resolved request descriptors"
        );
        Ok(Self {
            files_to_generate: request.file_to_generate,
            pool,
            import_mappings,
        })
    }

    /// Go import path of the package generated for `file`.
    ///
    /// An `M` mapping wins over the file's `go_package` option. Either may
    /// carry an explicit package name as `path;name`.
    fn go_import_path(&self, file: &FileDescriptor) -> Result<GoImportPath> {
        let option = file
            .file_descriptor_proto()
            .options
            .as_ref()
            .and_then(|o| o.go_package.as_deref());
        let spec = self
            .import_mappings
            .get(file.name())
            .map(String::as_str)
            .or(option)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| GenerateError::MissingGoPackage {
                file: file.name().to_string(),
            })?;

        Ok(match spec.split_once(';') {
            Some((path, name)) => GoImportPath::with_package(path, clean_package_name(name)),
            None => GoImportPath::new(spec),
        })
    }

    fn message_ident(&self, message: &MessageDescriptor) -> Result<GoIdent> {
        let file = message.parent_file();
        let package = file.package_name();
        let full_name = message.full_name();
        let local = if package.is_empty() {
            full_name
        } else {
            full_name
                .strip_prefix(package)
                .and_then(|rest| rest.strip_prefix('.'))
                .unwrap_or(full_name)
        };
        Ok(self.go_import_path(&file)?.ident(go_camel_case(local)))
    }

    fn service(&self, service: &ServiceDescriptor) -> Result<Service> {
        let methods = service
            .methods()
            .map(|method| {
                Ok(Method {
                    name: method.name().to_string(),
                    go_name: go_camel_case(method.name()),
                    input: self.message_ident(&method.input())?,
                    output: self.message_ident(&method.output())?,
                    client_streaming: method.is_client_streaming(),
                    server_streaming: method.is_server_streaming(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Service {
            name: service.name().to_string(),
            go_name: go_camel_case(service.name()),
            methods,
        })
    }

    fn definition_file(&self, file: &FileDescriptor) -> Result<DefinitionFile> {
        let services = file
            .services()
            .map(|s| self.service(&s))
            .collect::<Result<Vec<_>>>()?;

        Ok(DefinitionFile {
            path: file.name().to_string(),
            package: file.package_name().to_string(),
            go_import_path: self.go_import_path(file)?,
            services,
        })
    }
}

impl DefinitionSource for PluginRequest {
    fn definition_files(&self) -> Result<Vec<DefinitionFile>> {
        self.files_to_generate
            .iter()
            .map(|name| {
                let file = self
                    .pool
                    .get_file_by_name(name)
                    .ok_or_else(|| GenerateError::UnknownFile(name.clone()))?;
                self.definition_file(&file)
            })
            .collect()
    }
}
