//! Read-only view of the parsed definitions handed over by protoc.
//!
//! These types are produced by the plugin front end and consumed by the
//! aggregator and emitters. Nothing here is mutated after construction.

use std::fmt;

use crate::naming::clean_package_name;

/// A Go import path together with the package name it declares.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GoImportPath {
    path: String,
    package: String,
}

impl GoImportPath {
    /// Import path whose package name is derived from its last path element.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let base = path.rsplit('/').next().unwrap_or(&path);
        let package = clean_package_name(base);
        Self { path, package }
    }

    /// Import path with an explicitly declared package name.
    pub fn with_package(path: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            package: package.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Identifier `name` living in this package.
    pub fn ident(&self, name: impl Into<String>) -> GoIdent {
        GoIdent {
            name: name.into(),
            import_path: self.clone(),
        }
    }
}

impl fmt::Display for GoImportPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.path)
    }
}

/// A Go identifier qualified by the package that declares it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GoIdent {
    pub name: String,
    pub import_path: GoImportPath,
}

/// One unary (or streaming) RPC of a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    /// Name as declared in the proto file.
    pub name: String,
    /// Exported Go name.
    pub go_name: String,
    pub input: GoIdent,
    pub output: GoIdent,
    pub client_streaming: bool,
    pub server_streaming: bool,
}

impl Method {
    pub fn is_unary(&self) -> bool {
        !self.client_streaming && !self.server_streaming
    }
}

/// A service declared in a definition file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    /// Name as declared in the proto file.
    pub name: String,
    /// Exported Go name.
    pub go_name: String,
    pub methods: Vec<Method>,
}

/// A parsed `.proto` file selected for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionFile {
    /// Descriptor path relative to the proto include root.
    pub path: String,
    /// Declared proto package (may be empty).
    pub package: String,
    /// Go package the file's own code is generated into.
    pub go_import_path: GoImportPath,
    pub services: Vec<Service>,
}

impl DefinitionFile {
    /// Transport client type protoc-gen-go-grpc generates for `service`.
    pub fn client_ident(&self, service: &Service) -> GoIdent {
        self.go_import_path.ident(format!("{}Client", service.go_name))
    }

    /// Constructor protoc-gen-go-grpc generates for `service`.
    pub fn client_constructor(&self, service: &Service) -> GoIdent {
        self.go_import_path.ident(format!("New{}Client", service.go_name))
    }
}
