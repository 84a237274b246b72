//! Input aggregation and cross-file consistency validation.
//!
//! A [`GenerationUnit`] is the merged, ordered view of every definition file
//! that declares at least one service. All files must target the same Go
//! import path and proto package as the root file; anything else is a
//! [`ConflictError`] and nothing is generated.

use std::collections::HashMap;

use tracing::debug;

use crate::model::{DefinitionFile, Service};
use crate::naming::field_name;

/// Cross-file inconsistencies that abort a generation run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("package path conflict between {root} ({root_file}) and {other} ({other_file})")]
    ImportPath {
        root_file: String,
        root: String,
        other_file: String,
        other: String,
    },

    #[error("package conflict between {root} ({root_file}) and {other} ({other_file})")]
    Package {
        root_file: String,
        root: String,
        other_file: String,
        other: String,
    },

    #[error("services {first} and {second} both derive identifier {identifier}")]
    Identifier {
        identifier: String,
        first: String,
        second: String,
    },
}

/// Validated, ordered set of definition files for one generation run.
#[derive(Debug, Clone)]
pub struct GenerationUnit {
    files: Vec<DefinitionFile>,
    root: usize,
    provenance: String,
}

impl GenerationUnit {
    /// Merge `files` into a unit.
    ///
    /// Returns `Ok(None)` when no file declares a service. Files are kept in
    /// descriptor path order; services and methods keep declaration order.
    /// The root is the first file with services in the given enumeration
    /// order, and provenance lists paths in that same order.
    pub fn build(files: Vec<DefinitionFile>) -> Result<Option<Self>, ConflictError> {
        let files: Vec<DefinitionFile> = files
            .into_iter()
            .filter(|f| !f.services.is_empty())
            .collect();

        let Some(root) = files.first() else {
            debug!("no definition file declares a service");
            return Ok(None);
        };

        for file in &files[1..] {
            if file.go_import_path.path() != root.go_import_path.path() {
                return Err(ConflictError::ImportPath {
                    root_file: root.path.clone(),
                    root: root.go_import_path.path().to_string(),
                    other_file: file.path.clone(),
                    other: file.go_import_path.path().to_string(),
                });
            }
            if file.package != root.package {
                return Err(ConflictError::Package {
                    root_file: root.path.clone(),
                    root: root.package.clone(),
                    other_file: file.path.clone(),
                    other: file.package.clone(),
                });
            }
        }

        let provenance = files
            .iter()
            .map(|f| f.path.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let root_path = root.path.clone();

        let mut files = files;
        files.sort_by(|a, b| a.path.cmp(&b.path));
        let root = files
            .iter()
            .position(|f| f.path == root_path)
            .unwrap_or_default();

        let unit = Self {
            files,
            root,
            provenance,
        };
        unit.check_identifiers()?;

        debug!(
            files = unit.files.len(),
            services = unit.services().count(),
            root = %root_path,
            "built generation unit"
        );
        Ok(Some(unit))
    }

    /// Reject services whose exported names or derived field names collide.
    fn check_identifiers(&self) -> Result<(), ConflictError> {
        let mut exported: HashMap<&str, String> = HashMap::new();
        let mut fields: HashMap<String, String> = HashMap::new();

        for (file, service) in self.services() {
            let origin = format!("{} ({})", service.go_name, file.path);

            if let Some(first) = exported.insert(&service.go_name, origin.clone()) {
                return Err(ConflictError::Identifier {
                    identifier: service.go_name.clone(),
                    first,
                    second: origin,
                });
            }

            let field = field_name(&service.go_name);
            if let Some(first) = fields.insert(field.clone(), origin.clone()) {
                return Err(ConflictError::Identifier {
                    identifier: field,
                    first,
                    second: origin,
                });
            }
        }
        Ok(())
    }

    /// Files in descriptor path order.
    pub fn files(&self) -> &[DefinitionFile] {
        &self.files
    }

    /// The file whose Go import path and package are canonical for the unit.
    pub fn root(&self) -> &DefinitionFile {
        &self.files[self.root]
    }

    /// Comma-joined descriptor paths of every file in the unit.
    pub fn provenance(&self) -> &str {
        &self.provenance
    }

    /// Every (file, service) pair in emission order.
    pub fn services(&self) -> impl Iterator<Item = (&DefinitionFile, &Service)> + '_ {
        self.files
            .iter()
            .flat_map(|file| file.services.iter().map(move |service| (file, service)))
    }
}
