//! Go source emission.
//!
//! [`GeneratedFile`] is an append-only Go source buffer. Qualifying a
//! [`GoIdent`] through it records the import and returns `alias.Name`; the
//! import block is assembled when the content is rendered, so emitters never
//! manage imports themselves.
//!
//! - [`client`]: the `Client` interface, `New` factory and composite type
//! - [`wrapper`]: per-service wrappers that merge context call options

pub mod client;
pub mod wrapper;

use std::collections::{BTreeMap, HashSet};
use std::fmt::{self, Write};

use crate::model::{GoIdent, GoImportPath};
use crate::naming::GO_PREDECLARED;

/// Parameter and receiver names bound by the emitted functions.
const LOCAL_NAMES: &[&str] = &["c", "cc", "ctx", "req", "s"];

/// One generated Go source file.
#[derive(Debug)]
pub struct GeneratedFile {
    filename: String,
    package: String,
    header: Vec<String>,
    body: String,
    /// import path -> alias
    imports: BTreeMap<String, String>,
    used_aliases: HashSet<String>,
}

impl GeneratedFile {
    pub fn new(filename: impl Into<String>, package: impl Into<String>) -> Self {
        let package = package.into();
        let mut used_aliases: HashSet<String> = GO_PREDECLARED
            .iter()
            .chain(LOCAL_NAMES)
            .map(|name| name.to_string())
            .collect();
        used_aliases.insert(package.clone());
        Self {
            filename: filename.into(),
            package,
            header: Vec::new(),
            body: String::new(),
            imports: BTreeMap::new(),
            used_aliases,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Add a `//` comment line above the package clause.
    pub fn header_comment(&mut self, line: impl AsRef<str>) {
        self.header.push(format!("// {}", line.as_ref()));
    }

    /// Append one line (a trailing newline is added).
    pub fn line(&mut self, text: impl AsRef<str>) {
        self.body.push_str(text.as_ref());
        self.body.push('\n');
    }

    pub fn blank(&mut self) {
        self.body.push('\n');
    }

    /// Reference `ident` from this file, importing its package on first use.
    pub fn qualified(&mut self, ident: &GoIdent) -> String {
        let alias = self.import(&ident.import_path);
        format!("{}.{}", alias, ident.name)
    }

    /// Alias under which `import_path` is imported into this file.
    ///
    /// Aliases are assigned on first use; a package name already taken gets
    /// a numeric suffix (`grpc`, `grpc1`, ...). Predeclared identifiers and
    /// the names emitted functions bind count as taken.
    pub fn import(&mut self, import_path: &GoImportPath) -> String {
        if let Some(alias) = self.imports.get(import_path.path()) {
            return alias.clone();
        }
        let base = import_path.package();
        let mut alias = base.to_string();
        let mut n = 1;
        while self.used_aliases.contains(&alias) {
            alias = format!("{base}{n}");
            n += 1;
        }
        self.used_aliases.insert(alias.clone());
        self.imports.insert(import_path.path().to_string(), alias.clone());
        alias
    }

    /// Render the file: header, package clause, sorted imports, body.
    pub fn content(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 512);
        for line in &self.header {
            out.push_str(line);
            out.push('\n');
        }
        if !self.header.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("package {}\n\n", self.package));

        if !self.imports.is_empty() {
            out.push_str("import (\n");
            for (path, alias) in &self.imports {
                out.push_str(&format!("\t{alias} {path:?}\n"));
            }
            out.push_str(")\n\n");
        }

        out.push_str(self.body.trim_end());
        out.push('\n');
        out
    }
}

/// Write `rows` as two columns, padding the first the way gofmt aligns
/// struct fields and keyed composite literal elements.
pub(crate) fn write_aligned(
    g: &mut GeneratedFile,
    indent: &str,
    rows: &[(String, String)],
) -> fmt::Result {
    let width = rows
        .iter()
        .map(|(left, _)| left.chars().count())
        .max()
        .unwrap_or(0);
    for (left, right) in rows {
        writeln!(g, "{indent}{left:<width$} {right}")?;
    }
    Ok(())
}

impl Write for GeneratedFile {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.body.push_str(s);
        Ok(())
    }
}
