//! Export table consulted by host bindings.
//!
//! # Invariants
//! - Export names are unique within one table.
//! - Export names are identifier-shaped ASCII so every host can bind them.
//! - Exported callables ignore their arguments.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Callable behind one export.
pub type ExportCallable = fn() -> &'static str;

/// Export registration/lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    InvalidExportName(String),
    DuplicateExportName(String),
    ExportNotFound(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExportName(value) => write!(f, "export name is invalid: `{value}`"),
            Self::DuplicateExportName(value) => {
                write!(f, "export name already registered: `{value}`")
            }
            Self::ExportNotFound(value) => write!(f, "export not found: `{value}`"),
        }
    }
}

impl Error for RegistryError {}

/// One named export.
#[derive(Debug, Clone, Copy)]
pub struct ExportedFunction {
    name: &'static str,
    callable: ExportCallable,
}

impl ExportedFunction {
    pub const fn new(name: &'static str, callable: ExportCallable) -> Self {
        Self { name, callable }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invokes the export. Arguments are accepted and ignored.
    pub fn invoke<A>(&self, _args: &[A]) -> &'static str {
        (self.callable)()
    }
}

/// Name-ordered table of exports.
#[derive(Debug, Default)]
pub struct ExportTable {
    entries: BTreeMap<&'static str, ExportedFunction>,
}

impl ExportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one export.
    pub fn register(&mut self, export: ExportedFunction) -> Result<(), RegistryError> {
        let name = export.name();
        if !is_valid_export_name(name) {
            return Err(RegistryError::InvalidExportName(name.to_string()));
        }
        if self.entries.contains_key(name) {
            return Err(RegistryError::DuplicateExportName(name.to_string()));
        }

        self.entries.insert(name, export);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns sorted export names.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    pub fn get(&self, name: &str) -> Option<&ExportedFunction> {
        self.entries.get(name)
    }

    /// Resolves `name` and invokes it with `args`.
    pub fn invoke<A>(&self, name: &str, args: &[A]) -> Result<&'static str, RegistryError> {
        self.get(name)
            .map(|export| export.invoke(args))
            .ok_or_else(|| RegistryError::ExportNotFound(name.to_string()))
    }
}

fn is_valid_export_name(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
