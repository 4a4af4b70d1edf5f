//! One-time module registration.
//!
//! # Responsibility
//! - Build the process-wide export table the first time a host loads us.
//! - Report whether registration has happened.
//!
//! # Invariants
//! - `Unregistered -> Registered` happens exactly once per process.
//! - The registered table is never mutated afterwards.

use crate::exports::{ExportTable, ExportedFunction};
use log::{debug, error, info};
use once_cell::sync::OnceCell;

/// Module name reported to hosts and logs.
pub const MODULE_NAME: &str = "hello";

const BUILTIN_EXPORTS: &[ExportedFunction] = &[ExportedFunction::new("hello", crate::hello)];

static MODULE_TABLE: OnceCell<ExportTable> = OnceCell::new();

/// Registration lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleState {
    Unregistered,
    Registered,
}

/// Registers built-in exports and returns the process-wide table.
///
/// Later calls return the same table without registering again.
pub fn register_module() -> &'static ExportTable {
    MODULE_TABLE.get_or_init(|| {
        let table = build_table(BUILTIN_EXPORTS);
        info!(
            "event=module_register module={} status=ok exports={}",
            MODULE_NAME,
            table.len()
        );
        table
    })
}

/// Returns the registered table without registering.
///
/// `None` until [`register_module`] has run.
pub fn registered_module() -> Option<&'static ExportTable> {
    MODULE_TABLE.get()
}

/// Returns the current registration state.
pub fn module_state() -> ModuleState {
    match MODULE_TABLE.get() {
        Some(_) => ModuleState::Registered,
        None => ModuleState::Unregistered,
    }
}

fn build_table(exports: &[ExportedFunction]) -> ExportTable {
    let mut table = ExportTable::new();
    for export in exports {
        match table.register(*export) {
            Ok(()) => debug!(
                "event=export_register module={} status=ok name={}",
                MODULE_NAME,
                export.name()
            ),
            Err(err) => error!(
                "event=export_register module={} status=error name={} error={}",
                MODULE_NAME,
                export.name(),
                err
            ),
        }
    }
    table
}
