//! Node-API binding for the hello module.
//!
//! # Responsibility
//! - Expose exactly one host symbol, `hello`.
//! - Start logging when configured and register the core export table at module load.
//!
//! # Invariants
//! - Exported functions must not panic across the Node-API boundary.
//! - Exported functions only read the table registered at load.
//! - Arguments passed from JavaScript are ignored.

#![deny(clippy::all)]

use hello_core::logging::init_from_config;
use hello_core::{register_module, registered_module, LoggingConfig, RegistryError};
use log::warn;
use napi_derive::napi;

const HELLO_EXPORT: &str = "hello";

/// Runs once when Node loads the addon.
#[napi::module_init]
fn init() {
    start_logging();
    register_module();
}

/// Returns `"world"`.
///
/// # FFI contract
/// - Sync call, non-blocking, pure.
/// - Extra JavaScript arguments are ignored.
#[napi]
pub fn hello() -> napi::Result<String> {
    invoke_export(HELLO_EXPORT).map_err(|err| napi::Error::from_reason(err.to_string()))
}

fn invoke_export(name: &str) -> Result<String, RegistryError> {
    registered_module()
        .ok_or_else(|| RegistryError::ExportNotFound(name.to_string()))?
        .invoke::<()>(name, &[])
        .map(str::to_owned)
}

fn start_logging() {
    let config = LoggingConfig::from_env();
    if let Err(err) = init_from_config(&config) {
        warn!("event=logging_init module=addon status=error error={err}");
    }
}
