//! Core logic for the hello native addon.
//! Host bindings stay thin; the constant and export table live here.

pub mod config;
pub mod exports;
pub mod logging;
pub mod module;

pub use config::LoggingConfig;
pub use exports::{ExportTable, ExportedFunction, RegistryError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use module::{module_state, register_module, registered_module, ModuleState, MODULE_NAME};

/// Value returned by the `hello` export.
pub const GREETING: &str = "world";

/// Returns the greeting constant.
pub fn hello() -> &'static str {
    GREETING
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, hello};

    #[test]
    fn hello_returns_world() {
        assert_eq!(hello(), "world");
        assert_eq!(hello().len(), 5);
        assert_eq!(hello().as_bytes(), b"world");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
