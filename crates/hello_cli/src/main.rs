//! CLI smoke entry point.
//!
//! Loads the core export table without a JavaScript host and invokes each export.

use hello_core::{core_version, register_module, MODULE_NAME};
use std::process::ExitCode;

fn main() -> ExitCode {
    let table = register_module();
    println!("module={MODULE_NAME} exports={}", table.names().join(","));

    for name in table.names() {
        match table.invoke::<()>(name, &[]) {
            Ok(value) => println!("{name}={value}"),
            Err(err) => {
                eprintln!("{name} failed: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    println!("hello_core version={}", core_version());
    ExitCode::SUCCESS
}
