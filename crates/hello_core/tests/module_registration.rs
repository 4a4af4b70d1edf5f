use hello_core::{module_state, register_module, registered_module, ModuleState};

#[test]
fn register_module_transitions_once_and_exposes_only_hello() {
    assert_eq!(module_state(), ModuleState::Unregistered);
    assert!(registered_module().is_none());
    assert_eq!(module_state(), ModuleState::Unregistered);

    let table = register_module();
    assert_eq!(module_state(), ModuleState::Registered);
    assert_eq!(table.len(), 1);
    assert_eq!(table.names(), vec!["hello"]);

    let again = register_module();
    assert!(std::ptr::eq(table, again));
    let read_only = registered_module().expect("table should be registered");
    assert!(std::ptr::eq(table, read_only));
    assert_eq!(module_state(), ModuleState::Registered);
}
