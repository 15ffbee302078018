mod common;

use common::{logger, module, notification};
use maintenance_console::models::{
    FailureBehaviour, LogLevel, ModuleHealthState, ModuleStartBehaviour, NotificationSeverity, ServerModule,
};
use maintenance_console::store::{reduce, Snapshot, Transition};
use std::sync::Arc;

fn snapshot_with(modules: Vec<ServerModule>) -> Snapshot {
    reduce(&Snapshot::new("http://host.test/"), Transition::ReplaceModules(modules))
}

#[test]
fn test_behaviour_updates_are_idempotent() {
    let snapshot = snapshot_with(vec![module("A"), module("B")]);
    let start = Transition::UpdateModuleStartBehaviour {
        name: "A".to_string(),
        value: ModuleStartBehaviour::Manual,
    };
    let once = reduce(&snapshot, start.clone());
    let twice = reduce(&once, start);
    assert_eq!(once, twice);

    let failure = Transition::UpdateModuleFailureBehaviour {
        name: "B".to_string(),
        value: FailureBehaviour::StopAndNotify,
    };
    let once = reduce(&snapshot, failure.clone());
    let twice = reduce(&once, failure);
    assert_eq!(once, twice);
}

#[test]
fn test_update_changes_only_the_behaviour() {
    let mut original = module("A");
    original.dependencies = vec!["B".to_string()];
    original.notifications = vec![notification(NotificationSeverity::Warning, "Slow", "took long")];
    let snapshot = snapshot_with(vec![original.clone(), module("B")]);

    let next = reduce(
        &snapshot,
        Transition::UpdateModuleStartBehaviour {
            name: "A".to_string(),
            value: ModuleStartBehaviour::OnDependency,
        },
    );

    let updated = next.module("A").unwrap();
    assert_eq!(
        **updated,
        ServerModule {
            start_behaviour: ModuleStartBehaviour::OnDependency,
            ..original.clone()
        }
    );

    // The input snapshot is untouched
    assert_eq!(**snapshot.module("A").unwrap(), original);

    // Unchanged entries are shared with the previous snapshot
    assert!(Arc::ptr_eq(snapshot.module("B").unwrap(), next.module("B").unwrap()));
}

#[test]
fn test_update_for_unknown_module_is_a_no_op() {
    let snapshot = snapshot_with(vec![module("A")]);

    let next = reduce(
        &snapshot,
        Transition::UpdateModuleFailureBehaviour {
            name: "Missing".to_string(),
            value: FailureBehaviour::Reincarnate,
        },
    );
    assert_eq!(next, snapshot);

    let next = reduce(
        &snapshot,
        Transition::UpdateLoggerLevel {
            name: "Missing".to_string(),
            level: LogLevel::Trace,
        },
    );
    assert_eq!(next, snapshot);
}

#[test]
fn test_replace_loggers_returns_exactly_the_new_list() {
    let snapshot = reduce(
        &Snapshot::default(),
        Transition::ReplaceLoggers(vec![logger("Old", LogLevel::Info, Vec::new())]),
    );

    let replacement = vec![
        logger("Zeta", LogLevel::Error, Vec::new()),
        logger("Alpha", LogLevel::Debug, Vec::new()),
    ];
    let next = reduce(&snapshot, Transition::ReplaceLoggers(replacement.clone()));
    assert_eq!(*next.loggers, replacement);

    let empty = reduce(&next, Transition::ReplaceLoggers(Vec::new()));
    assert!(empty.loggers.is_empty());
}

#[test]
fn test_failure_behaviour_scenario() {
    let snapshot = snapshot_with(vec![module("A")]);

    let next = reduce(
        &snapshot,
        Transition::UpdateModuleFailureBehaviour {
            name: "A".to_string(),
            value: FailureBehaviour::Reincarnate,
        },
    );

    let updated = next.module("A").unwrap();
    assert_eq!(updated.name, "A");
    assert_eq!(updated.start_behaviour, ModuleStartBehaviour::Auto);
    assert_eq!(updated.failure_behaviour, FailureBehaviour::Reincarnate);
    assert!(updated.notifications.is_empty());
}

#[test]
fn test_replace_modules_keeps_one_entry_per_name() {
    let mut newer = module("A");
    newer.health_state = ModuleHealthState::Failure;

    let snapshot = snapshot_with(vec![module("A"), module("B"), newer]);

    let names: Vec<&str> = snapshot.modules.iter().map(|module| module.name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
    assert_eq!(snapshot.module("A").unwrap().health_state, ModuleHealthState::Failure);
}

#[test]
fn test_logger_level_update_reaches_children() {
    let snapshot = reduce(
        &Snapshot::default(),
        Transition::ReplaceLoggers(vec![logger(
            "Host",
            LogLevel::Info,
            vec![logger("Host.Http", LogLevel::Info, Vec::new())],
        )]),
    );

    let next = reduce(
        &snapshot,
        Transition::UpdateLoggerLevel {
            name: "Host.Http".to_string(),
            level: LogLevel::Trace,
        },
    );

    assert_eq!(next.logger("Host.Http").unwrap().active_level, LogLevel::Trace);
    assert_eq!(next.logger("Host").unwrap().active_level, LogLevel::Info);
    assert_eq!(snapshot.logger("Host.Http").unwrap().active_level, LogLevel::Info);
}

#[test]
fn test_set_endpoint_keeps_data() {
    let snapshot = snapshot_with(vec![module("A")]);
    let next = reduce(&snapshot, Transition::SetEndpoint("http://other.test/".to_string()));

    assert_eq!(next.endpoint, "http://other.test/");
    assert!(Arc::ptr_eq(&snapshot.modules, &next.modules));
}

#[test]
fn test_dependencies_resolve_against_snapshot() {
    let mut orders = module("Orders");
    orders.dependencies = vec!["Database".to_string(), "Ghost".to_string()];
    let mut database = module("Database");
    database.health_state = ModuleHealthState::Stopped;
    let snapshot = snapshot_with(vec![orders, database]);

    let orders = snapshot.module("Orders").unwrap();
    let resolved = snapshot.dependencies_of(orders);
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0].name, "Database");
    assert_eq!(resolved[0].module.unwrap().health_state, ModuleHealthState::Stopped);
    assert_eq!(resolved[1].name, "Ghost");
    assert!(resolved[1].module.is_none());
}
