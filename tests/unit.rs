//! Unit tests for core pipescript functionality.
mod common;
use pipescript::prelude::*;

#[test]
fn test_block_kind_action_kind_mapping() {
    assert_eq!(
        BlockKind::Import.required_action_kind(),
        ActionKind::Input
    );
    assert_eq!(
        BlockKind::Transform.required_action_kind(),
        ActionKind::Transform
    );
    assert_eq!(
        BlockKind::Comparison.required_action_kind(),
        ActionKind::Comparison
    );
    assert_eq!(
        BlockKind::Export.required_action_kind(),
        ActionKind::Output
    );
}

#[test]
fn test_block_kind_parse() {
    assert_eq!(BlockKind::parse("import"), Some(BlockKind::Import));
    assert_eq!(BlockKind::parse("export"), Some(BlockKind::Export));
    assert_eq!(BlockKind::parse("Import"), None);
    assert_eq!(BlockKind::parse(""), None);
}

#[test]
fn test_edge_target_slot_parsing() {
    let edge = Edge::new("e", "a", "b").with_handles("output-0", "input-1");
    assert_eq!(edge.target_slot(), Some(1));

    let no_handles = Edge::new("e", "a", "b");
    assert_eq!(no_handles.target_slot(), None);

    let mut named = Edge::new("e", "a", "b");
    named.target_handle = Some("list".to_string());
    assert_eq!(named.target_slot(), None);
}

#[test]
fn test_library_user_action_shadows_built_in() {
    let shadow = Action::new(
        "uppercase",
        ActionKind::Transform,
        "My Uppercase",
        "(record, config) => record.toUpperCase()",
    );
    let library = ActionLibrary::with_actions(vec![shadow]);

    let resolved = library.get("uppercase").expect("resolves");
    assert_eq!(resolved.name, "My Uppercase");
    assert!(!resolved.is_built_in);
    // The built-in is shadowed, not gone.
    assert!(library.builtins().iter().any(|a| a.id == "uppercase"));
}

#[test]
fn test_library_built_ins_are_not_removable() {
    let mut library = ActionLibrary::new();
    match library.remove("uppercase") {
        Err(GraphError::BuiltInActionImmutable { action_id }) => {
            assert_eq!(action_id, "uppercase");
        }
        other => panic!("expected BuiltInActionImmutable, got {:?}", other),
    }
    assert!(library.get("uppercase").is_some());
}

#[test]
fn test_library_add_replaces_existing_user_action() {
    let mut library = ActionLibrary::new();
    library.add(Action::new("mine", ActionKind::Transform, "v1", "x => x"));
    library.add(Action::new("mine", ActionKind::Transform, "v2", "x => x"));

    assert_eq!(library.user_actions().len(), 1);
    assert_eq!(library.get("mine").unwrap().name, "v2");
}

#[test]
fn test_builtin_kinds_cover_every_block_kind() {
    let library = ActionLibrary::new();
    for kind in [
        ActionKind::Input,
        ActionKind::Output,
        ActionKind::Transform,
        ActionKind::Comparison,
    ] {
        assert!(
            library.builtins().iter().any(|a| a.kind == kind),
            "missing built-in for kind {}",
            kind
        );
    }
}

#[test]
fn test_error_display() {
    let err = GraphError::IncompleteComparisonInputs {
        block_id: "judge".to_string(),
        found: 3,
    };
    assert!(err.to_string().contains("judge"));
    assert!(err.to_string().contains('3'));

    let cycle = GraphError::CycleDetected {
        block_ids: vec!["t1".to_string(), "t2".to_string()],
    };
    assert!(cycle.to_string().contains("t1, t2"));

    let missing = CodeGenError::ActionBindingMissing {
        block_id: "upper".to_string(),
        action_id: "ghost".to_string(),
    };
    assert!(missing.to_string().contains("upper"));
    assert!(missing.to_string().contains("ghost"));
}

#[test]
fn test_execution_options_default_and_validation() {
    let options = ExecutionOptions::default();
    assert_eq!(options.processing_mode, ProcessingMode::All);
    assert_eq!(options.max_tokens, -1);
    assert!(options.validate().is_ok());

    let negative = ExecutionOptions {
        max_tokens: -2,
        ..ExecutionOptions::default()
    };
    assert!(negative.validate().is_err());
}
