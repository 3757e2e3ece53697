//! Tests for the graph model, connection validity rules, and action binding.
mod common;
use common::*;
use pipescript::prelude::*;

fn block_at(id: &str, kind: BlockKind, x: f64) -> Block {
    Block::new(id, kind, Position::new(x, 0.0))
}

#[test]
fn test_connection_legality_is_exhaustive_over_kind_pairs() {
    let kinds = [
        BlockKind::Import,
        BlockKind::Transform,
        BlockKind::Comparison,
        BlockKind::Export,
    ];
    let legal = [
        (BlockKind::Import, BlockKind::Transform),
        (BlockKind::Import, BlockKind::Comparison),
        (BlockKind::Transform, BlockKind::Transform),
        (BlockKind::Transform, BlockKind::Export),
        (BlockKind::Transform, BlockKind::Comparison),
        (BlockKind::Comparison, BlockKind::Export),
    ];

    for source_kind in kinds {
        for target_kind in kinds {
            // Positions always satisfy the left-to-right rule here, so the
            // outcome depends on the kind pair alone.
            let source = block_at("a", source_kind, 0.0);
            let target = block_at("b", target_kind, 100.0);
            let expected = legal.contains(&(source_kind, target_kind));
            assert_eq!(
                is_valid_connection(&source, &target),
                expected,
                "pair ({}, {})",
                source_kind,
                target_kind
            );
        }
    }
}

#[test]
fn test_connection_requires_source_left_of_target() {
    let source = block_at("a", BlockKind::Import, 100.0);
    let target_left = block_at("b", BlockKind::Transform, 50.0);
    let target_same = block_at("c", BlockKind::Transform, 100.0);
    let target_right = block_at("d", BlockKind::Transform, 150.0);

    assert!(!is_valid_connection(&source, &target_left));
    assert!(!is_valid_connection(&source, &target_same));
    assert!(is_valid_connection(&source, &target_right));
}

#[test]
fn test_connect_rejects_illegal_edge_with_reason() {
    let mut project = Project::new();
    project.add_block(block_at("a", BlockKind::Import, 0.0));
    project.add_block(block_at("b", BlockKind::Export, 100.0));

    // import -> export is not a legal pair.
    let result = project.connect(Edge::new("e1", "a", "b"));
    match result {
        Err(GraphError::InvalidConnection {
            source_id,
            target_id,
            ..
        }) => {
            assert_eq!(source_id, "a");
            assert_eq!(target_id, "b");
        }
        other => panic!("expected InvalidConnection, got {:?}", other),
    }
    assert!(project.edges().is_empty(), "rejected edge must not be kept");
}

#[test]
fn test_connect_rejects_unknown_blocks() {
    let mut project = Project::new();
    project.add_block(block_at("a", BlockKind::Import, 0.0));

    let result = project.connect(Edge::new("e1", "a", "ghost"));
    assert!(matches!(result, Err(GraphError::BlockNotFound { block_id }) if block_id == "ghost"));
}

#[test]
fn test_remove_block_cascades_incident_edges() {
    let library = ActionLibrary::new();
    let mut project = create_linear_project(&library);
    assert_eq!(project.edges().len(), 2);

    project.remove_block("upper");

    assert!(project.block("upper").is_none());
    assert!(
        project.edges().is_empty(),
        "both incident edges must be removed"
    );
}

#[test]
fn test_bind_action_rejects_kind_mismatch() {
    let library = ActionLibrary::new();
    let mut project = Project::new();
    project.add_block(block_at("t", BlockKind::Transform, 0.0));

    // An output-kind action onto a transform block must be rejected at bind
    // time, never coerced.
    let write_file = library.get("write-file").expect("built-in exists");
    let result = project.bind_action("t", write_file);
    match result {
        Err(GraphError::ActionKindMismatch {
            block_id,
            action_kind,
            required_kind,
            ..
        }) => {
            assert_eq!(block_id, "t");
            assert_eq!(action_kind, "output");
            assert_eq!(required_kind, "transform");
        }
        other => panic!("expected ActionKindMismatch, got {:?}", other),
    }
    assert!(
        project.block("t").unwrap().action_id.is_none(),
        "failed bind must leave the block unbound"
    );
}

#[test]
fn test_bind_action_seeds_config_from_schema() {
    let library = ActionLibrary::new();
    let mut project = Project::new();
    project.add_block(block_at("t", BlockKind::Transform, 0.0));

    let action = create_user_transform();
    project.bind_action("t", &action).expect("kind matches");

    let block = project.block("t").unwrap();
    assert_eq!(block.action_id.as_deref(), Some("prefix"));
    assert_eq!(block.config.len(), 1);
    assert_eq!(block.config["Prefix"], serde_json::json!(">> "));
}

#[test]
fn test_resolve_config_has_exactly_the_declared_key_set() {
    let action = Action::new("a", ActionKind::Transform, "A", "x => x").with_config(vec![
        ConfigField::new("Text field", ConfigFieldKind::Text),
        ConfigField::new("Number field", ConfigFieldKind::Number),
        ConfigField::new("Bool field", ConfigFieldKind::Boolean),
        {
            let mut f = ConfigField::new("Select field", ConfigFieldKind::Select);
            f.options = vec!["first".to_string(), "second".to_string()];
            f
        },
        ConfigField::new("Json field", ConfigFieldKind::Json),
        ConfigField::new("List field", ConfigFieldKind::List),
        ConfigField::new("Notes", ConfigFieldKind::Markdown),
        ConfigField::new("Mystery", ConfigFieldKind::Other("color".to_string())),
    ]);

    let mut block = Block::new("t", BlockKind::Transform, Position::new(0.0, 0.0));
    block
        .config
        .insert("Text field".to_string(), serde_json::json!("stored"));
    block
        .config
        .insert("Stale key".to_string(), serde_json::json!("dropped"));

    let resolved = resolve_config(&block, &action);

    assert_eq!(resolved.len(), action.config.len());
    assert!(!resolved.contains_key("Stale key"));
    assert_eq!(resolved["Text field"], serde_json::json!("stored"));
    assert_eq!(resolved["Number field"], serde_json::json!(0));
    assert_eq!(resolved["Bool field"], serde_json::json!(false));
    assert_eq!(resolved["Select field"], serde_json::json!("first"));
    assert_eq!(resolved["Json field"], serde_json::json!({}));
    assert_eq!(resolved["List field"], serde_json::json!([]));
    assert_eq!(resolved["Notes"], serde_json::json!(""));
    assert_eq!(resolved["Mystery"], serde_json::Value::Null);
}

#[test]
fn test_resolve_config_select_without_options_defaults_to_empty_string() {
    let action = Action::new("a", ActionKind::Transform, "A", "x => x").with_config(vec![
        ConfigField::new("Choice", ConfigFieldKind::Select),
    ]);
    let block = Block::new("t", BlockKind::Transform, Position::new(0.0, 0.0));

    let resolved = resolve_config(&block, &action);
    assert_eq!(resolved["Choice"], serde_json::json!(""));
}
