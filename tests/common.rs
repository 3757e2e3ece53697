//! Common test utilities for building pipeline projects.
use pipescript::prelude::*;

/// Creates a linear pipeline bound to built-in actions:
///
/// `import(data.csv) -> transform(uppercase) -> export(/tmp/out.csv)`
#[allow(dead_code)]
pub fn create_linear_project(library: &ActionLibrary) -> Project {
    let mut project = Project::new();
    project.add_block(
        Block::new("source", BlockKind::Import, Position::new(0.0, 0.0)).with_file("data.csv"),
    );
    project.add_block(Block::new(
        "upper",
        BlockKind::Transform,
        Position::new(200.0, 0.0),
    ));
    project.add_block(
        Block::new("sink", BlockKind::Export, Position::new(400.0, 0.0))
            .with_output("/tmp", "out.csv"),
    );

    project
        .connect(Edge::new("e1", "source", "upper"))
        .expect("import -> transform is legal");
    project
        .connect(Edge::new("e2", "upper", "sink"))
        .expect("transform -> export is legal");

    bind(&mut project, "source", library, "load-file");
    bind(&mut project, "upper", library, "uppercase");
    bind(&mut project, "sink", library, "write-file");
    project
}

/// Creates a two-input comparison pipeline:
///
/// `import(a.csv) + import(b.csv) -> comparison(exact-match) -> export`
#[allow(dead_code)]
pub fn create_comparison_project(library: &ActionLibrary) -> Project {
    let mut project = Project::new();
    project.add_block(
        Block::new("left", BlockKind::Import, Position::new(0.0, 0.0)).with_file("a.csv"),
    );
    project.add_block(
        Block::new("right", BlockKind::Import, Position::new(0.0, 100.0)).with_file("b.csv"),
    );
    project.add_block(Block::new(
        "judge",
        BlockKind::Comparison,
        Position::new(200.0, 50.0),
    ));
    project.add_block(
        Block::new("sink", BlockKind::Export, Position::new(400.0, 50.0))
            .with_output("/tmp", "report.json"),
    );

    project
        .connect(Edge::new("e1", "left", "judge").with_handles("output-0", "input-0"))
        .expect("import -> comparison is legal");
    project
        .connect(Edge::new("e2", "right", "judge").with_handles("output-0", "input-1"))
        .expect("import -> comparison is legal");
    project
        .connect(Edge::new("e3", "judge", "sink"))
        .expect("comparison -> export is legal");

    bind(&mut project, "left", library, "load-file");
    bind(&mut project, "right", library, "load-file");
    bind(&mut project, "judge", library, "exact-match");
    bind(&mut project, "sink", library, "write-file");
    project
}

#[allow(dead_code)]
pub fn bind(project: &mut Project, block_id: &str, library: &ActionLibrary, action_id: &str) {
    let action = library
        .get(action_id)
        .unwrap_or_else(|| panic!("action '{}' should exist", action_id));
    project
        .bind_action(block_id, action)
        .unwrap_or_else(|e| panic!("binding '{}' should succeed: {}", action_id, e));
}

/// A minimal user-defined transform action with one declared config field.
#[allow(dead_code)]
pub fn create_user_transform() -> Action {
    Action::new(
        "prefix",
        ActionKind::Transform,
        "Prefix",
        "(record, config) => `${config[\"Prefix\"]}${record}`",
    )
    .with_config(vec![{
        let mut f = ConfigField::new("Prefix", ConfigFieldKind::Text);
        f.default_value = Some(serde_json::json!(">> "));
        f
    }])
}
