use super::types::{UiAction, UiProject};
use crate::action::{Action, ActionKind, ConfigField, ConfigFieldKind, InputShape};
use crate::error::ProjectConversionError;
use crate::graph::{Block, BlockKind, Edge, Position, Project};

/// A trait for custom data models that can be converted into the canonical
/// `Project` graph.
///
/// Implement this on your own persistence structs to feed the compiler from
/// any storage format; `UiProject` covers the editor's native JSON.
pub trait IntoProject {
    /// Consumes the object and converts it into a compilable project graph.
    fn into_project(self) -> Result<Project, ProjectConversionError>;
}

impl IntoProject for UiProject {
    fn into_project(self) -> Result<Project, ProjectConversionError> {
        let mut project = Project::new();

        for ui_block in self.blocks {
            let kind = BlockKind::parse(&ui_block.block_type).ok_or_else(|| {
                ProjectConversionError::UnknownBlockKind {
                    node_id: ui_block.id.clone(),
                    type_name: ui_block.block_type.clone(),
                }
            })?;
            let mut block = Block::new(
                &ui_block.id,
                kind,
                Position::new(ui_block.position.x, ui_block.position.y),
            );
            block.name = ui_block.data.name;
            block.action_id = ui_block.data.action_id;
            block.config = ui_block.data.config.into_iter().collect();
            block.file = ui_block.data.file;
            block.output_path = ui_block.data.output_path;
            block.output_filename = ui_block.data.output_filename;
            project.add_block(block);
        }

        // Persisted edges replay through the same validity rules applied
        // during interactive editing; a stored edge that no longer validates
        // fails conversion instead of being silently dropped.
        for ui_edge in self.edges {
            let mut edge = Edge::new(&ui_edge.id, &ui_edge.source, &ui_edge.target);
            edge.source_handle = ui_edge.source_handle;
            edge.target_handle = ui_edge.target_handle;
            project
                .connect(edge)
                .map_err(|e| ProjectConversionError::ValidationError(e.to_string()))?;
        }

        Ok(project)
    }
}

/// Converts a wire-format action definition into the canonical model.
/// Unknown action kinds fail; unknown config field types degrade to a
/// null-defaulting field rather than rejecting the whole action.
pub fn convert_action(ui: UiAction) -> Result<Action, ProjectConversionError> {
    let kind = ActionKind::parse(&ui.action_type).ok_or_else(|| {
        ProjectConversionError::ValidationError(format!(
            "action '{}' has unknown type '{}'",
            ui.id, ui.action_type
        ))
    })?;

    let config = ui
        .config
        .into_iter()
        .map(|f| ConfigField {
            label: f.label,
            kind: ConfigFieldKind::parse(&f.field_type),
            required: f.required,
            options: f.options,
            default_value: f.default_value,
        })
        .collect();

    let input_shape = match ui.input_shape.as_deref() {
        Some("sequence") => InputShape::Sequence,
        _ => InputShape::Record,
    };

    let name = ui.name.unwrap_or_else(|| ui.id.clone());
    Ok(Action {
        id: ui.id,
        kind,
        name,
        code: ui.code,
        wrap_in_aitomics: ui.wrap_in_aitomics,
        input_shape,
        config,
        is_built_in: ui.is_built_in,
    })
}
