use serde::Deserialize;

/// Position as stored by the editor.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct UiPosition {
    pub x: f64,
    pub y: f64,
}

/// Per-node payload carrying everything besides id/type/position.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct UiBlockData {
    pub name: Option<String>,
    #[serde(alias = "actionId")]
    pub action_id: Option<String>,
    #[serde(default)]
    pub config: serde_json::Map<String, serde_json::Value>,
    pub file: Option<String>,
    #[serde(alias = "outputPath")]
    pub output_path: Option<String>,
    #[serde(alias = "outputFilename")]
    pub output_filename: Option<String>,
}

/// A node as stored in the project JSON.
#[derive(Debug, Deserialize, Clone)]
pub struct UiBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: String,
    pub position: UiPosition,
    #[serde(default)]
    pub data: UiBlockData,
}

/// An edge as stored in the project JSON.
#[derive(Debug, Deserialize, Clone)]
pub struct UiEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, alias = "sourceHandle")]
    pub source_handle: Option<String>,
    #[serde(default, alias = "targetHandle")]
    pub target_handle: Option<String>,
}

/// Complete project structure: the unit the editor persists.
#[derive(Debug, Deserialize, Clone)]
pub struct UiProject {
    pub blocks: Vec<UiBlock>,
    pub edges: Vec<UiEdge>,
}

/// A config field declaration as stored in an action definition.
#[derive(Debug, Deserialize, Clone)]
pub struct UiConfigField {
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, alias = "defaultValue")]
    pub default_value: Option<serde_json::Value>,
}

/// An action as stored in the action library JSON.
#[derive(Debug, Deserialize, Clone)]
pub struct UiAction {
    pub id: String,
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: String,
    #[serde(default, alias = "wrapInAitomics")]
    pub wrap_in_aitomics: bool,
    #[serde(default, alias = "inputShape")]
    pub input_shape: Option<String>,
    #[serde(default)]
    pub config: Vec<UiConfigField>,
    #[serde(default, alias = "isBuiltIn")]
    pub is_built_in: bool,
}
