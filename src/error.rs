use thiserror::Error;

/// Structural errors detected while validating, mutating, or scheduling a
/// pipeline graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Block '{block_id}' not found in the project")]
    BlockNotFound { block_id: String },

    #[error("Connection from '{source_id}' to '{target_id}' is not allowed: {reason}")]
    InvalidConnection {
        source_id: String,
        target_id: String,
        reason: String,
    },

    #[error(
        "Action '{action_id}' is of kind '{action_kind}', but block '{block_id}' requires kind '{required_kind}'"
    )]
    ActionKindMismatch {
        block_id: String,
        action_id: String,
        action_kind: String,
        required_kind: String,
    },

    #[error("The graph contains a cycle involving blocks: {}", block_ids.join(", "))]
    CycleDetected { block_ids: Vec<String> },

    #[error("Block '{block_id}' has no action bound to it")]
    UnboundBlock { block_id: String },

    #[error(
        "Comparison block '{block_id}' requires exactly 2 incoming connections, but has {found}"
    )]
    IncompleteComparisonInputs { block_id: String, found: usize },

    #[error("Export block '{block_id}' has no incoming connection and would write nothing")]
    DisconnectedExport { block_id: String },

    #[error("Built-in action '{action_id}' cannot be removed")]
    BuiltInActionImmutable { action_id: String },
}

/// Errors raised by the code generator on top of graph scheduling.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodeGenError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("The pipeline is empty: no export block is reachable from any import block")]
    EmptyPipeline,

    #[error(
        "Block '{block_id}' references action '{action_id}', which does not exist in the library"
    )]
    ActionBindingMissing { block_id: String, action_id: String },

    #[error("Invalid execution options: {0}")]
    InvalidOptions(String),
}

/// Errors that can occur when converting an external project format into the
/// canonical `Project` model.
#[derive(Error, Debug, Clone)]
pub enum ProjectConversionError {
    #[error("Node '{node_id}' has an unknown block type: '{type_name}'")]
    UnknownBlockKind { node_id: String, type_name: String },

    #[error("Invalid project data: {0}")]
    ValidationError(String),
}
