//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the pipescript
//! crate so callers can bring the core API into scope with a single import.

// Graph model and connection rules
pub use crate::graph::{Block, BlockKind, Edge, Position, Project, is_valid_connection};

// Actions and config binding
pub use crate::action::{
    Action, ActionKind, ActionLibrary, ConfigField, ConfigFieldKind, InputShape,
};
pub use crate::bind::resolve_config;

// Scheduling and code generation
pub use crate::codegen::{ExecutionOptions, ProcessingMode};
pub use crate::scheduler::{Schedule, order};

// UI wire format and conversions
pub use crate::ui::{IntoProject, UiProject, convert_action};

// Error types
pub use crate::error::{CodeGenError, GraphError, ProjectConversionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
