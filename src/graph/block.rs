use crate::action::ActionKind;
use ahash::AHashMap;
use std::fmt;

/// The role of a block in the pipeline graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Import,
    Transform,
    Comparison,
    Export,
}

impl BlockKind {
    /// The action kind a block of this kind must be bound to. The mapping is
    /// fixed; mismatched bindings are rejected, never coerced.
    pub fn required_action_kind(&self) -> ActionKind {
        match self {
            BlockKind::Import => ActionKind::Input,
            BlockKind::Transform => ActionKind::Transform,
            BlockKind::Comparison => ActionKind::Comparison,
            BlockKind::Export => ActionKind::Output,
        }
    }

    /// Parses the wire-format type string (`"import"`, `"export"`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "import" => Some(BlockKind::Import),
            "transform" => Some(BlockKind::Transform),
            "comparison" => Some(BlockKind::Comparison),
            "export" => Some(BlockKind::Export),
            _ => None,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKind::Import => "import",
            BlockKind::Transform => "transform",
            BlockKind::Comparison => "comparison",
            BlockKind::Export => "export",
        };
        write!(f, "{}", name)
    }
}

/// A 2D layout coordinate. Only the x component carries meaning for the
/// compiler (left-to-right flow ordering); y exists solely because the editor
/// stores it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A node in the pipeline graph.
#[derive(Debug, Clone)]
pub struct Block {
    pub id: String,
    pub kind: BlockKind,
    pub name: Option<String>,
    pub position: Position,
    /// Reference into the `ActionLibrary`; a block with no bound action
    /// cannot be scheduled.
    pub action_id: Option<String>,
    /// Stored configuration overrides, keyed by config field label. Only
    /// labels declared by the bound action's schema are meaningful; the
    /// binder drops everything else.
    pub config: AHashMap<String, serde_json::Value>,
    /// Import blocks: path of the source file to read.
    pub file: Option<String>,
    /// Export blocks: destination directory and filename.
    pub output_path: Option<String>,
    pub output_filename: Option<String>,
}

impl Block {
    pub fn new(id: &str, kind: BlockKind, position: Position) -> Self {
        Self {
            id: id.to_string(),
            kind,
            name: None,
            position,
            action_id: None,
            config: AHashMap::new(),
            file: None,
            output_path: None,
            output_filename: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_file(mut self, file: &str) -> Self {
        self.file = Some(file.to_string());
        self
    }

    pub fn with_output(mut self, path: &str, filename: &str) -> Self {
        self.output_path = Some(path.to_string());
        self.output_filename = Some(filename.to_string());
        self
    }
}
