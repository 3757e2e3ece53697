use std::fmt;

/// The kind of processing unit an action implements. Must match the kind
/// required by the block it is bound to (see `BlockKind::required_action_kind`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Input,
    Output,
    Transform,
    Comparison,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Input => "input",
            ActionKind::Output => "output",
            ActionKind::Transform => "transform",
            ActionKind::Comparison => "comparison",
        };
        write!(f, "{}", name)
    }
}

impl ActionKind {
    /// Parses the wire-format kind string (`"input"`, `"output"`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "input" => Some(ActionKind::Input),
            "output" => Some(ActionKind::Output),
            "transform" => Some(ActionKind::Transform),
            "comparison" => Some(ActionKind::Comparison),
            _ => None,
        }
    }
}

/// The declared type of a single configuration field.
///
/// Unknown wire values are preserved in `Other` and resolve to a null default
/// rather than failing the whole action definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFieldKind {
    Text,
    Number,
    Boolean,
    Select,
    Json,
    List,
    Markdown,
    Other(String),
}

impl ConfigFieldKind {
    pub fn parse(s: &str) -> Self {
        match s {
            "text" => ConfigFieldKind::Text,
            "number" => ConfigFieldKind::Number,
            "boolean" => ConfigFieldKind::Boolean,
            "select" => ConfigFieldKind::Select,
            "json" => ConfigFieldKind::Json,
            "list" => ConfigFieldKind::List,
            "markdown" => ConfigFieldKind::Markdown,
            other => ConfigFieldKind::Other(other.to_string()),
        }
    }
}

/// A single field in an action's configuration schema.
#[derive(Debug, Clone)]
pub struct ConfigField {
    pub label: String,
    pub kind: ConfigFieldKind,
    pub required: bool,
    /// Choices for `Select` fields; ignored for every other kind.
    pub options: Vec<String>,
    /// An explicitly declared default. Wins over the kind-derived default
    /// when the block has no stored value for this label.
    pub default_value: Option<serde_json::Value>,
}

impl ConfigField {
    pub fn new(label: &str, kind: ConfigFieldKind) -> Self {
        Self {
            label: label.to_string(),
            kind,
            required: false,
            options: Vec::new(),
            default_value: None,
        }
    }
}

/// The declared input shape of a wrapped transform action: invoked once per
/// record, or once over the whole sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputShape {
    #[default]
    Record,
    Sequence,
}

/// A reusable processing unit bindable to compatible blocks.
///
/// The `code` body is opaque user-authored source text; the compiler splices
/// it into the generated script verbatim and never inspects or rewrites it.
/// `wrap_in_aitomics` selects the splicing strategy:
///
/// - `true`: the body is a plain function; the generator wraps the call site,
///   applying it per record (or once, for `InputShape::Sequence`).
/// - `false`: the body evaluates to a callable factory in the aitomics style;
///   the generator invokes the factory with the resolved config (plus an
///   injected `actionName`) and applies the returned callable to the sequence.
#[derive(Debug, Clone)]
pub struct Action {
    pub id: String,
    pub kind: ActionKind,
    pub name: String,
    pub code: String,
    pub wrap_in_aitomics: bool,
    pub input_shape: InputShape,
    /// Ordered configuration schema; order is preserved into generated output.
    pub config: Vec<ConfigField>,
    pub is_built_in: bool,
}

impl Action {
    /// Creates a user-defined action with an empty config schema.
    pub fn new(id: &str, kind: ActionKind, name: &str, code: &str) -> Self {
        Self {
            id: id.to_string(),
            kind,
            name: name.to_string(),
            code: code.to_string(),
            wrap_in_aitomics: true,
            input_shape: InputShape::Record,
            config: Vec::new(),
            is_built_in: false,
        }
    }

    pub fn with_config(mut self, fields: Vec<ConfigField>) -> Self {
        self.config = fields;
        self
    }

    pub fn unwrapped(mut self) -> Self {
        self.wrap_in_aitomics = false;
        self
    }

    pub fn with_input_shape(mut self, shape: InputShape) -> Self {
        self.input_shape = shape;
        self
    }
}
