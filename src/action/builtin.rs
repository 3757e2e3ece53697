//! The built-in action set shipped with every library instance.
//!
//! Built-ins are constructed fresh per `ActionLibrary` and are never mutable
//! or deletable through the library API.

use super::definition::{Action, ActionKind, ConfigField, ConfigFieldKind, InputShape};

pub(super) fn default_actions() -> Vec<Action> {
    vec![
        load_file(),
        write_file(),
        uppercase(),
        llm_prompt(),
        exact_match(),
    ]
}

/// Default input action for import blocks. The import fragment itself reads
/// the file; the config only steers parsing.
fn load_file() -> Action {
    let mut action = Action::new("load-file", ActionKind::Input, "Load File", "");
    action.is_built_in = true;
    action.with_config(vec![
        ConfigField::new("Has header row", ConfigFieldKind::Boolean),
        ConfigField::new("Delimiter", ConfigFieldKind::Text),
    ])
}

/// Default output action for export blocks.
fn write_file() -> Action {
    let mut action = Action::new("write-file", ActionKind::Output, "Write File", "");
    action.is_built_in = true;
    action.with_config(vec![ConfigField::new(
        "Pretty print",
        ConfigFieldKind::Boolean,
    )])
}

/// Per-record transform applied as a plain function.
fn uppercase() -> Action {
    let mut action = Action::new(
        "uppercase",
        ActionKind::Transform,
        "Uppercase",
        "(record, config) => String(record).toUpperCase()",
    );
    action.is_built_in = true;
    action
}

/// Aitomics-style transform: the body is a factory that receives the resolved
/// config and returns the callable the generated script applies to the
/// incoming sequence.
fn llm_prompt() -> Action {
    let code = r#"(config) => async (seq) => {
  const out = [];
  for (const record of seq) {
    const text = typeof record === "string" ? record : JSON.stringify(record);
    out.push(await callModel(`${config["Prompt"]}\n\n${text}`));
  }
  return out;
}"#;
    let mut action = Action::new("llm-prompt", ActionKind::Transform, "LLM Prompt", code);
    action.is_built_in = true;
    action.wrap_in_aitomics = false;
    action.with_config(vec![
        {
            let mut f = ConfigField::new("Prompt", ConfigFieldKind::Markdown);
            f.required = true;
            f
        },
        ConfigField::new("Response schema", ConfigFieldKind::Json),
    ])
}

/// Whole-sequence comparison producing overlap statistics.
fn exact_match() -> Action {
    let code = r#"(list1, list2, config) => {
  const matches = list1.filter((item, i) => i < list2.length && String(item) === String(list2[i]));
  return {
    total: Math.max(list1.length, list2.length),
    matching: matches.length,
    agreement: list1.length === 0 ? 0 : matches.length / Math.max(list1.length, list2.length),
  };
}"#;
    let mut action = Action::new("exact-match", ActionKind::Comparison, "Exact Match", code);
    action.is_built_in = true;
    action.with_input_shape(InputShape::Sequence)
}
