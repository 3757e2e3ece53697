//! Config binding: resolving a block's effective configuration against the
//! schema of its bound action.

use crate::action::{Action, ConfigFieldKind};
use crate::graph::Block;
use ahash::AHashMap;
use serde_json::{Value, json};

/// Resolves the effective configuration for `block` under `action`'s schema.
///
/// For every field the action declares: the block's stored value wins when
/// present; otherwise the field's declared `default_value` is used; otherwise
/// a type-appropriate default is synthesized. The result always carries
/// exactly the action's declared label set: extra stored keys are dropped,
/// missing ones are filled.
///
/// Called both when a block is first bound to an action (to seed its config)
/// and immediately before code generation, which guarantees completeness even
/// if the action's schema grew after binding.
pub fn resolve_config(block: &Block, action: &Action) -> AHashMap<String, Value> {
    let mut resolved = AHashMap::with_capacity(action.config.len());
    for field in &action.config {
        let value = block
            .config
            .get(&field.label)
            .cloned()
            .or_else(|| field.default_value.clone())
            .unwrap_or_else(|| default_for(&field.kind, &field.options));
        resolved.insert(field.label.clone(), value);
    }
    resolved
}

fn default_for(kind: &ConfigFieldKind, options: &[String]) -> Value {
    match kind {
        ConfigFieldKind::Text | ConfigFieldKind::Markdown => json!(""),
        ConfigFieldKind::Number => json!(0),
        ConfigFieldKind::Boolean => json!(false),
        ConfigFieldKind::Select => options
            .first()
            .map(|o| json!(o))
            .unwrap_or_else(|| json!("")),
        ConfigFieldKind::Json => json!({}),
        ConfigFieldKind::List => json!([]),
        ConfigFieldKind::Other(_) => Value::Null,
    }
}
