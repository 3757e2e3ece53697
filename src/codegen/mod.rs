//! Code synthesis: walks the scheduled graph and emits one self-contained,
//! executable JavaScript script.
//!
//! Generation is pure and deterministic for identical inputs: config literals
//! follow the declared field order of each action's schema, action
//! declarations follow first use in schedule order, and the schedule itself
//! is stable. The generator only returns text; it performs no I/O and never
//! executes anything.

mod emit;
pub mod options;

pub use options::{ExecutionOptions, ProcessingMode};

use crate::action::{Action, ActionLibrary, InputShape};
use crate::bind::resolve_config;
use crate::error::CodeGenError;
use crate::graph::{Block, BlockKind, Edge, Project};
use crate::scheduler::{self, Schedule};
use ahash::{AHashMap, AHashSet};
use emit::{ScriptBuilder, ident, js_string};
use itertools::Itertools;
use std::collections::VecDeque;

/// The local inference endpoint the emitted runtime talks to.
const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";

/// Compiles the project against the action library into a complete script.
///
/// Any scheduling failure aborts generation and surfaces unchanged. The
/// generator adds only two error categories of its own: `EmptyPipeline` when
/// no export block is reachable from any import block, and
/// `ActionBindingMissing` when a bound action id does not resolve in the
/// library.
pub fn generate(
    project: &Project,
    library: &ActionLibrary,
    options: &ExecutionOptions,
) -> Result<String, CodeGenError> {
    options.validate()?;

    let schedule = scheduler::order(project)?;
    let bindings = resolve_bindings(project, library)?;
    check_reachability(project)?;

    let mut s = ScriptBuilder::new();
    emit_preamble(&mut s, options);
    emit_action_declarations(&mut s, &schedule, &bindings);
    emit_main(&mut s, project, &schedule, &bindings, options);

    Ok(s.finish())
}

struct Binding<'a> {
    action: &'a Action,
    config: AHashMap<String, serde_json::Value>,
}

/// Re-resolves every block's action and effective config. The scheduler has
/// already guaranteed that every block carries an action id; this step
/// guarantees the id actually resolves and the config is complete even if the
/// action's schema grew after the block was bound.
fn resolve_bindings<'a>(
    project: &Project,
    library: &'a ActionLibrary,
) -> Result<AHashMap<String, Binding<'a>>, CodeGenError> {
    let mut bindings = AHashMap::new();
    for block in project.blocks() {
        let Some(action_id) = block.action_id.as_deref() else {
            continue;
        };
        let action = library
            .get(action_id)
            .ok_or_else(|| CodeGenError::ActionBindingMissing {
                block_id: block.id.clone(),
                action_id: action_id.to_string(),
            })?;
        bindings.insert(
            block.id.clone(),
            Binding {
                action,
                config: resolve_config(block, action),
            },
        );
    }
    Ok(bindings)
}

/// Breadth-first walk from every import block; if no export block is reached
/// the pipeline produces nothing and compiling it is an error.
fn check_reachability(project: &Project) -> Result<(), CodeGenError> {
    let mut reachable: AHashSet<&str> = project
        .blocks()
        .iter()
        .filter(|b| b.kind == BlockKind::Import)
        .map(|b| b.id.as_str())
        .collect();
    let mut queue: VecDeque<&str> = reachable.iter().copied().collect();
    while let Some(id) = queue.pop_front() {
        for edge in project.outgoing(id) {
            if reachable.insert(edge.target.as_str()) {
                queue.push_back(edge.target.as_str());
            }
        }
    }

    let export_reached = project
        .blocks()
        .iter()
        .any(|b| b.kind == BlockKind::Export && reachable.contains(b.id.as_str()));
    if export_reached {
        Ok(())
    } else {
        Err(CodeGenError::EmptyPipeline)
    }
}

fn emit_preamble(s: &mut ScriptBuilder, options: &ExecutionOptions) {
    s.line(&format!(
        "// Pipeline script generated by pipescript v{}.",
        env!("CARGO_PKG_VERSION")
    ));
    s.line("// Standalone: requires only Node.js and a running local model endpoint.");
    s.line("import fs from \"node:fs\";");
    s.line("import path from \"node:path\";");
    s.blank();

    s.open("const MODEL_CONFIG = {");
    s.line(&format!("model: {},", js_string(&options.model)));
    s.line(&format!("temperature: {},", options.temperature));
    s.line(&format!("maxTokens: {},", options.max_tokens));
    s.close("};");
    s.line(&format!("const ENDPOINT = {};", js_string(DEFAULT_ENDPOINT)));
    s.blank();

    s.fragment(RUNTIME_HELPERS);
    s.blank();
}

/// The inline runtime every generated script carries: file parsing, file
/// writing, and the single inference call site that reads `MODEL_CONFIG`.
const RUNTIME_HELPERS: &str = r#"function loadInput(file, config = {}) {
  const text = fs.readFileSync(file, "utf8");
  const ext = path.extname(file).toLowerCase();
  if (ext === ".csv" || ext === ".tsv") {
    const delimiter = config["Delimiter"] || (ext === ".tsv" ? "\t" : ",");
    const rows = text.split(/\r?\n/).filter((line) => line.length > 0);
    if (config["Has header row"]) {
      rows.shift();
    }
    return rows.map((line) => {
      const cells = line.split(delimiter);
      return cells.length === 1 ? cells[0] : cells;
    });
  }
  if (ext === ".json") {
    const data = JSON.parse(text);
    return Array.isArray(data) ? data : [data];
  }
  return text.split(/\r?\n/).filter((line) => line.length > 0);
}

function writeOutput(file, value, config = {}) {
  fs.mkdirSync(path.dirname(file), { recursive: true });
  let text;
  if (Array.isArray(value)) {
    text = value
      .map((record) => {
        if (Array.isArray(record)) return record.join(",");
        if (typeof record === "string") return record;
        return JSON.stringify(record);
      })
      .join("\n");
  } else if (typeof value === "string") {
    text = value;
  } else {
    text = JSON.stringify(value, null, config["Pretty print"] === false ? 0 : 2);
  }
  fs.writeFileSync(file, text + "\n");
}

async function callModel(prompt) {
  const body = {
    model: MODEL_CONFIG.model,
    prompt,
    stream: false,
    options: { temperature: MODEL_CONFIG.temperature },
  };
  if (MODEL_CONFIG.maxTokens >= 0) {
    body.options.num_predict = MODEL_CONFIG.maxTokens;
  }
  const res = await fetch(ENDPOINT, {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify(body),
  });
  if (!res.ok) {
    throw new Error(`model call failed: ${res.status} ${res.statusText}`);
  }
  const data = await res.json();
  return data.response;
}"#;

/// Splices each distinct action's authored code once, in order of first use.
/// Bodies are emitted verbatim; the generator never "fixes up" a shape that
/// does not match its declared wrapping mode.
fn emit_action_declarations(
    s: &mut ScriptBuilder,
    schedule: &Schedule,
    bindings: &AHashMap<String, Binding<'_>>,
) {
    let mut declared: AHashSet<&str> = AHashSet::new();
    for block_id in schedule.blocks() {
        let Some(binding) = bindings.get(block_id) else {
            continue;
        };
        let action = binding.action;
        if action.code.trim().is_empty() || !declared.insert(action.id.as_str()) {
            continue;
        }
        s.line(&format!("// action: {}", action.name));
        s.fragment(&format!("const action_{} = {};", ident(&action.id), action.code));
        s.blank();
    }
}

fn emit_main(
    s: &mut ScriptBuilder,
    project: &Project,
    schedule: &Schedule,
    bindings: &AHashMap<String, Binding<'_>>,
    options: &ExecutionOptions,
) {
    s.open("async function main() {");

    // Output variable of each emitted block, keyed by block id. A block whose
    // input variable is missing (upstream skipped or never produced) is
    // itself skipped with a comment instead of emitting a broken reference.
    let mut vars: AHashMap<String, String> = AHashMap::new();

    for block_id in schedule.blocks() {
        let Some(block) = project.block(block_id) else {
            continue;
        };
        let Some(binding) = bindings.get(block_id) else {
            continue;
        };
        match block.kind {
            BlockKind::Import => emit_import(s, block, binding, options, &mut vars),
            BlockKind::Transform => emit_transform(s, project, block, binding, &mut vars),
            BlockKind::Comparison => emit_comparison(s, project, block, binding, &mut vars),
            BlockKind::Export => emit_export(s, project, schedule, block, binding, &vars),
        }
        s.blank();
    }

    s.close("}");
    s.blank();
    s.open("main().catch((err) => {");
    s.line("console.error(err);");
    s.line("process.exit(1);");
    s.close("});");
}

fn block_label(block: &Block, action: &Action) -> String {
    let name = block.name.as_deref().unwrap_or(&action.name);
    format!("// block {}: {} \"{}\"", block.id, block.kind, name)
}

/// Emits `const config_<id> = {...};` when the action declares config fields
/// and returns the literal to reference at the call site. Field order follows
/// the action's declared schema, keeping output deterministic.
fn emit_config(s: &mut ScriptBuilder, block: &Block, binding: &Binding<'_>) -> String {
    if binding.action.config.is_empty() {
        return "{}".to_string();
    }
    let body = binding
        .action
        .config
        .iter()
        .map(|field| {
            let value = binding
                .config
                .get(&field.label)
                .cloned()
                .unwrap_or(serde_json::Value::Null);
            format!("{}: {}", js_string(&field.label), value)
        })
        .join(", ");
    let name = format!("config_{}", ident(&block.id));
    s.line(&format!("const {} = {{ {} }};", name, body));
    name
}

fn emit_import(
    s: &mut ScriptBuilder,
    block: &Block,
    binding: &Binding<'_>,
    options: &ExecutionOptions,
    vars: &mut AHashMap<String, String>,
) {
    s.line(&block_label(block, binding.action));
    let config = emit_config(s, block, binding);
    let var = format!("seq_{}", ident(&block.id));
    let file = block.file.as_deref().unwrap_or_default();
    s.line(&format!(
        "let {} = loadInput({}, {});",
        var,
        js_string(file),
        config
    ));
    if options.processing_mode == ProcessingMode::Custom {
        if let Some(count) = options.custom_count {
            s.line("// record cap applies at load time, before any transform runs");
            s.line(&format!("{} = {}.slice(0, {});", var, var, count));
        }
    }
    vars.insert(block.id.clone(), var);
}

fn emit_transform(
    s: &mut ScriptBuilder,
    project: &Project,
    block: &Block,
    binding: &Binding<'_>,
    vars: &mut AHashMap<String, String>,
) {
    s.line(&block_label(block, binding.action));
    let input = project
        .incoming(&block.id)
        .first()
        .and_then(|e| vars.get(&e.source).cloned());
    let Some(input) = input else {
        s.line(&format!(
            "// skipped: transform {} has no incoming connection",
            block.id
        ));
        return;
    };

    let config = emit_config(s, block, binding);
    let action_var = format!("action_{}", ident(&binding.action.id));
    let var = format!("seq_{}", ident(&block.id));

    if binding.action.wrap_in_aitomics {
        match binding.action.input_shape {
            InputShape::Record => {
                s.line(&format!("const {} = [];", var));
                s.open(&format!("for (const record of {}) {{", input));
                s.line(&format!(
                    "{}.push(await {}(record, {}));",
                    var, action_var, config
                ));
                s.close("}");
            }
            InputShape::Sequence => {
                s.line(&format!(
                    "const {} = await {}({}, {});",
                    var, action_var, input, config
                ));
            }
        }
    } else {
        // Aitomics shape: the authored code is a factory; invoke it with the
        // resolved config plus the injected action name, then apply the
        // returned callable to the whole sequence.
        let apply = format!("apply_{}", ident(&block.id));
        s.line(&format!(
            "const {} = {}({{ ...{}, actionName: {} }});",
            apply,
            action_var,
            config,
            js_string(&binding.action.name)
        ));
        s.line(&format!("const {} = await {}({});", var, apply, input));
    }
    vars.insert(block.id.clone(), var);
}

fn emit_comparison(
    s: &mut ScriptBuilder,
    project: &Project,
    block: &Block,
    binding: &Binding<'_>,
    vars: &mut AHashMap<String, String>,
) {
    s.line(&block_label(block, binding.action));
    let incoming = project.incoming(&block.id);
    let Some((first, second)) = operand_edges(&incoming) else {
        s.line(&format!(
            "// skipped: comparison {} is missing an input",
            block.id
        ));
        return;
    };
    let (Some(list1), Some(list2)) = (vars.get(&first.source), vars.get(&second.source)) else {
        s.line(&format!(
            "// skipped: comparison {} has an unproduced input",
            block.id
        ));
        return;
    };
    let list1 = list1.clone();
    let list2 = list2.clone();

    let config = emit_config(s, block, binding);
    let var = format!("cmp_{}", ident(&block.id));
    s.line(&format!(
        "const {} = await action_{}({}, {}, {});",
        var,
        ident(&binding.action.id),
        list1,
        list2,
        config
    ));
    vars.insert(block.id.clone(), var);
}

/// Assigns the two incoming edges of a comparison to (list1, list2).
///
/// When both edges carry a parseable target-handle slot, the lower slot is
/// list1; otherwise edge insertion order decides. Both criteria are stable
/// across regeneration.
fn operand_edges<'a>(incoming: &[&'a Edge]) -> Option<(&'a Edge, &'a Edge)> {
    let (&first, &second) = incoming.iter().collect_tuple()?;
    match (first.target_slot(), second.target_slot()) {
        (Some(a), Some(b)) if b < a => Some((second, first)),
        _ => Some((first, second)),
    }
}

fn emit_export(
    s: &mut ScriptBuilder,
    project: &Project,
    schedule: &Schedule,
    block: &Block,
    binding: &Binding<'_>,
    vars: &AHashMap<String, String>,
) {
    s.line(&block_label(block, binding.action));
    if schedule.is_disconnected_export(&block.id) {
        s.line(&format!(
            "// skipped: export {} has no incoming connection",
            block.id
        ));
        return;
    }
    let input = project
        .incoming(&block.id)
        .first()
        .and_then(|e| vars.get(&e.source).cloned());
    let Some(input) = input else {
        s.line(&format!(
            "// skipped: export {} has an unproduced input",
            block.id
        ));
        return;
    };

    let config = emit_config(s, block, binding);
    let dir = block.output_path.as_deref().unwrap_or(".");
    let filename = block.output_filename.as_deref().unwrap_or("output.txt");
    s.line(&format!(
        "writeOutput(path.join({}, {}), {}, {});",
        js_string(dir),
        js_string(filename),
        input,
        config
    ));
}
