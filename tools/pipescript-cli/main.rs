use clap::Parser;
use pipescript::prelude::*;
use std::fs;
use std::time::Instant;

/// Compiles a pipeline project into a standalone executable script
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the project JSON file (blocks + edges)
    project_path: String,
    /// Optional path to a user action library JSON file
    actions_path: Option<String>,

    /// Write the generated script here instead of printing it
    #[arg(short, long)]
    out: Option<String>,

    /// Model name embedded into the script
    #[arg(long, default_value = "llama3.2")]
    model: String,

    /// Sampling temperature, within [0, 1]
    #[arg(long, default_value_t = 0.7)]
    temperature: f64,

    /// Maximum tokens per inference call (-1 = unlimited)
    #[arg(long, default_value_t = -1)]
    max_tokens: i64,

    /// Process only the first N records of every import
    #[arg(short, long)]
    limit: Option<u64>,
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let project_json = fs::read_to_string(&cli.project_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read project file '{}': {}",
            &cli.project_path, e
        ))
    });
    let user_actions = match &cli.actions_path {
        Some(path) => {
            let actions_json = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read actions file '{}': {}", path, e))
            });
            let raw: Vec<pipescript::ui::UiAction> = serde_json::from_str(&actions_json)
                .unwrap_or_else(|e| {
                    exit_with_error(&format!("Failed to parse actions JSON: {}", e))
                });
            raw.into_iter()
                .map(|a| {
                    convert_action(a).unwrap_or_else(|e| {
                        exit_with_error(&format!("Invalid action definition: {}", e))
                    })
                })
                .collect()
        }
        None => Vec::new(),
    };
    let load_duration = load_start.elapsed();

    // --- 2. Parsing and Conversion ---
    let ui_project: UiProject = serde_json::from_str(&project_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse project JSON: {}", e)));
    let project = ui_project
        .into_project()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert project: {}", e)));
    let library = ActionLibrary::with_actions(user_actions);

    // --- 3. Compilation ---
    println!(
        "Compiling pipeline ({} blocks, {} edges)...",
        project.blocks().len(),
        project.edges().len()
    );
    let compile_start = Instant::now();
    let options = ExecutionOptions {
        processing_mode: if cli.limit.is_some() {
            ProcessingMode::Custom
        } else {
            ProcessingMode::All
        },
        custom_count: cli.limit,
        model: cli.model.clone(),
        temperature: cli.temperature,
        max_tokens: cli.max_tokens,
    };
    let script = pipescript::codegen::generate(&project, &library, &options)
        .unwrap_or_else(|e| exit_with_error(&format!("Compilation failed: {}", e)));
    let compile_duration = compile_start.elapsed();

    // --- 4. Output ---
    match &cli.out {
        Some(path) => {
            fs::write(path, &script).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write script to '{}': {}", path, e))
            });
            println!("Script written to {}", path);
        }
        None => println!("{}", script),
    }

    let total_duration = total_start.elapsed();
    println!("\n--- Performance Summary ---");
    println!("File Loading:    {:?}", load_duration);
    println!("Compilation:     {:?}", compile_duration);
    println!("---------------------------");
    println!("Total Execution: {:?}", total_duration);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
