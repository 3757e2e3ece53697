//! # Pipescript - Pipeline Graph to Script Compiler
//!
//! **Pipescript** compiles a visually assembled data-processing pipeline — a
//! directed graph of typed blocks (import → transform/compare → export) plus a
//! library of reusable "actions" — into a single, self-contained executable
//! script that runs the pipeline against a local LLM runtime.
//!
//! ## Core Workflow
//!
//! The compiler is format-agnostic. It operates on a canonical in-memory
//! `Project` graph. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your project format (the editor's JSON, or
//!     your own) into Rust structs. `ui::UiProject` covers the native format.
//! 2.  **Convert to the Canonical Model**: Implement the `IntoProject` trait
//!     (already provided for `UiProject`) to obtain a `Project`.
//! 3.  **Bind Actions**: Resolve each block's action against an
//!     `ActionLibrary` (built-ins plus user-defined actions).
//! 4.  **Generate**: Call `codegen::generate` with the project, the library,
//!     and an `ExecutionOptions` record. The result is the full script text;
//!     running it is entirely up to the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pipescript::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let library = ActionLibrary::new();
//!
//!     let mut project = Project::new();
//!     project.add_block(
//!         Block::new("source", BlockKind::Import, Position::new(0.0, 0.0))
//!             .with_file("data.csv"),
//!     );
//!     project.add_block(Block::new(
//!         "upper",
//!         BlockKind::Transform,
//!         Position::new(200.0, 0.0),
//!     ));
//!     project.add_block(
//!         Block::new("sink", BlockKind::Export, Position::new(400.0, 0.0))
//!             .with_output("/tmp", "out.csv"),
//!     );
//!     project.connect(Edge::new("e1", "source", "upper"))?;
//!     project.connect(Edge::new("e2", "upper", "sink"))?;
//!
//!     project.bind_action("source", library.get("load-file").unwrap())?;
//!     project.bind_action("upper", library.get("uppercase").unwrap())?;
//!     project.bind_action("sink", library.get("write-file").unwrap())?;
//!
//!     let script = pipescript::codegen::generate(
//!         &project,
//!         &library,
//!         &ExecutionOptions::default(),
//!     )?;
//!     println!("{}", script);
//!     Ok(())
//! }
//! ```

pub mod action;
pub mod bind;
pub mod codegen;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod scheduler;
pub mod ui;
