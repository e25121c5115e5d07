//! Compilation pipeline for resource generation.
//!
//! This module provides a [`Pipeline`] orchestrator that manages the phases
//! from matrix rows to a validated definition forest. The pipeline provides:
//!
//! - Explicit phase boundaries (outline → validate)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Shared state via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use dtogen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(matrix)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//!
//! let generator = JavaGenerator::from_context(ctx);
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
