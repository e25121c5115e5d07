//! Outline reconstruction and resource rendering for dtogen.
//!
//! This crate turns the flat rows of a definition matrix into a tree of
//! definitions and renders every definition into a named resource through a
//! pluggable [`render::CodeFactory`].
//!
//! # Module Organization
//!
//! - [`outline`] - Tree reconstruction from rows (TreeBuilder, OutlineDisplay)
//! - [`render`] - Tree to resource rendering (CodeFactory, ResourceRenderer)
//! - [`pipeline`] - Phased orchestration with lints, diagnostics and plugins
//! - [`facade`] - One-call entry points wiring rows, outline and renderer
//! - [`generation`] - Laying rendered resources out as files
//! - [`builder`] - Indented text building blocks
//! - [`language`] - Language generator traits and naming rules
//! - [`testing`] - Test utilities (feature-gated)

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
mod error;
pub mod facade;
pub mod generation;
pub mod language;
pub mod outline;
pub mod pipeline;
pub mod render;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{Error, Result};
