//! Core operations.
//!
//! This module contains the business logic for dtogen commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;
pub mod tree;

pub use bake::{BakeOptions, bake};
pub use check::check;
pub use tree::tree;
