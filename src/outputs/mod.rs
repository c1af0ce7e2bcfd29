//! Output generation: JSON-LD assembly, file writing, and run reports.
//!
//! # Submodules
//!
//! - [`jsonld`]: Assembles the auto-generator's article / FAQ / organization graph
//! - [`json`]: Renders schemas as indented JSON and writes them to disk
//! - [`checklist`]: Builds and renders the field update checklist

pub mod checklist;
pub mod json;
pub mod jsonld;
