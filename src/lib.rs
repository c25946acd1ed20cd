//! Blueprint is a template materialization engine for folder structures.
//! It models reusable folder/file blueprints as value trees, parses
//! indented text descriptions into them, and realizes them on disk with
//! token substitution and rollback-on-failure semantics.

/// Command-line interface module for the Blueprint application
pub mod cli;

/// Error types and handling for the Blueprint application
pub mod error;

/// Template materialization
/// Realizes a blueprint tree under a destination directory with
/// fail-fast collision handling and total rollback on failure
pub mod materializer;

/// The blueprint tree model
/// `FolderItem` nodes and the `Template` wrapper, plus traversal helpers
pub mod model;

/// Structural parsing of indented text descriptions
/// Turns indentation into nesting and infers file-vs-folder per line
pub mod parser;

/// Template repository port and JSON import/export
pub mod store;

/// Token resolution for names and file contents
/// Substitutes `{{...}}` placeholders at materialization time
pub mod token;
