//! Core library components.
//!
//! The edit-reconcile logic: decoding a secret's fields, rendering and
//! parsing the edit document, running the editor, and writing back the
//! minimal diff. Nothing here parses arguments or prints to the terminal.

pub mod change;
pub mod config;
pub mod constants;
pub mod diff;
pub mod document;
pub mod editor;
pub mod fields;
pub mod repository;
pub mod secret;
pub mod session;
pub mod workflow;
