//! kubectl-edit-secret - edit Kubernetes secrets as plain text.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── edit          # The edit-secret command
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # Optional config.toml
//!     ├── secret        # Secret model and wire format
//!     ├── fields        # Decoded field sets, edit scope
//!     ├── document      # Edit document render/parse
//!     ├── editor        # Editor resolution and launch
//!     ├── session       # Temp file lifecycle around one editor run
//!     ├── change        # Cancel / no-change detection
//!     ├── diff          # Field diff and application
//!     ├── workflow      # Orchestration
//!     └── repository/   # SecretRepository trait
//!         ├── kubectl   # Cluster access through kubectl
//!         └── memory    # In-process store for tests
//! ```
//!
//! # Features
//!
//! - Decoded values in your editor, re-encoded on save
//! - Whole-secret or single-key editing
//! - Minimal writes: only changed fields, in one update
//! - Optimistic concurrency through the resource version

pub mod cli;
pub mod core;
pub mod error;
