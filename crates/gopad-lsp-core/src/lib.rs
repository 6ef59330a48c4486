//! Core code intelligence for Go buffers
//!
//! This crate answers completion and hover requests from the text of the
//! cursor line alone, against a fixed catalog of standard library packages.
//! It is shared by the language server and the CLI.
//!
//! # Features
//!
//! - **Registry**: packages, keywords, built-in types and snippets
//! - **Context**: classifies the cursor as `pkg.` member access or general position
//! - **Completion**: candidates for a classified context
//! - **Hover**: documentation for functions, keywords and types
//!
//! # Example
//!
//! ```
//! use gopad_lsp_core::{complete_at, hover, registry};
//!
//! let items = complete_at(registry(), "fmt.", 4);
//! assert!(items.iter().any(|c| c.label == "Println"));
//!
//! if let Some(info) = hover(registry(), "Println") {
//!     println!("{}", info.contents.join("\n"));
//! }
//! ```

pub mod completion;
pub mod context;
pub mod hover;
pub mod registry;
pub mod stdlib;

// Re-export main types for convenience
pub use completion::{complete, complete_at, CompletionCandidate, CompletionKind};
pub use context::{analyze, word_at, CompletionContext, ContextMode};
pub use hover::{hover, hover_at, HoverResult};
pub use registry::{
    registry, PackageEntry, Snippet, SymbolEntry, SymbolKind, SymbolRegistry, GO_REGISTRY,
};
