//! Library-agnostic behavior for the pagelift interaction enhancer.
//!
//! The browser crate (`pagelift`) wires these pieces to the DOM. Everything
//! here is plain Rust so it can be unit-tested natively: the vocabulary of
//! the partial-page-update library, the visual feedback values applied
//! around a request, and the keyboard shortcut resolution rules.

pub mod feedback;
pub mod shortcuts;
pub mod vocabulary;

pub use vocabulary::SwapVocabulary;

/// Fixed period between auto-refresh activations. Not configurable.
pub const AUTO_REFRESH_INTERVAL_MS: i32 = 30_000;
