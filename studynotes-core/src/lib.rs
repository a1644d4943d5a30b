//! Core library for Studynotes — a local-first manager for short course notes.
//!
//! The primary entry point is [`NoteStore`], which owns the in-memory note
//! list and keeps it mirrored in a key-value backing file. All note mutations
//! go through `NoteStore` methods.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    error::{Result, StudynotesError},
    note::Note,
    storage::Storage,
    store::NoteStore,
};
