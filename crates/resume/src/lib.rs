//! Résumé content library.
//!
//! Holds the static résumé data model, the hand-authored builtin record, and
//! the formatters that turn each section into ordered display lines for the
//! gallery panels. Everything is a pure in-memory transform: no I/O, no
//! state, no mutation after construction.

pub mod builtin;
pub mod format;
pub mod record;

// Re-export the record types for convenience.
pub use self::record::{
    EducationEntry, Header, ProjectEntry, ResumeRecord, Skills, TrainingEntry,
};
