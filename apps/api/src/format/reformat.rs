//! Bulk reformat — applies the Format Converter to every experience entry in
//! one pass.
//!
//! Returns a new document value instead of mutating in place. The caller
//! keeps the old value for preview/undo, and concurrent edits can never
//! observe a half-reformatted document.

use crate::format::convert::{convert, TextFormat};
use crate::models::ResumeDocument;

/// Replaces every experience entry's description with its converted form.
///
/// Entry ids and order are preserved; summary, education, skills, and
/// competencies are untouched.
pub fn reformat_all(doc: &ResumeDocument, target: TextFormat) -> ResumeDocument {
    let mut next = doc.clone();
    for entry in &mut next.experience {
        entry.description = convert(&entry.description, target);
    }
    next
}
