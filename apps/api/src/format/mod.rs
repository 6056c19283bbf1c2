// Text-format conversion engine.
// Implements: line/marker normalization, bullets ↔ paragraph conversion,
// whole-document bulk reformat. All functions here are pure and total.

pub mod convert;
pub mod handlers;
pub mod normalize;
pub mod reformat;

// Re-export the public API consumed by other modules (rewrite, handlers).
pub use convert::{convert, TextFormat};
pub use reformat::reformat_all;
