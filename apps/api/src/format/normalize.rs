//! Text normalization — the canonical line-oriented view every conversion
//! starts from.
//!
//! Editors and AI rewrites hand us text with mixed line endings, stray
//! indentation, and pre-existing bullet glyphs. Normalizing first means the
//! converter only ever reasons about `\n`-separated, marker-free lines.

/// Characters treated as bullet markers when cleaning a line.
pub const BULLET_MARKERS: &[char] = &['•', '-', '*'];

/// Canonicalizes line endings (`\r\n` and bare `\r` become `\n`) and trims
/// leading/trailing whitespace from the whole text.
///
/// Pure and total: empty or whitespace-only input yields an empty string.
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}

/// Strips the leading run of whitespace and bullet-marker characters from a
/// single line, then trims remaining whitespace. The interior of the line is
/// never altered.
pub fn clean_line(line: &str) -> String {
    line.trim_start_matches(|c: char| c.is_whitespace() || BULLET_MARKERS.contains(&c))
        .trim()
        .to_string()
}
