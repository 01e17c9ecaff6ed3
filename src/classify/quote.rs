// Quotation detector.

const QUOTE_GLYPHS: [char; 3] = ['"', '“', '”'];

/// True if the title contains a straight or curly double quote.
pub fn has_quote(title: &str) -> bool {
    title.contains(QUOTE_GLYPHS)
}
