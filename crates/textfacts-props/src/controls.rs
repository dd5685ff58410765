//! Explicit bidi formatting characters (`Bidi_Control=Yes`).

/// ALM, LRM, RLM, the embedding/override controls and the isolate controls.
pub fn is_bidi_control_code_point(c: char) -> bool {
    matches!(
        c,
        '\u{061C}' | '\u{200E}' | '\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}'
    )
}

/// True if any scalar value in `text` is a bidi control.
///
/// This is a classification-only scan; it never runs the resolver.
pub fn has_bidi_controls(text: &str) -> bool {
    text.chars().any(is_bidi_control_code_point)
}
