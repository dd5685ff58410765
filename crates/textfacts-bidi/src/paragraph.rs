//! Paragraph embedding level (P2, P3) and the FSI direction probe (X5c).

use textfacts_props::is_isolate_initiator;
use unicode_bidi::BidiClass::{self, *};

use crate::isolate::IsolateMatches;
use crate::level::Level;
use crate::options::ParagraphDirection;

/// Paragraph level: forced, or from the first strong class outside isolates.
pub fn paragraph_level(
    classes: &[BidiClass],
    matches: &IsolateMatches,
    direction: ParagraphDirection,
) -> Level {
    match direction {
        ParagraphDirection::Ltr => 0,
        ParagraphDirection::Rtl => 1,
        ParagraphDirection::Auto => match first_strong_outside_isolates(classes, matches) {
            Some(R) => 1,
            _ => 0,
        },
    }
}

fn first_strong_outside_isolates(classes: &[BidiClass], matches: &IsolateMatches) -> Option<BidiClass> {
    let mut i = 0;
    while i < classes.len() {
        match classes[i] {
            L => return Some(L),
            R | AL => return Some(R),
            c if is_isolate_initiator(c) => match matches.matching_pdi(i) {
                Some(end) => i = end,
                // An unterminated isolate runs to the end of the paragraph.
                None => return None,
            },
            _ => {}
        }
        i += 1;
    }
    None
}

/// Direction of an FSI at `fsi`: first strong class between it and its
/// matching PDI (or the end of text), skipping nested isolates.
/// Returns `L` or `R`; LTR when nothing strong is found.
pub fn fsi_direction(classes: &[BidiClass], fsi: usize) -> BidiClass {
    let mut depth = 0usize;
    for &class in classes.iter().skip(fsi + 1) {
        match class {
            c if is_isolate_initiator(c) => depth += 1,
            PDI => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            L if depth == 0 => return L,
            R | AL if depth == 0 => return R,
            _ => {}
        }
    }
    L
}
