#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

Unicode property lookups consumed by the textfacts bidi resolver.

Do NOT depend on this crate directly.
Use `textfacts-io` instead.
"#]

pub mod brackets;
pub mod controls;

use unicode_bidi::{BidiDataSource, HardcodedBidiData};

pub use brackets::{bracket_pair, bracket_type, BracketType};
pub use controls::is_bidi_control_code_point;
pub use unicode_bidi::{BidiClass, UNICODE_VERSION};

use BidiClass::*;

/// Raw `Bidi_Class` of a scalar value from the bundled UCD tables.
///
/// Unassigned code points fall back to the UCD default class, so every
/// scalar value classifies.
pub fn classify(c: char) -> BidiClass {
    classify_with(&HardcodedBidiData, c)
}

/// Raw `Bidi_Class` from a caller-supplied data source.
pub fn classify_with<D: BidiDataSource + ?Sized>(data: &D, c: char) -> BidiClass {
    data.bidi_class(c)
}

/// Short UCD alias of a class (`"L"`, `"NSM"`, ...).
pub const fn class_name(class: BidiClass) -> &'static str {
    match class {
        AL => "AL",
        AN => "AN",
        B => "B",
        BN => "BN",
        CS => "CS",
        EN => "EN",
        ES => "ES",
        ET => "ET",
        FSI => "FSI",
        L => "L",
        LRE => "LRE",
        LRI => "LRI",
        LRO => "LRO",
        NSM => "NSM",
        ON => "ON",
        PDF => "PDF",
        PDI => "PDI",
        R => "R",
        RLE => "RLE",
        RLI => "RLI",
        RLO => "RLO",
        S => "S",
        WS => "WS",
    }
}

pub fn is_isolate_initiator(class: BidiClass) -> bool {
    matches!(class, LRI | RLI | FSI)
}

/// Isolate initiators and PDI.
pub fn is_isolate_control(class: BidiClass) -> bool {
    matches!(class, LRI | RLI | FSI | PDI)
}

/// Classes that rule X9 deletes from further processing.
pub fn is_removed_by_x9(class: BidiClass) -> bool {
    matches!(class, LRE | RLE | LRO | RLO | PDF | BN)
}

/// Neutral or isolate formatting character, as grouped by rules N1 and N2.
pub fn is_neutral_or_isolate(class: BidiClass) -> bool {
    matches!(class, B | S | WS | ON | LRI | RLI | FSI | PDI)
}
