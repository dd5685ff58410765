//! Embedding levels.

use unicode_bidi::BidiClass;

pub type Level = u8;

/// Deepest explicit embedding level (BD2).
pub const MAX_DEPTH: Level = 125;

/// Level recorded for positions deleted by rule X9.
pub const REMOVED: Level = Level::MAX;

pub const fn is_rtl(level: Level) -> bool {
    level & 1 == 1
}

/// Embedding direction of a level as a strong class: even is L, odd is R.
pub const fn direction(level: Level) -> BidiClass {
    if is_rtl(level) { BidiClass::R } else { BidiClass::L }
}

/// Least odd level greater than `level`.
pub const fn next_rtl(level: Level) -> Level {
    if is_rtl(level) { level + 2 } else { level + 1 }
}

/// Least even level greater than `level`.
pub const fn next_ltr(level: Level) -> Level {
    if is_rtl(level) { level + 1 } else { level + 2 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_levels() {
        assert_eq!(next_rtl(0), 1);
        assert_eq!(next_rtl(1), 3);
        assert_eq!(next_ltr(0), 2);
        assert_eq!(next_ltr(1), 2);
        assert_eq!(next_rtl(MAX_DEPTH - 1), MAX_DEPTH);
        assert!(next_ltr(MAX_DEPTH - 1) > MAX_DEPTH);
    }

    #[test]
    fn direction_follows_parity() {
        assert_eq!(direction(0), BidiClass::L);
        assert_eq!(direction(3), BidiClass::R);
    }
}
