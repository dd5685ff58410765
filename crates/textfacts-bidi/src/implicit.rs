//! Implicit levels, rules I1 and I2.

use unicode_bidi::BidiClass::{self, *};

use crate::level::{Level, is_rtl};

/// Raise each kept position's level from its resolved type.
///
/// An explicit level of `MAX_DEPTH` can reach `MAX_DEPTH + 1` here.
pub fn resolve_implicit(types: &[BidiClass], levels: &mut [Level], removed: &[bool]) {
    for i in 0..levels.len() {
        if removed[i] {
            continue;
        }
        let level = levels[i];
        levels[i] = match (is_rtl(level), types[i]) {
            (false, R) => level + 1,
            (false, AN | EN) => level + 2,
            (true, L | EN | AN) => level + 1,
            _ => level,
        };
    }
}
