//! Weak type resolution, rules W1–W7, applied to one isolating run sequence.
//!
//! Each rule is its own pass over the sequence; later rules see the output of
//! earlier ones.

use textfacts_props::is_isolate_control;
use unicode_bidi::BidiClass::{self, *};

use crate::sequence::IsolatingRunSequence;

pub fn resolve_weak(seq: &IsolatingRunSequence, positions: &[usize], types: &mut [BidiClass]) {
    // W1
    let mut prev = seq.sos;
    for &p in positions {
        if types[p] == NSM {
            types[p] = if is_isolate_control(prev) { ON } else { prev };
        }
        prev = types[p];
    }

    // W2
    let mut last_strong = seq.sos;
    for &p in positions {
        match types[p] {
            L | R | AL => last_strong = types[p],
            EN if last_strong == AL => types[p] = AN,
            _ => {}
        }
    }

    // W3
    for &p in positions {
        if types[p] == AL {
            types[p] = R;
        }
    }

    // W4
    for k in 1..positions.len().saturating_sub(1) {
        let before = types[positions[k - 1]];
        let after = types[positions[k + 1]];
        let p = positions[k];
        match types[p] {
            ES if before == EN && after == EN => types[p] = EN,
            CS if before == EN && after == EN => types[p] = EN,
            CS if before == AN && after == AN => types[p] = AN,
            _ => {}
        }
    }

    // W5
    let mut k = 0;
    while k < positions.len() {
        if types[positions[k]] != ET {
            k += 1;
            continue;
        }
        let start = k;
        while k < positions.len() && types[positions[k]] == ET {
            k += 1;
        }
        let touches_en = (start > 0 && types[positions[start - 1]] == EN)
            || (k < positions.len() && types[positions[k]] == EN);
        if touches_en {
            for &p in &positions[start..k] {
                types[p] = EN;
            }
        }
    }

    // W6
    for &p in positions {
        if matches!(types[p], ES | ET | CS) {
            types[p] = ON;
        }
    }

    // W7
    let mut last_strong = seq.sos;
    for &p in positions {
        match types[p] {
            L | R => last_strong = types[p],
            EN if last_strong == L => types[p] = L,
            _ => {}
        }
    }
}
