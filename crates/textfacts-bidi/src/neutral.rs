//! Paired brackets (BD16, N0) and neutral resolution (N1, N2).

use textfacts_props::brackets::bracket_key_with;
use textfacts_props::{class_name, is_neutral_or_isolate, BracketType};
use unicode_bidi::data_source::BidiDataSource;
use unicode_bidi::BidiClass::{self, *};

use crate::level::{Level, direction};
use crate::sequence::IsolatingRunSequence;
use crate::trace::{BracketPairTrace, N0Decision, N0Rule, SequenceTrace};

/// BD16 stack depth. Hitting it abandons pairing for the whole sequence.
pub const MAX_BRACKET_STACK: usize = 63;

/// Strong direction a resolved type contributes to N0 and N1: numbers count as R.
fn strong_direction(class: BidiClass) -> Option<BidiClass> {
    match class {
        L => Some(L),
        R | EN | AN => Some(R),
        _ => None,
    }
}

/// Bracket pairs of a sequence as `(open, close)` indices into `positions`,
/// sorted by the opening bracket.
pub fn identify_bracket_pairs<D: BidiDataSource + ?Sized>(
    data: &D,
    scalars: &[char],
    positions: &[usize],
    types: &[BidiClass],
) -> Vec<(usize, usize)> {
    let mut stack: Vec<(char, usize)> = Vec::with_capacity(MAX_BRACKET_STACK);
    let mut pairs = Vec::new();

    for (k, &p) in positions.iter().enumerate() {
        if types[p] != ON {
            continue;
        }
        let Some((kind, key)) = bracket_key_with(data, scalars[p]) else {
            continue;
        };
        match kind {
            BracketType::Open => {
                if stack.len() == MAX_BRACKET_STACK {
                    tracing::debug!(position = p, "bracket stack overflow; pairs discarded");
                    return Vec::new();
                }
                stack.push((key, k));
            }
            BracketType::Close => {
                if let Some(depth) = stack.iter().rposition(|&(open_key, _)| open_key == key) {
                    pairs.push((stack[depth].1, k));
                    stack.truncate(depth);
                }
            }
            BracketType::None => {}
        }
    }

    pairs.sort_unstable();
    pairs
}

/// N0: give each bracket pair a direction from its content or context.
///
/// `pre_weak` holds the types before W1 so marks that followed a bracket can
/// follow its new direction.
pub fn resolve_brackets<D: BidiDataSource + ?Sized>(
    data: &D,
    scalars: &[char],
    pre_weak: &[BidiClass],
    seq: &IsolatingRunSequence,
    positions: &[usize],
    types: &mut [BidiClass],
    mut trace: Option<&mut SequenceTrace>,
) {
    let pairs = identify_bracket_pairs(data, scalars, positions, types);
    let embedding = seq.embedding_direction();

    for &(open, close) in &pairs {
        let mut found_embedding = false;
        let mut found_opposite = false;
        for &p in &positions[open + 1..close] {
            match strong_direction(types[p]) {
                Some(d) if d == embedding => {
                    found_embedding = true;
                    break;
                }
                Some(_) => found_opposite = true,
                None => {}
            }
        }

        let (rule, resolved) = if found_embedding {
            (N0Rule::Embedding, Some(embedding))
        } else if found_opposite {
            let context = positions[..open]
                .iter()
                .rev()
                .find_map(|&p| strong_direction(types[p]))
                .unwrap_or(seq.sos);
            if context == embedding {
                (N0Rule::EmbeddingContext, Some(embedding))
            } else {
                (N0Rule::OppositeContext, Some(context))
            }
        } else {
            (N0Rule::Unresolved, None)
        };

        if let Some(t) = trace.as_deref_mut() {
            t.bracket_pairs.push(BracketPairTrace {
                open: positions[open],
                close: positions[close],
            });
            t.n0_decisions.push(N0Decision {
                open: positions[open],
                close: positions[close],
                rule,
                resolved: resolved.map(|d| class_name(d).to_string()),
            });
        }

        let Some(dir) = resolved else {
            continue;
        };
        for bracket in [open, close] {
            types[positions[bracket]] = dir;
            for &p in &positions[bracket + 1..] {
                if pre_weak[p] != NSM {
                    break;
                }
                types[p] = dir;
            }
        }
    }
}

/// N1 and N2 over maximal runs of neutrals and isolate controls.
pub fn resolve_neutrals(
    seq: &IsolatingRunSequence,
    positions: &[usize],
    levels: &[Level],
    types: &mut [BidiClass],
) {
    let embedding = seq.embedding_direction();
    let mut k = 0;
    while k < positions.len() {
        if !is_neutral_or_isolate(types[positions[k]]) {
            k += 1;
            continue;
        }
        let start = k;
        while k < positions.len() && is_neutral_or_isolate(types[positions[k]]) {
            k += 1;
        }

        let before = match start {
            0 => seq.sos,
            _ => strong_direction(types[positions[start - 1]]).unwrap_or(embedding),
        };
        let after = if k == positions.len() {
            seq.eos
        } else {
            strong_direction(types[positions[k]]).unwrap_or(embedding)
        };

        for &p in &positions[start..k] {
            types[p] = if before == after { before } else { direction(levels[p]) };
        }
    }
}
