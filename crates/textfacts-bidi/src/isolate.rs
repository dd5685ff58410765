//! Isolate initiator / PDI matching (BD9).

use textfacts_props::is_isolate_initiator;
use unicode_bidi::BidiClass;

/// Bidirectional map between isolate initiators and their matching PDIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsolateMatches {
    end_of: Vec<Option<usize>>,
    start_of: Vec<Option<usize>>,
}

impl IsolateMatches {
    /// Matching PDI of the initiator at `i`.
    pub fn matching_pdi(&self, i: usize) -> Option<usize> {
        self.end_of.get(i).copied().flatten()
    }

    /// Initiator matched by the PDI at `i`.
    pub fn matching_initiator(&self, i: usize) -> Option<usize> {
        self.start_of.get(i).copied().flatten()
    }
}

/// Pair each PDI with the innermost open isolate initiator before it.
///
/// Depth is unbounded here; overflowing isolates are still matched and the
/// explicit resolver decides whether they take effect.
pub fn match_isolates(classes: &[BidiClass]) -> IsolateMatches {
    let mut end_of = vec![None; classes.len()];
    let mut start_of = vec![None; classes.len()];
    let mut open: Vec<usize> = Vec::new();

    for (i, &class) in classes.iter().enumerate() {
        if is_isolate_initiator(class) {
            open.push(i);
        } else if class == BidiClass::PDI {
            if let Some(start) = open.pop() {
                end_of[start] = Some(i);
                start_of[i] = Some(start);
            }
        }
    }

    IsolateMatches { end_of, start_of }
}
