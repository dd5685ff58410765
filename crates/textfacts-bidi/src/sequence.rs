//! Level runs (BD7) and isolating run sequences (BD13), with sos/eos (X10).
//!
//! Positions removed by X9 are dropped before runs are formed, so a level run
//! may span removed positions. Sequences live in one flat arena of scalar
//! positions; each sequence owns a range of it.

use std::ops::Range;

use textfacts_props::is_isolate_initiator;
use unicode_bidi::BidiClass;

use crate::isolate::IsolateMatches;
use crate::level::{Level, direction};

/// Level runs over the non-removed positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelRuns {
    /// Non-removed positions in logical order.
    pub kept: Vec<usize>,
    /// Ranges into `kept`, one per run.
    pub runs: Vec<Range<usize>>,
}

impl LevelRuns {
    pub fn positions(&self, run: usize) -> &[usize] {
        &self.kept[self.runs[run].clone()]
    }
}

pub fn level_runs(levels: &[Level], removed: &[bool]) -> LevelRuns {
    let kept: Vec<usize> = (0..levels.len()).filter(|&i| !removed[i]).collect();
    let mut runs = Vec::new();
    let mut start = 0;
    for k in 1..=kept.len() {
        if k == kept.len() || levels[kept[k]] != levels[kept[k - 1]] {
            if start < k {
                runs.push(start..k);
            }
            start = k;
        }
    }
    LevelRuns { kept, runs }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsolatingRunSequence {
    /// Embedding level shared by every position of the sequence.
    pub level: Level,
    /// Start-of-sequence type, `L` or `R`.
    pub sos: BidiClass,
    /// End-of-sequence type, `L` or `R`.
    pub eos: BidiClass,
    range: Range<usize>,
}

impl IsolatingRunSequence {
    /// Embedding direction of the sequence as a strong type.
    pub fn embedding_direction(&self) -> BidiClass {
        direction(self.level)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceArena {
    positions: Vec<usize>,
    sequences: Vec<IsolatingRunSequence>,
}

impl SequenceArena {
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn sequences(&self) -> &[IsolatingRunSequence] {
        &self.sequences
    }

    pub fn positions(&self, seq: &IsolatingRunSequence) -> &[usize] {
        &self.positions[seq.range.clone()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (&IsolatingRunSequence, &[usize])> + '_ {
        self.sequences.iter().map(|s| (s, self.positions(s)))
    }
}

/// Chain level runs across matched isolates into isolating run sequences.
pub fn isolating_run_sequences(
    classes: &[BidiClass],
    levels: &[Level],
    removed: &[bool],
    matches: &IsolateMatches,
    paragraph_level: Level,
) -> SequenceArena {
    let lr = level_runs(levels, removed);

    let mut run_of = vec![usize::MAX; levels.len()];
    let mut kept_index = vec![usize::MAX; levels.len()];
    for (ri, range) in lr.runs.iter().enumerate() {
        for k in range.clone() {
            run_of[lr.kept[k]] = ri;
            kept_index[lr.kept[k]] = k;
        }
    }

    let mut arena = SequenceArena::default();
    let mut visited = vec![false; lr.runs.len()];

    for ri in 0..lr.runs.len() {
        // Runs opened by a matched PDI were appended by their initiator's chain.
        if visited[ri] {
            continue;
        }

        let start = arena.positions.len();
        let mut current = ri;
        loop {
            visited[current] = true;
            let run = lr.positions(current);
            arena.positions.extend_from_slice(run);

            let last = run[run.len() - 1];
            let next = matches.matching_pdi(last).and_then(|pdi| {
                let next = run_of[pdi];
                (next != usize::MAX && !visited[next] && lr.positions(next)[0] == pdi).then_some(next)
            });
            match next {
                Some(next) => current = next,
                None => break,
            }
        }

        let positions = &arena.positions[start..];
        let first = positions[0];
        let last = positions[positions.len() - 1];
        let level = levels[first];

        let prev_level = kept_index[first]
            .checked_sub(1)
            .map(|k| levels[lr.kept[k]])
            .unwrap_or(paragraph_level);
        let next_level = if is_isolate_initiator(classes[last]) {
            paragraph_level
        } else {
            lr.kept
                .get(kept_index[last] + 1)
                .map(|&p| levels[p])
                .unwrap_or(paragraph_level)
        };

        arena.sequences.push(IsolatingRunSequence {
            level,
            sos: direction(level.max(prev_level)),
            eos: direction(levels[last].max(next_level)),
            range: start..arena.positions.len(),
        });
    }

    arena
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explicit::resolve_explicit;
    use crate::isolate::match_isolates;
    use crate::level::REMOVED;
    use BidiClass::*;

    fn sequences(classes: &[BidiClass], para: Level) -> (SequenceArena, Vec<Level>) {
        let matches = match_isolates(classes);
        let mut types = classes.to_vec();
        let mut levels = vec![para; classes.len()];
        let mut removed = vec![false; classes.len()];
        resolve_explicit(classes, para, &mut types, &mut levels, &mut removed);
        let arena = isolating_run_sequences(classes, &levels, &removed, &matches, para);
        (arena, levels)
    }

    #[test]
    fn level_runs_skip_removed_positions() {
        let levels = [0, REMOVED, 0, 1, 1, 0];
        let removed = [false, true, false, false, false, false];
        let lr = level_runs(&levels, &removed);
        assert_eq!(lr.runs.len(), 3);
        assert_eq!(lr.positions(0), &[0, 2]);
        assert_eq!(lr.positions(1), &[3, 4]);
        assert_eq!(lr.positions(2), &[5]);
    }

    #[test]
    fn isolate_joins_outer_runs() {
        // a RLI b PDI c
        let (arena, _) = sequences(&[L, RLI, R, PDI, L], 0);
        assert_eq!(arena.len(), 2);
        let seqs: Vec<&[usize]> = arena.iter().map(|(_, p)| p).collect();
        assert_eq!(seqs[0], &[0, 1, 3, 4]);
        assert_eq!(seqs[1], &[2]);
    }

    #[test]
    fn sos_eos_from_neighbor_levels() {
        // L RLE R PDF L: the inner run at level 1 sits between level-0 runs.
        let (arena, _) = sequences(&[L, RLE, R, PDF, L], 0);
        let inner = &arena.sequences()[1];
        assert_eq!(inner.level, 1);
        assert_eq!(inner.sos, R);
        assert_eq!(inner.eos, R);
        let outer = &arena.sequences()[0];
        assert_eq!(outer.sos, L);
    }

    #[test]
    fn unmatched_initiator_uses_paragraph_level_for_eos() {
        // RLE L LRI: the LRI ends a level-1 sequence and has no PDI.
        let (arena, levels) = sequences(&[RLE, L, LRI, R], 0);
        assert_eq!(levels[2], 1);
        let seq = &arena.sequences()[0];
        assert_eq!(arena.positions(seq), &[1, 2]);
        assert_eq!(seq.eos, R);
        let inner = &arena.sequences()[1];
        assert_eq!(inner.level, 2);
        assert_eq!(inner.sos, L);
        assert_eq!(inner.eos, L);
    }

    #[test]
    fn every_kept_position_in_exactly_one_sequence() {
        let classes = [L, RLI, R, LRI, L, PDI, R, PDI, BN, EN, FSI, AL];
        let (arena, levels) = sequences(&classes, 0);
        let mut seen = vec![0usize; classes.len()];
        for (_, ps) in arena.iter() {
            for &p in ps {
                seen[p] += 1;
            }
        }
        for (i, &count) in seen.iter().enumerate() {
            let expected = usize::from(levels[i] != REMOVED);
            assert_eq!(count, expected, "position {i}");
        }
    }
}
