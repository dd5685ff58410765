//! Line-level rules: whitespace reset (L1), reordering (L2), and run packaging.

use textfacts_props::is_isolate_control;
use unicode_bidi::BidiClass::{self, *};

use crate::level::{Level, is_rtl};
use crate::resolution::BidiRun;
use crate::text::ScalarText;

/// L1 over the original classes. Removed positions are skipped without
/// ending a whitespace sequence.
pub fn reset_whitespace(
    classes: &[BidiClass],
    paragraph_level: Level,
    levels: &mut [Level],
    removed: &[bool],
) {
    for i in 0..classes.len() {
        if matches!(classes[i], B | S) {
            levels[i] = paragraph_level;
            reset_preceding(classes, paragraph_level, levels, removed, i);
        }
    }
    reset_preceding(classes, paragraph_level, levels, removed, classes.len());
}

fn reset_preceding(
    classes: &[BidiClass],
    paragraph_level: Level,
    levels: &mut [Level],
    removed: &[bool],
    end: usize,
) {
    for j in (0..end).rev() {
        if removed[j] {
            continue;
        }
        if classes[j] == WS || is_isolate_control(classes[j]) {
            levels[j] = paragraph_level;
        } else {
            break;
        }
    }
}

/// L2: visual index to scalar index over the kept positions.
pub fn visual_order(levels: &[Level], removed: &[bool]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..levels.len()).filter(|&i| !removed[i]).collect();

    let Some(max) = order.iter().map(|&i| levels[i]).max() else {
        return order;
    };
    let min = order.iter().map(|&i| levels[i]).min().unwrap_or(max);
    let lowest_odd = if is_rtl(min) { min } else { min + 1 };

    for level in (lowest_odd..=max).rev() {
        let mut k = 0;
        while k < order.len() {
            if levels[order[k]] < level {
                k += 1;
                continue;
            }
            let start = k;
            while k < order.len() && levels[order[k]] >= level {
                k += 1;
            }
            order[start..k].reverse();
        }
    }

    order
}

/// Maximal same-level spans of kept positions, in logical order.
pub fn build_runs(text: &ScalarText, levels: &[Level], removed: &[bool]) -> Vec<BidiRun> {
    let mut runs = Vec::new();
    let mut i = 0;
    while i < levels.len() {
        if removed[i] {
            i += 1;
            continue;
        }
        let start = i;
        let level = levels[i];
        while i < levels.len() && !removed[i] && levels[i] == level {
            i += 1;
        }
        runs.push(BidiRun {
            level,
            start_scalar_index: start,
            end_scalar_index: i,
            start_code_unit: text.code_unit_offset(start),
            end_code_unit: text.code_unit_offset(i),
        });
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::REMOVED;
    use crate::options::CodeUnit;

    #[test]
    fn l1_resets_trailing_whitespace_and_separators() {
        let classes = [R, WS, S, R, WS, BN, WS];
        let removed = [false, false, false, false, false, true, false];
        let mut levels = vec![1, 1, 1, 1, 1, REMOVED, 1];
        reset_whitespace(&classes, 0, &mut levels, &removed);
        assert_eq!(levels, vec![1, 0, 0, 1, 0, REMOVED, 0]);
    }

    #[test]
    fn l1_uses_original_classes_for_isolates() {
        let classes = [L, RLI, PDI];
        let mut levels = vec![2, 2, 2];
        reset_whitespace(&classes, 1, &mut levels, &[false; 3]);
        assert_eq!(levels, vec![2, 1, 1]);
    }

    #[test]
    fn l2_reverses_from_highest_level() {
        // car means CAR: levels 0 1 1 1 0
        assert_eq!(visual_order(&[0, 1, 1, 1, 0], &[false; 5]), vec![0, 3, 2, 1, 4]);
        // Nested number inside RTL: 1 1 2 2 1
        assert_eq!(visual_order(&[1, 1, 2, 2, 1], &[false; 5]), vec![4, 2, 3, 1, 0]);
    }

    #[test]
    fn l2_omits_removed_positions() {
        let order = visual_order(&[1, REMOVED, 1], &[false, true, false]);
        assert_eq!(order, vec![2, 0]);
        assert!(visual_order(&[], &[]).is_empty());
    }

    #[test]
    fn runs_split_on_level_and_removed() {
        let text = ScalarText::new("ab\u{1F600}cd", CodeUnit::Utf16);
        let levels = [0, 1, 1, REMOVED, 1];
        let removed = [false, false, false, true, false];
        let runs = build_runs(&text, &levels, &removed);
        assert_eq!(runs.len(), 3);
        assert_eq!((runs[1].start_scalar_index, runs[1].end_scalar_index), (1, 3));
        assert_eq!((runs[1].start_code_unit, runs[1].end_code_unit), (1, 4));
        assert_eq!((runs[2].start_code_unit, runs[2].end_code_unit), (5, 6));
    }
}
