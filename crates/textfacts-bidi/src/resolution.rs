use serde::{Deserialize, Serialize};

use crate::level::{Level, REMOVED, is_rtl};
use crate::trace::BidiTrace;

/// A maximal span of kept positions sharing one resolved level, in logical order.
///
/// Ranges are half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidiRun {
    pub level: Level,
    pub start_scalar_index: usize,
    pub end_scalar_index: usize,
    pub start_code_unit: usize,
    pub end_code_unit: usize,
}

impl BidiRun {
    pub fn is_rtl(&self) -> bool {
        is_rtl(self.level)
    }

    pub fn len(&self) -> usize {
        self.end_scalar_index - self.start_scalar_index
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Half-open code-unit span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeUnitSpan {
    pub start: usize,
    pub end: usize,
}

/// Output of one bidi resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// 0 (LTR) or 1 (RTL).
    pub paragraph_level: Level,
    /// One level per scalar position; `REMOVED` for positions deleted by X9.
    pub levels: Vec<Level>,
    pub runs: Vec<BidiRun>,
    /// Visual index to scalar index, removed positions omitted.
    pub visual_order: Vec<usize>,
    pub has_bidi_controls: bool,
    pub bidi_control_spans: Vec<CodeUnitSpan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<BidiTrace>,
}

impl Resolution {
    pub fn is_removed(&self, index: usize) -> bool {
        self.levels.get(index).is_some_and(|&l| l == REMOVED)
    }

    /// True when no reordering can happen: LTR paragraph and every kept level 0.
    pub fn is_pure_ltr(&self) -> bool {
        self.paragraph_level == 0 && self.levels.iter().all(|&l| l == 0 || l == REMOVED)
    }

    /// Scalars in visual order. Mirroring (L4) is not applied.
    pub fn reordered_chars(&self, scalars: &[char]) -> Vec<char> {
        self.visual_order
            .iter()
            .filter_map(|&i| scalars.get(i).copied())
            .collect()
    }

    /// `text` in visual order; `text` must be the string that was resolved.
    pub fn reorder_str(&self, text: &str) -> String {
        let scalars: Vec<char> = text.chars().collect();
        self.reordered_chars(&scalars).into_iter().collect()
    }
}
