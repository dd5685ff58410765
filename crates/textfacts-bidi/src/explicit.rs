//! Explicit levels and directions (X1–X8), with X9 removal marking.

use textfacts_props::is_removed_by_x9;
use unicode_bidi::BidiClass::{self, *};

use crate::level::{Level, MAX_DEPTH, REMOVED, next_ltr, next_rtl};
use crate::paragraph::fsi_direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Status {
    level: Level,
    /// `Some(L)` / `Some(R)` while an override is in effect.
    override_class: Option<BidiClass>,
    isolate: bool,
}

/// Paragraph entry plus one entry per level up to `MAX_DEPTH`.
const STACK_CAPACITY: usize = MAX_DEPTH as usize + 2;

/// Directional status stack (X1). Fixed capacity; the bottom entry is never popped.
struct StatusStack {
    entries: [Status; STACK_CAPACITY],
    len: usize,
}

impl StatusStack {
    fn new(base: Status) -> Self {
        Self { entries: [base; STACK_CAPACITY], len: 1 }
    }

    fn last(&self) -> Status {
        self.entries[self.len - 1]
    }

    fn push(&mut self, status: Status) {
        debug_assert!(self.len < STACK_CAPACITY, "status stack overflow");
        if self.len < STACK_CAPACITY {
            self.entries[self.len] = status;
            self.len += 1;
        }
    }

    fn pop(&mut self) {
        if self.len > 1 {
            self.len -= 1;
        }
    }
}

/// Overflow bookkeeping from X1.
#[derive(Debug, Default)]
struct Counters {
    overflow_isolate: usize,
    overflow_embedding: usize,
    valid_isolate: usize,
}

/// Apply X1–X8 over the whole paragraph.
///
/// `types` must start as a copy of `classes`; FSI entries are rewritten to
/// LRI/RLI and overridden positions to L/R. Positions deleted by X9 get
/// `REMOVED` and `removed[i] = true`.
pub fn resolve_explicit(
    classes: &[BidiClass],
    paragraph_level: Level,
    types: &mut [BidiClass],
    levels: &mut [Level],
    removed: &mut [bool],
) {
    let mut stack = StatusStack::new(Status {
        level: paragraph_level,
        override_class: None,
        isolate: false,
    });
    let mut counters = Counters::default();

    for i in 0..classes.len() {
        let class = classes[i];
        match class {
            RLE | LRE | RLO | LRO => {
                let last = stack.last();
                let level = if matches!(class, RLE | RLO) {
                    next_rtl(last.level)
                } else {
                    next_ltr(last.level)
                };
                if level <= MAX_DEPTH && counters.overflow_isolate == 0 && counters.overflow_embedding == 0 {
                    stack.push(Status {
                        level,
                        override_class: match class {
                            RLO => Some(R),
                            LRO => Some(L),
                            _ => None,
                        },
                        isolate: false,
                    });
                } else if counters.overflow_isolate == 0 {
                    counters.overflow_embedding += 1;
                    tracing::debug!(position = i, depth = counters.overflow_embedding, "embedding overflow");
                }
            }

            RLI | LRI | FSI => {
                let last = stack.last();
                let resolved = if class == FSI {
                    if fsi_direction(classes, i) == R { RLI } else { LRI }
                } else {
                    class
                };
                types[i] = last.override_class.unwrap_or(resolved);
                levels[i] = last.level;

                let level = if resolved == RLI {
                    next_rtl(last.level)
                } else {
                    next_ltr(last.level)
                };
                if level <= MAX_DEPTH && counters.overflow_isolate == 0 && counters.overflow_embedding == 0 {
                    counters.valid_isolate += 1;
                    stack.push(Status { level, override_class: None, isolate: true });
                } else {
                    counters.overflow_isolate += 1;
                    tracing::debug!(position = i, depth = counters.overflow_isolate, "isolate overflow");
                }
            }

            PDI => {
                if counters.overflow_isolate > 0 {
                    counters.overflow_isolate -= 1;
                } else if counters.valid_isolate > 0 {
                    counters.overflow_embedding = 0;
                    while !stack.last().isolate {
                        stack.pop();
                    }
                    stack.pop();
                    counters.valid_isolate -= 1;
                }
                let last = stack.last();
                levels[i] = last.level;
                if let Some(dir) = last.override_class {
                    types[i] = dir;
                }
            }

            PDF => {
                if counters.overflow_isolate > 0 {
                    // Inside an overflowed isolate: no effect.
                } else if counters.overflow_embedding > 0 {
                    counters.overflow_embedding -= 1;
                } else if !stack.last().isolate && stack.len > 1 {
                    stack.pop();
                }
            }

            B => {
                // X8: paragraph separators sit at the paragraph level.
                levels[i] = paragraph_level;
            }

            _ => {
                let last = stack.last();
                levels[i] = last.level;
                if let Some(dir) = last.override_class {
                    if class != BN {
                        types[i] = dir;
                    }
                }
            }
        }

        if is_removed_by_x9(class) {
            levels[i] = REMOVED;
            removed[i] = true;
        }
    }
}
