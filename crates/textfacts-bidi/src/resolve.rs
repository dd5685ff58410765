//! The resolution pipeline.
//!
//! Passes run in a fixed order over the whole paragraph: classification,
//! isolate matching, paragraph level, X1–X8, run sequences, W1–W7, N0,
//! N1/N2, I1/I2, L1, L2. Each pass finishes on every sequence before the
//! next begins.

use textfacts_props::{classify_with, is_bidi_control_code_point};
use unicode_bidi::data_source::BidiDataSource;
use unicode_bidi::{BidiClass, HardcodedBidiData};

use crate::explicit::resolve_explicit;
use crate::implicit::resolve_implicit;
use crate::isolate::match_isolates;
use crate::neutral::{resolve_brackets, resolve_neutrals};
use crate::options::ResolveOptions;
use crate::paragraph::paragraph_level;
use crate::reorder::{build_runs, reset_whitespace, visual_order};
use crate::resolution::{CodeUnitSpan, Resolution};
use crate::sequence::isolating_run_sequences;
use crate::text::ScalarText;
use crate::trace::{BidiTrace, SequenceTrace, snapshot};
use crate::weak::resolve_weak;

/// Resolve a sequence of scalar values. Spans use `options.code_unit`.
pub fn resolve(scalars: &[char], options: &ResolveOptions) -> Resolution {
    resolve_text(&ScalarText::from_chars(scalars, options.code_unit), options)
}

/// Resolve a string. Spans use `options.code_unit`.
pub fn resolve_str(text: &str, options: &ResolveOptions) -> Resolution {
    resolve_text(&ScalarText::new(text, options.code_unit), options)
}

/// Resolve pre-decoded text; spans use the text's own code units.
pub fn resolve_text(text: &ScalarText, options: &ResolveOptions) -> Resolution {
    resolve_with_data_source(&HardcodedBidiData, text, options)
}

/// Resolve with caller-supplied Unicode property data.
pub fn resolve_with_data_source<D: BidiDataSource + ?Sized>(
    data: &D,
    text: &ScalarText,
    options: &ResolveOptions,
) -> Resolution {
    let scalars = text.scalars();
    let n = scalars.len();

    let classes: Vec<BidiClass> = scalars.iter().map(|&c| classify_with(data, c)).collect();
    let matches = match_isolates(&classes);
    let paragraph_level = paragraph_level(&classes, &matches, options.paragraph_direction);

    let mut types = classes.clone();
    let mut levels = vec![paragraph_level; n];
    let mut removed = vec![false; n];
    resolve_explicit(&classes, paragraph_level, &mut types, &mut levels, &mut removed);

    let arena = isolating_run_sequences(&classes, &levels, &removed, &matches, paragraph_level);
    let pre_weak = types.clone();

    let mut traces: Option<Vec<SequenceTrace>> = options.debug.then(|| {
        arena
            .iter()
            .map(|(seq, ps)| SequenceTrace {
                level: seq.level,
                sos: textfacts_props::class_name(seq.sos).to_string(),
                eos: textfacts_props::class_name(seq.eos).to_string(),
                positions: ps.to_vec(),
                ..SequenceTrace::default()
            })
            .collect()
    });

    for (seq, ps) in arena.iter() {
        resolve_weak(seq, ps, &mut types);
    }
    if let Some(traces) = traces.as_mut() {
        for (t, (_, ps)) in traces.iter_mut().zip(arena.iter()) {
            t.after_w7 = snapshot(ps, &types);
        }
    }

    if options.use_bracket_pairs {
        for (k, (seq, ps)) in arena.iter().enumerate() {
            let trace = traces.as_mut().map(|t| &mut t[k]);
            resolve_brackets(data, scalars, &pre_weak, seq, ps, &mut types, trace);
        }
    }
    if let Some(traces) = traces.as_mut() {
        for (t, (_, ps)) in traces.iter_mut().zip(arena.iter()) {
            t.after_n0 = snapshot(ps, &types);
        }
    }

    for (seq, ps) in arena.iter() {
        resolve_neutrals(seq, ps, &levels, &mut types);
    }
    if let Some(traces) = traces.as_mut() {
        for (t, (_, ps)) in traces.iter_mut().zip(arena.iter()) {
            t.after_n1_n2 = snapshot(ps, &types);
        }
    }

    resolve_implicit(&types, &mut levels, &removed);
    reset_whitespace(&classes, paragraph_level, &mut levels, &removed);

    let visual_order = visual_order(&levels, &removed);
    let runs = build_runs(text, &levels, &removed);
    let bidi_control_spans = control_spans(text);

    tracing::trace!(
        scalars = n,
        sequences = arena.len(),
        paragraph_level,
        runs = runs.len(),
        "bidi resolved"
    );

    Resolution {
        paragraph_level,
        levels,
        runs,
        visual_order,
        has_bidi_controls: !bidi_control_spans.is_empty(),
        bidi_control_spans,
        trace: traces.map(|sequences| BidiTrace { sequences }),
    }
}

fn control_spans(text: &ScalarText) -> Vec<CodeUnitSpan> {
    text.scalars()
        .iter()
        .enumerate()
        .filter(|&(_, &c)| is_bidi_control_code_point(c))
        .map(|(i, _)| CodeUnitSpan {
            start: text.code_unit_offset(i),
            end: text.code_unit_offset(i + 1),
        })
        .collect()
}

/// Classification-only check for bidi controls; does not resolve.
pub fn has_bidi_controls(text: &str) -> bool {
    textfacts_props::controls::has_bidi_controls(text)
}

/// Same as [`has_bidi_controls`] for already-decoded scalar values.
pub fn has_bidi_controls_in(scalars: &[char]) -> bool {
    scalars.iter().copied().any(is_bidi_control_code_point)
}
