#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

Unicode Bidirectional Algorithm (UAX #9) resolver for the textfacts project:
embedding levels, runs and visual order for one paragraph of scalar values.

Do NOT depend on this crate directly.
Use `textfacts-io` instead.
"#]

pub mod explicit;
pub mod implicit;
pub mod isolate;
pub mod level;
pub mod neutral;
pub mod options;
pub mod paragraph;
pub mod reorder;
pub mod resolution;
pub mod resolve;
pub mod sequence;
pub mod text;
pub mod trace;
pub mod weak;

pub use level::{Level, MAX_DEPTH, REMOVED};
pub use options::{CodeUnit, ParagraphDirection, ResolveOptions};
pub use resolution::{BidiRun, CodeUnitSpan, Resolution};
pub use resolve::{
    has_bidi_controls,
    has_bidi_controls_in,
    resolve,
    resolve_str,
    resolve_text,
    resolve_with_data_source,
};
pub use text::{InputError, ScalarText};
pub use trace::{BidiTrace, N0Decision, N0Rule, SequenceTrace};
