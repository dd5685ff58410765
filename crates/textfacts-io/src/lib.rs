//! `textfacts-io` is the single supported public entrypoint for the textfacts
//! bidi resolver and its deterministic helpers (report building, canonical JSON,
//! digests, and options parsing).
//!
//! This crate contains no shaping, line breaking or rendering. It focuses on:
//! - stable report types
//! - canonical JSON
//! - hashing
//! - options parsing with actionable diagnostics

// -----------------------------------------------------------------------------
// Public API contract
// -----------------------------------------------------------------------------
//
// Consumers SHOULD import from `textfacts_io::prelude::*`.
// Anything not re-exported via the prelude is considered internal and may change
// without notice.

/// Deterministic JSON canonicalization helpers.
pub mod canonical_json;

/// Hash helpers for canonical JSON and resolution digests.
pub mod hashing;

/// Options JSON parsing with structured errors.
pub mod options_json;

/// Versioned resolution report.
pub mod report;

/// Version constants for report conformance and CI gating.
pub mod version;

// Re-export the resolver surface.
#[doc(hidden)]
pub mod bidi {
    pub use textfacts_bidi::{
        BidiRun,
        BidiTrace,
        CodeUnit,
        CodeUnitSpan,
        InputError,
        Level,
        N0Decision,
        N0Rule,
        ParagraphDirection,
        REMOVED,
        Resolution,
        ResolveOptions,
        ScalarText,
        SequenceTrace,
        has_bidi_controls,
        has_bidi_controls_in,
        resolve,
        resolve_str,
        resolve_text,
        resolve_with_data_source,
    };
}

// Re-export property lookups.
#[doc(hidden)]
pub mod props {
    pub use textfacts_props::{
        BidiClass,
        BracketType,
        bracket_pair,
        bracket_type,
        class_name,
        classify,
        is_bidi_control_code_point,
    };
}

/// Convenience prelude for consumers.
///
/// This is the **only supported** import surface for external users.
pub mod prelude {
    pub use crate::bidi::{
        BidiRun,
        BidiTrace,
        CodeUnit,
        CodeUnitSpan,
        InputError,
        Level,
        ParagraphDirection,
        REMOVED,
        Resolution,
        ResolveOptions,
        ScalarText,
        has_bidi_controls,
        resolve,
        resolve_str,
        resolve_text,
    };
    pub use crate::options_json::{OptionsJsonError, parse_options_json_str};
    pub use crate::props::{BidiClass, class_name, classify};
    pub use crate::report::ResolutionReport;
    pub use crate::{canonical_json, hashing, version};
}
