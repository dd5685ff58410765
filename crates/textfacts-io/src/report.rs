//! The versioned JSON report emitted for one resolved paragraph.

use serde::{Deserialize, Serialize};
use textfacts_bidi::{Resolution, ResolveOptions, ScalarText, resolve_text};

use crate::version::{REPORT_V, unicode_version};

/// A `Resolution` plus the options and data version that produced it.
///
/// Serialized with the resolution fields flattened next to `v`,
/// `unicodeVersion` and `options`; see `schemas/resolution.v1.schema.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionReport {
    pub v: u8,
    pub unicode_version: String,
    pub options: ResolveOptions,
    #[serde(flatten)]
    pub resolution: Resolution,
}

impl ResolutionReport {
    pub fn new(options: ResolveOptions, resolution: Resolution) -> Self {
        Self {
            v: REPORT_V,
            unicode_version: unicode_version(),
            options,
            resolution,
        }
    }

    /// Resolve `text` and wrap the result.
    pub fn build(text: &ScalarText, options: &ResolveOptions) -> Self {
        Self::new(*options, resolve_text(text, options))
    }

    /// Resolve a string, with offsets in `options.code_unit`.
    pub fn build_str(text: &str, options: &ResolveOptions) -> Self {
        Self::build(&ScalarText::new(text, options.code_unit), options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_flattens_resolution_fields() {
        let report = ResolutionReport::build_str("a\u{05D0}", &ResolveOptions::default());
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["v"], 1);
        assert_eq!(v["paragraphLevel"], 0);
        assert_eq!(v["levels"], serde_json::json!([0, 1]));
        assert_eq!(v["options"]["paragraphDirection"], "auto");
        assert!(v.get("trace").is_none());

        let back: ResolutionReport = serde_json::from_value(v).unwrap();
        assert_eq!(back, report);
    }
}
