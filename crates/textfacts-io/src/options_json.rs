//! Parsing `ResolveOptions` from JSON with actionable diagnostics.
//!
//! Enum-valued fields are checked by hand first so that a typo like
//! `"paragraphDirection": "rlt"` reports the accepted values instead of
//! serde's generic "unknown variant" text. Those fields accept the same
//! spellings as the CLI flags.

use std::fmt;

use serde::de::Error as _;
use serde_json::Value;
use textfacts_bidi::{CodeUnit, ParagraphDirection, ResolveOptions};

const KNOWN_FIELDS: &[&str] = &["paragraphDirection", "useBracketPairs", "codeUnit", "debug"];

/// A structured error for parsing an options JSON payload.
#[derive(Debug)]
pub enum OptionsJsonError {
    /// The input was not valid JSON.
    InvalidJson(serde_json::Error),
    /// `paragraphDirection` was not one of auto, ltr, rtl.
    UnknownParagraphDirection(String),
    /// `codeUnit` was not one of utf16, utf8.
    UnknownCodeUnit(String),
    /// JSON was valid, but did not match the options shape.
    InvalidOptionsShape(serde_json::Error),
}

impl fmt::Display for OptionsJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsJsonError::InvalidJson(e) => write!(f, "Invalid JSON: {e}"),
            OptionsJsonError::UnknownParagraphDirection(v) => write!(
                f,
                "Unknown paragraphDirection '{v}'. Supported values: auto, ltr, rtl."
            ),
            OptionsJsonError::UnknownCodeUnit(v) => {
                write!(f, "Unknown codeUnit '{v}'. Supported values: utf16, utf8.")
            }
            OptionsJsonError::InvalidOptionsShape(e) => write!(
                f,
                "Invalid options JSON shape: {e}. Known fields: {}.",
                KNOWN_FIELDS.join(", ")
            ),
        }
    }
}

impl std::error::Error for OptionsJsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptionsJsonError::InvalidJson(e) => Some(e),
            OptionsJsonError::InvalidOptionsShape(e) => Some(e),
            OptionsJsonError::UnknownParagraphDirection(_) => None,
            OptionsJsonError::UnknownCodeUnit(_) => None,
        }
    }
}

/// Parse options JSON. Missing fields take their defaults.
pub fn parse_options_json_str(s: &str) -> Result<ResolveOptions, OptionsJsonError> {
    let mut v: Value = serde_json::from_str(s).map_err(OptionsJsonError::InvalidJson)?;
    let obj = v.as_object_mut().ok_or_else(|| {
        OptionsJsonError::InvalidOptionsShape(serde_json::Error::custom("expected a JSON object"))
    })?;

    if let Some(raw) = obj.get("paragraphDirection").and_then(Value::as_str).map(str::to_owned) {
        let dir: ParagraphDirection = raw
            .parse()
            .map_err(|_| OptionsJsonError::UnknownParagraphDirection(raw.clone()))?;
        obj.insert("paragraphDirection".into(), Value::from(dir.as_str()));
    }
    if let Some(raw) = obj.get("codeUnit").and_then(Value::as_str).map(str::to_owned) {
        let unit: CodeUnit = raw
            .parse()
            .map_err(|_| OptionsJsonError::UnknownCodeUnit(raw.clone()))?;
        obj.insert("codeUnit".into(), Value::from(unit.as_str()));
    }

    serde_json::from_value(v).map_err(OptionsJsonError::InvalidOptionsShape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(parse_options_json_str("{}").unwrap(), ResolveOptions::default());
    }

    #[test]
    fn flag_spellings_are_accepted() {
        let o = parse_options_json_str(r#"{"paragraphDirection":"RTL","codeUnit":"UTF-8"}"#).unwrap();
        assert_eq!(o.paragraph_direction, ParagraphDirection::Rtl);
        assert_eq!(o.code_unit, CodeUnit::Utf8);
        assert!(o.use_bracket_pairs);
    }

    #[test]
    fn unknown_direction_names_supported_values() {
        let err = parse_options_json_str(r#"{"paragraphDirection":"rlt"}"#).unwrap_err();
        assert!(matches!(err, OptionsJsonError::UnknownParagraphDirection(ref v) if v == "rlt"));
        assert!(err.to_string().contains("auto, ltr, rtl"));
    }

    #[test]
    fn wrong_types_are_shape_errors() {
        let err = parse_options_json_str(r#"{"debug":"yes"}"#).unwrap_err();
        assert!(matches!(err, OptionsJsonError::InvalidOptionsShape(_)));
        assert!(std::error::Error::source(&err).is_some());

        let err = parse_options_json_str("[1]").unwrap_err();
        assert!(matches!(err, OptionsJsonError::InvalidOptionsShape(_)));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = parse_options_json_str("{").unwrap_err();
        assert!(matches!(err, OptionsJsonError::InvalidJson(_)));
    }
}
