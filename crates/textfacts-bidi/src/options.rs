use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the paragraph embedding level is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphDirection {
    /// First strong character outside isolates (P2/P3), LTR if none.
    #[default]
    Auto,
    Ltr,
    Rtl,
}

impl ParagraphDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            ParagraphDirection::Auto => "auto",
            ParagraphDirection::Ltr => "ltr",
            ParagraphDirection::Rtl => "rtl",
        }
    }
}

impl fmt::Display for ParagraphDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParagraphDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ParagraphDirection::Auto),
            "ltr" => Ok(ParagraphDirection::Ltr),
            "rtl" => Ok(ParagraphDirection::Rtl),
            other => Err(format!(
                "unknown paragraph direction '{other}' (expected auto, ltr or rtl)"
            )),
        }
    }
}

/// Encoding whose code-unit offsets are reported in run and control spans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeUnit {
    #[default]
    Utf16,
    Utf8,
}

impl CodeUnit {
    pub const fn as_str(self) -> &'static str {
        match self {
            CodeUnit::Utf16 => "utf16",
            CodeUnit::Utf8 => "utf8",
        }
    }

    /// Number of code units `c` occupies.
    pub fn len_of(self, c: char) -> usize {
        match self {
            CodeUnit::Utf16 => c.len_utf16(),
            CodeUnit::Utf8 => c.len_utf8(),
        }
    }
}

impl fmt::Display for CodeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "").as_str() {
            "utf16" => Ok(CodeUnit::Utf16),
            "utf8" => Ok(CodeUnit::Utf8),
            other => Err(format!("unknown code unit '{other}' (expected utf16 or utf8)")),
        }
    }
}

/// Resolver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolveOptions {
    pub paragraph_direction: ParagraphDirection,
    /// Run rule N0 (paired-bracket direction inference).
    pub use_bracket_pairs: bool,
    /// Code units used for spans when the input is given as scalar values.
    pub code_unit: CodeUnit,
    /// Record a per-sequence trace of the weak and neutral passes.
    pub debug: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            paragraph_direction: ParagraphDirection::Auto,
            use_bracket_pairs: true,
            code_unit: CodeUnit::Utf16,
            debug: false,
        }
    }
}

impl ResolveOptions {
    pub fn with_direction(mut self, direction: ParagraphDirection) -> Self {
        self.paragraph_direction = direction;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = ResolveOptions::default();
        assert_eq!(o.paragraph_direction, ParagraphDirection::Auto);
        assert!(o.use_bracket_pairs);
        assert_eq!(o.code_unit, CodeUnit::Utf16);
        assert!(!o.debug);
    }

    #[test]
    fn parse_direction() {
        assert_eq!("RTL".parse::<ParagraphDirection>(), Ok(ParagraphDirection::Rtl));
        assert_eq!(" auto ".parse::<ParagraphDirection>(), Ok(ParagraphDirection::Auto));
        assert!("sideways".parse::<ParagraphDirection>().is_err());
    }

    #[test]
    fn parse_code_unit() {
        assert_eq!("UTF-8".parse::<CodeUnit>(), Ok(CodeUnit::Utf8));
        assert_eq!("utf16".parse::<CodeUnit>(), Ok(CodeUnit::Utf16));
        assert!("utf32".parse::<CodeUnit>().is_err());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let o: ResolveOptions = serde_json::from_str(r#"{"paragraphDirection":"rtl"}"#).unwrap();
        assert_eq!(o.paragraph_direction, ParagraphDirection::Rtl);
        assert!(o.use_bracket_pairs);
    }
}
