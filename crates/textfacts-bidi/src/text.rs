//! Scalar-value text with a side table back to code-unit offsets.
//!
//! Resolution works per scalar value; surrogate pairs and multi-byte UTF-8
//! sequences collapse to one position. Spans in the result are reported in
//! the code units of the original encoding through this table.

use std::fmt;

use crate::options::CodeUnit;

/// Ill-formed input rejected while decoding to scalar values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Bytes were not well-formed UTF-8; `offset` is the first bad byte.
    InvalidUtf8 { offset: usize },
    /// A UTF-16 surrogate without its partner at code unit `offset`.
    UnpairedSurrogate { offset: usize, unit: u16 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidUtf8 { offset } => {
                write!(f, "invalid UTF-8 at byte offset {offset}")
            }
            InputError::UnpairedSurrogate { offset, unit } => {
                write!(f, "unpaired UTF-16 surrogate 0x{unit:04X} at code unit {offset}")
            }
        }
    }
}

impl std::error::Error for InputError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarText {
    scalars: Vec<char>,
    /// `offsets[i]` is the code-unit offset of scalar `i`; one extra entry
    /// holds the total length.
    offsets: Vec<usize>,
    unit: CodeUnit,
}

impl ScalarText {
    pub fn new(text: &str, unit: CodeUnit) -> Self {
        Self::from_iter_with_unit(text.chars(), unit)
    }

    pub fn from_chars(chars: &[char], unit: CodeUnit) -> Self {
        Self::from_iter_with_unit(chars.iter().copied(), unit)
    }

    /// Decode raw UTF-8; offsets are byte offsets.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self, InputError> {
        let text = std::str::from_utf8(bytes).map_err(|e| InputError::InvalidUtf8 {
            offset: e.valid_up_to(),
        })?;
        Ok(Self::new(text, CodeUnit::Utf8))
    }

    /// Decode UTF-16 code units; offsets are UTF-16 code-unit offsets.
    pub fn from_utf16(units: &[u16]) -> Result<Self, InputError> {
        let mut scalars = Vec::with_capacity(units.len());
        let mut offsets = Vec::with_capacity(units.len() + 1);
        let mut offset = 0usize;
        for decoded in char::decode_utf16(units.iter().copied()) {
            let c = decoded.map_err(|e| InputError::UnpairedSurrogate {
                offset,
                unit: e.unpaired_surrogate(),
            })?;
            scalars.push(c);
            offsets.push(offset);
            offset += c.len_utf16();
        }
        offsets.push(offset);
        Ok(Self { scalars, offsets, unit: CodeUnit::Utf16 })
    }

    fn from_iter_with_unit(chars: impl Iterator<Item = char>, unit: CodeUnit) -> Self {
        let mut scalars = Vec::new();
        let mut offsets = Vec::new();
        let mut offset = 0usize;
        for c in chars {
            scalars.push(c);
            offsets.push(offset);
            offset += unit.len_of(c);
        }
        offsets.push(offset);
        Self { scalars, offsets, unit }
    }

    pub fn scalars(&self) -> &[char] {
        &self.scalars
    }

    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }

    pub fn code_unit(&self) -> CodeUnit {
        self.unit
    }

    /// Code-unit offset of scalar position `index`; `index == len()` gives
    /// the total length.
    pub fn code_unit_offset(&self, index: usize) -> usize {
        self.offsets[index.min(self.scalars.len())]
    }

    /// Total length in code units.
    pub fn code_unit_len(&self) -> usize {
        self.code_unit_offset(self.scalars.len())
    }
}
