use serde::{Deserialize, Serialize};
use textfacts_props::class_name;
use unicode_bidi::BidiClass;

use crate::level::Level;

/// Diagnostic record of the weak and neutral passes.
///
/// Nothing in the resolver reads this back; it exists for debugging
/// mismatches against reference implementations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidiTrace {
    pub sequences: Vec<SequenceTrace>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceTrace {
    pub level: Level,
    pub sos: String,
    pub eos: String,
    /// Scalar positions of the sequence, in sequence order.
    pub positions: Vec<usize>,
    pub after_w7: Vec<String>,
    pub after_n0: Vec<String>,
    pub after_n1_n2: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bracket_pairs: Vec<BracketPairTrace>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub n0_decisions: Vec<N0Decision>,
}

/// A bracket pair found by BD16, as scalar positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketPairTrace {
    pub open: usize,
    pub close: usize,
}

/// Which branch of rule N0 settled a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum N0Rule {
    /// N0 b: a strong type matching the embedding direction is inside.
    Embedding,
    /// N0 c1: only the opposite direction inside, and the preceding context agrees.
    OppositeContext,
    /// N0 c2: only the opposite direction inside, but the context is the embedding direction.
    EmbeddingContext,
    /// N0 d: no strong type inside; left for N1/N2.
    Unresolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct N0Decision {
    pub open: usize,
    pub close: usize,
    pub rule: N0Rule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<String>,
}

pub(crate) fn snapshot(positions: &[usize], types: &[BidiClass]) -> Vec<String> {
    positions
        .iter()
        .map(|&p| class_name(types[p]).to_string())
        .collect()
}
