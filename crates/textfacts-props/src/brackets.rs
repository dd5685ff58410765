//! Paired-bracket properties (`Bidi_Paired_Bracket`, `Bidi_Paired_Bracket_Type`).
//!
//! Bracket identity is compared modulo canonical equivalence: U+2329/U+232A
//! decompose to U+3008/U+3009 and must pair with them.

use unicode_bidi::data_source::BidiDataSource;
use unicode_bidi::HardcodedBidiData;
use unicode_normalization::char::decompose_canonical;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketType {
    None,
    Open,
    Close,
}

impl BracketType {
    pub const fn as_str(self) -> &'static str {
        match self {
            BracketType::None => "none",
            BracketType::Open => "open",
            BracketType::Close => "close",
        }
    }
}

pub fn bracket_type(c: char) -> BracketType {
    bracket_type_with(&HardcodedBidiData, c)
}

pub fn bracket_type_with<D: BidiDataSource + ?Sized>(data: &D, c: char) -> BracketType {
    match data.bidi_matched_opening_bracket(c) {
        Some(b) if b.is_open => BracketType::Open,
        Some(_) => BracketType::Close,
        None => BracketType::None,
    }
}

/// The `Bidi_Paired_Bracket` partner of `c`, or `None` for non-brackets.
pub fn bracket_pair(c: char) -> Option<char> {
    bracket_pair_with(&HardcodedBidiData, c)
}

pub fn bracket_pair_with<D: BidiDataSource + ?Sized>(data: &D, c: char) -> Option<char> {
    let b = data.bidi_matched_opening_bracket(c)?;
    if !b.is_open {
        return Some(b.opening);
    }

    // The data source only maps closers to openers. Every closer in
    // BidiBrackets.txt lies within [opener - 1, opener + 3].
    let lo = (c as u32).saturating_sub(1);
    (lo..=c as u32 + 3)
        .filter_map(char::from_u32)
        .find(|&cand| {
            data.bidi_matched_opening_bracket(cand)
                .is_some_and(|m| !m.is_open && m.opening == c)
        })
}

/// Matching key for bracket-pair identification: the canonical form of the
/// opening bracket for both halves of a pair.
pub fn bracket_key_with<D: BidiDataSource + ?Sized>(data: &D, c: char) -> Option<(BracketType, char)> {
    let b = data.bidi_matched_opening_bracket(c)?;
    let kind = if b.is_open { BracketType::Open } else { BracketType::Close };
    Some((kind, canonical_singleton(b.opening)))
}

fn canonical_singleton(c: char) -> char {
    let mut out = c;
    let mut count = 0usize;
    decompose_canonical(c, |d| {
        out = d;
        count += 1;
    });
    if count == 1 { out } else { c }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_brackets() {
        assert_eq!(bracket_type('('), BracketType::Open);
        assert_eq!(bracket_type(')'), BracketType::Close);
        assert_eq!(bracket_type('a'), BracketType::None);
        assert_eq!(bracket_pair('('), Some(')'));
        assert_eq!(bracket_pair(']'), Some('['));
        assert_eq!(bracket_pair('{'), Some('}'));
        assert_eq!(bracket_pair('x'), None);
    }

    #[test]
    fn out_of_order_partners() {
        assert_eq!(bracket_pair('\u{298D}'), Some('\u{2990}'));
        assert_eq!(bracket_pair('\u{298F}'), Some('\u{298E}'));
    }

    #[test]
    fn angle_brackets_share_a_key_under_canonical_equivalence() {
        let data = HardcodedBidiData;
        let open_legacy = bracket_key_with(&data, '\u{2329}');
        let close_cjk = bracket_key_with(&data, '\u{3009}');
        assert_eq!(open_legacy, Some((BracketType::Open, '\u{3008}')));
        assert_eq!(close_cjk, Some((BracketType::Close, '\u{3008}')));
    }
}
