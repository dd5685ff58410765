use proptest::prelude::*;

use textfacts_bidi::{MAX_DEPTH, ParagraphDirection, REMOVED, ResolveOptions, resolve};

const POOL: &[char] = &[
    'a', 'b', 'Z', '\u{05D0}', '\u{05D1}', '\u{0627}', '\u{0628}', '1', '2', '\u{0663}', '+',
    '-', '$', '%', ',', '.', ':', ' ', '\t', '!', '"', '(', ')', '[', ']', '{', '}', '\u{0300}',
    '\u{200B}', '\u{200E}', '\u{200F}', '\u{061C}', '\u{202A}', '\u{202B}', '\u{202C}',
    '\u{202D}', '\u{202E}', '\u{2066}', '\u{2067}', '\u{2068}', '\u{2069}',
];

const FLAT: &[char] = &['a', '1', ' ', '(', ')', ',', '!'];

fn text() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(POOL), 0..64)
}

fn direction() -> impl Strategy<Value = ParagraphDirection> {
    prop_oneof![
        Just(ParagraphDirection::Auto),
        Just(ParagraphDirection::Ltr),
        Just(ParagraphDirection::Rtl),
    ]
}

proptest! {
    #[test]
    fn levels_are_bounded(chars in text(), dir in direction()) {
        let r = resolve(&chars, &ResolveOptions::default().with_direction(dir));
        prop_assert_eq!(r.levels.len(), chars.len());
        prop_assert!(r.paragraph_level <= 1);
        for &l in &r.levels {
            prop_assert!(l == REMOVED || l <= MAX_DEPTH + 1);
        }
    }

    #[test]
    fn visual_order_is_a_permutation_of_kept_positions(chars in text()) {
        let r = resolve(&chars, &ResolveOptions::default());
        let kept: Vec<usize> = (0..chars.len()).filter(|&i| !r.is_removed(i)).collect();
        let mut order = r.visual_order.clone();
        order.sort_unstable();
        prop_assert_eq!(order, kept);
    }

    #[test]
    fn runs_partition_kept_positions(chars in text()) {
        let r = resolve(&chars, &ResolveOptions::default());
        let mut covered = vec![false; chars.len()];
        for run in &r.runs {
            prop_assert!(!run.is_empty());
            for i in run.start_scalar_index..run.end_scalar_index {
                prop_assert!(!covered[i]);
                prop_assert_eq!(r.levels[i], run.level);
                covered[i] = true;
            }
            prop_assert!(run.start_code_unit < run.end_code_unit);
        }
        for (i, c) in covered.iter().enumerate() {
            prop_assert_eq!(*c, !r.is_removed(i));
        }
        for pair in r.runs.windows(2) {
            prop_assert!(pair[0].end_scalar_index <= pair[1].start_scalar_index);
        }
    }

    #[test]
    fn resolution_is_deterministic(chars in text(), dir in direction()) {
        let opts = ResolveOptions { debug: true, ..ResolveOptions::default().with_direction(dir) };
        prop_assert_eq!(resolve(&chars, &opts), resolve(&chars, &opts));
    }

    #[test]
    fn forced_direction_sets_paragraph_level(chars in text()) {
        let ltr = resolve(&chars, &ResolveOptions::default().with_direction(ParagraphDirection::Ltr));
        let rtl = resolve(&chars, &ResolveOptions::default().with_direction(ParagraphDirection::Rtl));
        prop_assert_eq!(ltr.paragraph_level, 0);
        prop_assert_eq!(rtl.paragraph_level, 1);
    }

    #[test]
    fn sequences_cover_each_kept_position_once(chars in text()) {
        let opts = ResolveOptions { debug: true, ..ResolveOptions::default() };
        let r = resolve(&chars, &opts);
        let trace = r.trace.as_ref().unwrap();
        let mut seen = vec![0usize; chars.len()];
        for seq in &trace.sequences {
            prop_assert!(!seq.positions.is_empty());
            prop_assert!(seq.positions.windows(2).all(|w| w[0] < w[1]));
            for &p in &seq.positions {
                seen[p] += 1;
            }
        }
        for (i, n) in seen.iter().enumerate() {
            prop_assert_eq!(*n, usize::from(!r.is_removed(i)));
        }
    }

    #[test]
    fn resolved_bracket_pairs_share_a_direction(chars in text()) {
        let opts = ResolveOptions { debug: true, ..ResolveOptions::default() };
        let r = resolve(&chars, &opts);
        for seq in &r.trace.as_ref().unwrap().sequences {
            let at = |p: usize| seq.positions.iter().position(|&q| q == p).unwrap();
            for d in &seq.n0_decisions {
                prop_assert!(d.open < d.close);
                if let Some(dir) = &d.resolved {
                    prop_assert_eq!(&seq.after_n0[at(d.open)], dir);
                    prop_assert_eq!(&seq.after_n0[at(d.close)], dir);
                }
            }
        }
    }

    #[test]
    fn text_without_rtl_content_is_flat(chars in prop::collection::vec(prop::sample::select(FLAT), 0..40)) {
        let r = resolve(&chars, &ResolveOptions::default());
        prop_assert_eq!(r.paragraph_level, 0);
        prop_assert!(r.is_pure_ltr());
        prop_assert_eq!(r.visual_order, (0..chars.len()).collect::<Vec<_>>());
    }
}
