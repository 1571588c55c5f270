//! Property-based invariant tests for the conversion pipeline.
//!
//! Verifies structural guarantees across every built-in language:
//!
//! 1. Conversion of any in-range magnitude terminates with a non-empty string
//! 2. Output never contains two consecutive whitespace characters
//! 3. Conversion is deterministic: same input, same output
//! 4. Zero renders as a single literal word
//! 5. Trailing fraction zeros never change the spoken content
//! 6. A negative number is the positive rendering plus a prefix
//! 7. Currency conversion holds the same structural guarantees
//! 8. Year rendering is era-stable: the body without era is a prefix/suffix
//!    of the rendering with era

use numera_lang::handle::NumeraHandle;
use proptest::prelude::*;

/// Magnitude range valid in every built-in scale table (the Sinhala Indian
/// table is the shortest, topping out at crore).
const MAX_COMMON: u64 = 999_999_999;

fn handles() -> Vec<(&'static str, NumeraHandle)> {
    NumeraHandle::language_tags()
        .iter()
        .map(|tag| (*tag, NumeraHandle::for_language(tag).unwrap()))
        .collect()
}

fn no_double_whitespace(text: &str) -> bool {
    !text.contains("  ") && !text.starts_with(' ') && !text.ends_with(' ')
}

proptest! {
    #[test]
    fn cardinal_terminates_non_empty(n in 0..=MAX_COMMON) {
        for (tag, handle) in handles() {
            let text = handle.cardinal(&n.to_string()).unwrap();
            prop_assert!(!text.is_empty(), "{tag}: empty output for {n}");
            prop_assert!(
                no_double_whitespace(&text),
                "{tag}: bad whitespace for {n}: {text:?}"
            );
        }
    }

    #[test]
    fn cardinal_is_deterministic(n in 0..=MAX_COMMON) {
        for (tag, handle) in handles() {
            let a = handle.cardinal(&n.to_string()).unwrap();
            let b = handle.cardinal(&n.to_string()).unwrap();
            prop_assert_eq!(a, b, "{} non-deterministic for {}", tag, n);
        }
    }

    #[test]
    fn trailing_fraction_zeros_are_silent(n in 0..=MAX_COMMON, frac in 1u8..=99) {
        for (tag, handle) in handles() {
            let padded = handle.cardinal(&format!("{n}.{frac}0")).unwrap();
            let plain = handle.cardinal(&format!("{n}.{frac}")).unwrap();
            prop_assert_eq!(&padded, &plain, "{} trim mismatch for {}.{}", tag, n, frac);
        }
    }

    #[test]
    fn negative_is_positive_plus_prefix(n in 1..=MAX_COMMON) {
        for (tag, handle) in handles() {
            let positive = handle.cardinal(&n.to_string()).unwrap();
            let negative = handle.cardinal(&format!("-{n}")).unwrap();
            prop_assert!(
                negative.ends_with(&positive) && negative.len() > positive.len(),
                "{tag}: {negative:?} does not extend {positive:?}"
            );
        }
    }

    #[test]
    fn currency_terminates_non_empty(n in 0..=MAX_COMMON, cents in 0u8..=99) {
        for (tag, handle) in handles() {
            let text = handle.currency(&format!("{n}.{cents:02}")).unwrap();
            prop_assert!(!text.is_empty(), "{tag}: empty currency for {n}.{cents:02}");
            prop_assert!(
                no_double_whitespace(&text),
                "{tag}: bad whitespace for {n}.{cents:02}: {text:?}"
            );
        }
    }

    #[test]
    fn year_is_era_stable(y in 1i64..=9999) {
        for (tag, mut handle) in handles() {
            handle.set_include_era(false);
            let bare = handle.year(y).unwrap();
            handle.set_include_era(true);
            let with_era = handle.year(y).unwrap();
            prop_assert!(
                with_era.contains(&bare),
                "{tag}: era rendering {with_era:?} does not contain {bare:?}"
            );
            prop_assert!(with_era.len() > bare.len(), "{tag}: era token missing for {y}");
        }
    }
}

#[test]
fn zero_is_a_single_word() {
    for (tag, handle) in handles() {
        let text = handle.cardinal("0").unwrap();
        assert!(
            !text.trim().is_empty() && !text.contains(' '),
            "{tag}: zero must be one literal word, got {text:?}"
        );
    }
}
