// Agreement rules: one per language family, each a pure function from a
// count to the inflected-form slot of the counted word.
//
// Selecting the wrong branch here is the single largest source of
// correctness bugs in this domain, so every rule is unit-tested in isolation
// against the same exhaustive count table.

use numera_core::context::MorphContext;
use numera_core::forms::FormSlot;

/// An agreement law for scale words and counted nouns.
///
/// Implementations are pure: no hidden state, the same `(count, context)`
/// always selects the same slot.
pub trait MorphologyRule {
    /// Select the inflected form of a word counted by `count`.
    fn select(&self, count: u64, ctx: &MorphContext) -> FormSlot;

    /// Whether numerals take the gender opposite to the counted noun
    /// (Arabic-family polarity).
    fn polarity(&self) -> bool {
        false
    }
}

/// Slavic triad: 1 / 2-4 / everything else, with the 11..19 band always
/// taking the genitive plural.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlavicTriad;

impl MorphologyRule for SlavicTriad {
    fn select(&self, count: u64, _ctx: &MorphContext) -> FormSlot {
        if (11..=19).contains(&(count % 100)) {
            return FormSlot::GenitivePlural;
        }
        match count % 10 {
            1 => FormSlot::Singular,
            2..=4 => FormSlot::PaucalLow,
            _ => FormSlot::GenitivePlural,
        }
    }
}

/// Arabic hexad: singular / dual / paucal 3-10 / accusative singular 11-99,
/// singular again for exact hundreds and thousands, with gender polarity on
/// the numeral itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArabicHexad;

impl MorphologyRule for ArabicHexad {
    fn select(&self, count: u64, _ctx: &MorphContext) -> FormSlot {
        match count {
            1 => FormSlot::Singular,
            2 => FormSlot::Dual,
            3..=10 => FormSlot::PaucalHigh,
            _ if (11..=99).contains(&(count % 100)) => FormSlot::AccusativeSingular,
            _ => FormSlot::Singular,
        }
    }

    fn polarity(&self) -> bool {
        true
    }
}

/// Romance/Germanic invariant: singular for exactly one, the unmarked plural
/// otherwise. Terminal-position agreement (the French "-s" on "cents") is a
/// composition decision, not a form-slot decision, and lives in the composer.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvariantPlural;

impl MorphologyRule for InvariantPlural {
    fn select(&self, count: u64, _ctx: &MorphContext) -> FormSlot {
        if count == 1 {
            FormSlot::Singular
        } else {
            FormSlot::Plain
        }
    }
}

/// Agglutinative suffixing family (Sinhala-like). Form selection is the
/// plain singular/plural split; the family's real agreement work -- the bound
/// combining form of every non-final word -- is applied by the composer
/// through the lexicon's conversion table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Suffixing;

impl MorphologyRule for Suffixing {
    fn select(&self, count: u64, _ctx: &MorphContext) -> FormSlot {
        if count == 1 {
            FormSlot::Singular
        } else {
            FormSlot::Plain
        }
    }
}
