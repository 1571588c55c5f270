// Inflected-form slots and form sets for scale words and counted nouns.

/// The closed set of named inflected forms an agreement rule can select.
///
/// Not every language populates every slot; resolution falls back along a
/// fixed chain (see [`FormSet::resolve`]) so a sparse set still yields a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormSlot {
    /// Count 1 (and exact hundreds/thousands in Arabic-family languages).
    Singular,
    /// Count 2 in dual-marking languages.
    Dual,
    /// Counts 2..=4 (Slavic paucal).
    PaucalLow,
    /// Counts 3..=10 (Arabic paucal).
    PaucalHigh,
    /// The general "many" plural of Slavic-family languages.
    GenitivePlural,
    /// Counts with last-two-digits 11..=99 in Arabic-family languages.
    AccusativeSingular,
    /// The unmarked plural of languages without richer number categories.
    Plain,
}

/// A set of inflected forms for one word (a scale word or a currency unit).
///
/// Slots a language does not distinguish stay `None`. Owned strings: scale
/// form sets are built once per language at startup, currency form sets once
/// per [`crate::currency::CurrencyInfo`] construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSet {
    pub singular: String,
    pub dual: Option<String>,
    pub paucal_low: Option<String>,
    pub paucal_high: Option<String>,
    pub genitive_plural: Option<String>,
    pub accusative_singular: Option<String>,
    pub plain: Option<String>,
}

impl FormSet {
    /// A word that never inflects (Chinese scale words, English "thousand"
    /// used as a count noun).
    pub fn invariant(word: &str) -> Self {
        Self {
            singular: word.to_string(),
            ..Self::default()
        }
    }

    /// Singular plus an unmarked plural.
    pub fn plural(singular: &str, plain: &str) -> Self {
        Self {
            singular: singular.to_string(),
            plain: Some(plain.to_string()),
            ..Self::default()
        }
    }

    /// The Slavic triad: singular / paucal (2-4) / genitive plural.
    pub fn triad(singular: &str, paucal: &str, genitive: &str) -> Self {
        Self {
            singular: singular.to_string(),
            paucal_low: Some(paucal.to_string()),
            genitive_plural: Some(genitive.to_string()),
            ..Self::default()
        }
    }

    /// The Arabic pattern: singular / dual / paucal plural (3-10) /
    /// accusative singular (11-99).
    pub fn hexad(singular: &str, dual: &str, paucal: &str, accusative: &str) -> Self {
        Self {
            singular: singular.to_string(),
            dual: Some(dual.to_string()),
            paucal_high: Some(paucal.to_string()),
            accusative_singular: Some(accusative.to_string()),
            ..Self::default()
        }
    }

    /// Look up a slot without fallback.
    pub fn get(&self, slot: FormSlot) -> Option<&str> {
        match slot {
            FormSlot::Singular => Some(self.singular.as_str()),
            FormSlot::Dual => self.dual.as_deref(),
            FormSlot::PaucalLow => self.paucal_low.as_deref(),
            FormSlot::PaucalHigh => self.paucal_high.as_deref(),
            FormSlot::GenitivePlural => self.genitive_plural.as_deref(),
            FormSlot::AccusativeSingular => self.accusative_singular.as_deref(),
            FormSlot::Plain => self.plain.as_deref(),
        }
    }

    /// Resolve a slot to a word.
    ///
    /// An undefined slot is a configuration defect (tests catch it); at
    /// runtime resolution falls back along GenitivePlural -> Plain ->
    /// Singular, which is always populated.
    pub fn resolve(&self, slot: FormSlot) -> &str {
        if let Some(word) = self.get(slot) {
            return word;
        }
        self.genitive_plural
            .as_deref()
            .or(self.plain.as_deref())
            .unwrap_or(self.singular.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_always_resolves_to_singular() {
        let f = FormSet::invariant("mille");
        for slot in [
            FormSlot::Singular,
            FormSlot::Dual,
            FormSlot::PaucalLow,
            FormSlot::PaucalHigh,
            FormSlot::GenitivePlural,
            FormSlot::AccusativeSingular,
            FormSlot::Plain,
        ] {
            assert_eq!(f.resolve(slot), "mille");
        }
    }

    #[test]
    fn triad_resolution() {
        let f = FormSet::triad("тысяча", "тысячи", "тысяч");
        assert_eq!(f.resolve(FormSlot::Singular), "тысяча");
        assert_eq!(f.resolve(FormSlot::PaucalLow), "тысячи");
        assert_eq!(f.resolve(FormSlot::GenitivePlural), "тысяч");
        // Undefined slots fall back to the genitive plural first.
        assert_eq!(f.resolve(FormSlot::PaucalHigh), "тысяч");
        assert_eq!(f.resolve(FormSlot::Plain), "тысяч");
    }

    #[test]
    fn plural_fallback_prefers_plain() {
        let f = FormSet::plural("dollar", "dollars");
        assert_eq!(f.resolve(FormSlot::Singular), "dollar");
        assert_eq!(f.resolve(FormSlot::GenitivePlural), "dollars");
        assert_eq!(f.resolve(FormSlot::PaucalLow), "dollars");
    }

    #[test]
    fn hexad_slots() {
        let f = FormSet::hexad("ألف", "ألفان", "آلاف", "ألفًا");
        assert_eq!(f.resolve(FormSlot::Dual), "ألفان");
        assert_eq!(f.resolve(FormSlot::PaucalHigh), "آلاف");
        assert_eq!(f.resolve(FormSlot::AccusativeSingular), "ألفًا");
        // No genitive plural or plain defined: fall through to singular.
        assert_eq!(f.resolve(FormSlot::GenitivePlural), "ألف");
    }

    #[test]
    fn get_does_not_fall_back() {
        let f = FormSet::invariant("wan");
        assert_eq!(f.get(FormSlot::Plain), None);
        assert_eq!(f.get(FormSlot::Singular), Some("wan"));
    }
}
