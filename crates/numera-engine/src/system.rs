// Numbering system descriptors: group radix and the ordered scale table.

use numera_core::context::Gender;
use numera_core::forms::FormSet;

/// What happens to the numeral "one" in front of a scale word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Elision {
    /// Keep the numeral ("one thousand").
    KeepOne,
    /// Drop it entirely ("mille", "දහස").
    DropOne,
    /// Replace it with an adjectival form ("un million").
    Replace(&'static str),
}

/// One entry of the scale table: the inflected forms of the scale word, the
/// gender the count in front of it takes, and the elision convention.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleEntry {
    pub forms: FormSet,
    pub gender: Gender,
    pub elision: Elision,
}

impl ScaleEntry {
    pub fn new(forms: FormSet) -> Self {
        Self {
            forms,
            gender: Gender::None,
            elision: Elision::KeepOne,
        }
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn elision(mut self, elision: Elision) -> Self {
        self.elision = elision;
        self
    }
}

/// How a magnitude is chunked into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Fixed radix: 1000 (short/long scale) or 10000 (myriad).
    Uniform(u32),
    /// Indian mixed system: one 3-digit group, then 2-digit groups
    /// (thousand 10^3, lakh 10^5, crore 10^7, ...).
    Indian,
}

/// A language's numbering system: grouping plus the ordered scale table.
/// Immutable, constructed once per language at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberingSystem {
    grouping: Grouping,
    /// Scale entries for group indexes 1.. (index 0 is the units group and
    /// carries no scale word).
    scales: Vec<ScaleEntry>,
}

impl NumberingSystem {
    pub fn new(grouping: Grouping, scales: Vec<ScaleEntry>) -> Self {
        Self { grouping, scales }
    }

    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    /// The divisor that splits off the group at the given index.
    pub fn group_radix(&self, index: usize) -> u32 {
        match self.grouping {
            Grouping::Uniform(radix) => radix,
            Grouping::Indian => {
                if index == 0 {
                    1000
                } else {
                    100
                }
            }
        }
    }

    /// The scale entry for a group index above zero.
    pub fn scale(&self, index: usize) -> Option<&ScaleEntry> {
        debug_assert!(index > 0);
        self.scales.get(index - 1)
    }

    /// Number of defined scale entries.
    pub fn scale_count(&self) -> usize {
        self.scales.len()
    }

    /// The decimal exponent of the largest representable magnitude's top
    /// group, for error reporting.
    pub fn max_exponent(&self) -> u32 {
        let mut exp = 0u32;
        for index in 0..=self.scales.len() {
            exp += match self.group_radix(index) {
                10_000 => 4,
                1000 => 3,
                100 => 2,
                other => other.ilog10(),
            };
        }
        exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str) -> ScaleEntry {
        ScaleEntry::new(FormSet::invariant(word))
    }

    #[test]
    fn uniform_radix() {
        let sys = NumberingSystem::new(Grouping::Uniform(1000), vec![entry("thousand")]);
        assert_eq!(sys.group_radix(0), 1000);
        assert_eq!(sys.group_radix(5), 1000);
    }

    #[test]
    fn indian_radix_narrows_after_first_group() {
        let sys = NumberingSystem::new(Grouping::Indian, vec![entry("thousand"), entry("lakh")]);
        assert_eq!(sys.group_radix(0), 1000);
        assert_eq!(sys.group_radix(1), 100);
        assert_eq!(sys.group_radix(2), 100);
    }

    #[test]
    fn scale_lookup_is_one_based() {
        let sys = NumberingSystem::new(
            Grouping::Uniform(1000),
            vec![entry("thousand"), entry("million")],
        );
        assert_eq!(sys.scale(1).unwrap().forms.singular, "thousand");
        assert_eq!(sys.scale(2).unwrap().forms.singular, "million");
        assert!(sys.scale(3).is_none());
    }

    #[test]
    fn max_exponent_uniform() {
        // units group (10^3) + two scale groups of 3 digits each.
        let sys = NumberingSystem::new(
            Grouping::Uniform(1000),
            vec![entry("thousand"), entry("million")],
        );
        assert_eq!(sys.max_exponent(), 9);
    }

    #[test]
    fn max_exponent_indian() {
        // 3 digits + thousand (2) + lakh (2) = 10^7.
        let sys = NumberingSystem::new(Grouping::Indian, vec![entry("thousand"), entry("lakh")]);
        assert_eq!(sys.max_exponent(), 7);
    }

    #[test]
    fn max_exponent_myriad() {
        let sys = NumberingSystem::new(Grouping::Uniform(10_000), vec![entry("万")]);
        assert_eq!(sys.max_exponent(), 8);
    }
}
