// Per-language constant vocabulary and composition descriptors.
//
// A LexiconTable is pure data: digit, teen, tens and hundreds words, the
// tokens used to link them, and a handful of closed descriptors telling the
// renderer and composer which composition conventions the language follows.
// Instances are built once per language at startup and never mutated.

use hashbrown::{HashMap, HashSet};
use numera_core::context::Gender;

/// How the hundreds place of a Western-style group is expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hundreds {
    /// Multiplier word + a single "hundred" lexeme ("two hundred").
    /// `elide_one` drops the multiplier for 100 ("cent" vs "one hundred").
    Multiplied {
        word: &'static str,
        elide_one: bool,
    },
    /// One fused lexeme per hundreds digit ("двести", "پنج صد", "දෙසියය").
    Fused([&'static str; 10]),
}

/// How the 20..=99 band combines tens and units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TensStyle {
    /// Tens word + joiner + units word; `et_word` is inserted before a unit
    /// of 1 ("vingt et un") where a language requires it.
    Regular { et_word: Option<&'static str> },
    /// French-family vigesimal tens: 70 and 90 are built from the 60/80 stem
    /// plus a teen, 80 is a base-20 stem that takes the terminal plural
    /// marker when it ends the expression. `et_word` joins a unit of 1 to
    /// the decades that take it ("vingt et un", "soixante et onze").
    Vigesimal { et_word: &'static str },
}

/// How one group value is rendered into words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupStyle {
    /// Hundreds/tens/units composition used by most European languages.
    Western {
        hundreds: Hundreds,
        tens_style: TensStyle,
        /// Joiner between tens and units words ("-", " ", or "").
        tens_units_joiner: &'static str,
        /// Joiner between the hundreds part and the rest of the group.
        hundred_joiner: &'static str,
        /// Bound morpheme added to a pluralizable final word ("cents",
        /// "quatre-vingts"); applied only in terminal position.
        terminal_plural: Option<&'static str>,
    },
    /// Arabic-family composition: fused hundreds, an attached conjunction
    /// between every pair of words, units spoken before tens.
    Conjoined {
        hundreds: [&'static str; 10],
        conjunction: &'static str,
        units_before_tens: bool,
    },
    /// Sino-family composition: digit x place-word products concatenated,
    /// with an explicit zero placeholder for skipped places.
    Multiplicative {
        ten: &'static str,
        hundred: &'static str,
        thousand: &'static str,
        zero: &'static str,
        /// Render a leading 10..=19 group as "ten-x" rather than "one-ten-x".
        elide_leading_ten: bool,
    },
}

/// How adjacent groups are linked in the composed expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupLink {
    /// Plain space between groups.
    Space,
    /// A conjunction between groups; when `attach_next` is set the word is
    /// bound to the following word ("و" in Arabic).
    Conjunction {
        word: &'static str,
        attach_next: bool,
    },
    /// Pure concatenation (Chinese-family compounding).
    Concat,
}

/// Where a language writes its era token relative to the year words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraPlacement {
    Suffix,
    Prefix,
}

/// Era tokens for the year overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EraWords {
    /// Appended (or prefixed) unconditionally to negative years.
    pub negative: &'static str,
    /// Appended (or prefixed) to positive years only on request.
    pub positive: &'static str,
    pub placement: EraPlacement,
}

/// Shape class of a word-initial character, used as a fusion-table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitialShape {
    Vowel,
    Consonant,
}

/// Connector positions the fusion table distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
    /// Between a numeral and its scale word.
    ScaleAttach,
    /// Between two adjacent groups.
    GroupAttach,
}

/// Deterministic string-fusion table for case-driven concatenation.
///
/// Keyed by (connector, shape of the next word's first letter); the value is
/// the joiner inserted between the two words. The table is a total function:
/// pairs it does not define fall back to a plain-space join.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FusionTable {
    entries: HashMap<(Connector, InitialShape), &'static str>,
    vowel_initials: HashSet<char>,
}

impl FusionTable {
    pub fn new(vowel_initials: &str) -> Self {
        Self {
            entries: HashMap::new(),
            vowel_initials: vowel_initials.chars().collect(),
        }
    }

    pub fn define(mut self, connector: Connector, shape: InitialShape, joiner: &'static str) -> Self {
        self.entries.insert((connector, shape), joiner);
        self
    }

    fn shape_of(&self, word: &str) -> InitialShape {
        match word.chars().next() {
            Some(c) if self.vowel_initials.contains(&c) => InitialShape::Vowel,
            _ => InitialShape::Consonant,
        }
    }

    /// The joiner to insert before `next_word`, or a plain space for pairs
    /// the table leaves undefined.
    pub fn joiner(&self, connector: Connector, next_word: &str) -> &'static str {
        self.entries
            .get(&(connector, self.shape_of(next_word)))
            .copied()
            .unwrap_or(" ")
    }
}

/// Closed membership table of convertible number roots for suffixing
/// (Sinhala-like) languages: a word whose last lexical root appears here
/// takes the bound combining form whenever it does not end the expression.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversionTable {
    roots: HashMap<&'static str, &'static str>,
}

impl ConversionTable {
    pub fn new(pairs: &[(&'static str, &'static str)]) -> Self {
        Self {
            roots: pairs.iter().copied().collect(),
        }
    }

    /// Convert a word's final root to its bound form, if the root is in the
    /// membership table. Longest matching root wins.
    pub fn convert(&self, word: &str) -> Option<String> {
        let mut best: Option<(&str, &str)> = None;
        for (&root, &bound) in &self.roots {
            if word.ends_with(root)
                && best.is_none_or(|(r, _)| root.len() > r.len())
            {
                best = Some((root, bound));
            }
        }
        best.map(|(root, bound)| {
            let stem = &word[..word.len() - root.len()];
            format!("{stem}{bound}")
        })
    }

    /// Convert, or return the word unchanged.
    pub fn convert_or_keep(&self, word: &str) -> String {
        self.convert(word).unwrap_or_else(|| word.to_string())
    }
}

/// Immutable per-language vocabulary and composition conventions.
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconTable {
    pub zero: &'static str,
    pub minus: &'static str,
    /// Separator words for fraction rendering.
    pub point_word: &'static str,
    pub comma_word: &'static str,
    /// Fixed literals for the non-finite short-circuit above the engine.
    pub infinity: &'static str,
    pub not_a_number: &'static str,

    /// Unit words 0..=9 in the language's default (unmarked) gender.
    pub units: [&'static str; 10],
    /// Feminine unit words, where numerals mark gender. Sparse entries fall
    /// back to the default table ("" means no override).
    pub units_fem: Option<[&'static str; 10]>,
    /// Masculine unit words, for languages whose default table is not the
    /// masculine series.
    pub units_masc: Option<[&'static str; 10]>,
    /// Teen words 10..=19 (unused by multiplicative systems).
    pub teens: [&'static str; 10],
    /// Decade words; indexes 0 and 1 are unused.
    pub tens: [&'static str; 10],

    pub group_style: GroupStyle,
    pub group_link: GroupLink,
    /// Joiner between a numeral and its scale word.
    pub scale_joiner: &'static str,
    /// Joiner between top-level parts (sign, integer, fraction, units).
    pub word_joiner: &'static str,
    /// Inter-group zero word inserted when a whole group is skipped
    /// (Chinese-family); distinct from the intra-group placeholder.
    pub zero_bridge: Option<&'static str>,
    /// The dual form of a scale word or unit noun swallows the numeral
    /// ("ألفان", never "اثنان ألف").
    pub dual_absorbs_numeral: bool,

    /// Default word between main and sub currency amounts.
    pub currency_joiner: Option<&'static str>,
    /// Gender numerals take when counting nothing in particular.
    pub default_gender: Gender,
    /// Fixed gender for year rendering.
    pub year_gender: Gender,
    pub era: EraWords,
    /// Finite table of irregular year renderings; consulted before the
    /// general pipeline.
    pub year_exceptions: HashMap<u64, &'static str>,

    pub conversions: Option<ConversionTable>,
    pub fusion: Option<FusionTable>,
}

impl LexiconTable {
    /// The unit word table for a given numeral gender.
    pub fn units_for(&self, gender: Gender) -> &[&'static str; 10] {
        let table = match gender {
            Gender::Fem => self.units_fem.as_ref(),
            Gender::Masc => self.units_masc.as_ref(),
            _ => None,
        };
        table.unwrap_or(&self.units)
    }

    /// A unit word in the given gender, falling back to the default table
    /// where the gendered table has no override.
    pub fn unit_word(&self, digit: usize, gender: Gender) -> &'static str {
        let word = self.units_for(gender)[digit];
        if word.is_empty() {
            self.units[digit]
        } else {
            word
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_table_replaces_final_root() {
        let t = ConversionTable::new(&[("දෙක", "දෙ"), ("දහස", "දහස්")]);
        assert_eq!(t.convert("දෙක").unwrap(), "දෙ");
        assert_eq!(t.convert("දෙදහස").unwrap(), "දෙදහස්");
        assert_eq!(t.convert("පනහ"), None);
    }

    #[test]
    fn conversion_longest_root_wins() {
        let t = ConversionTable::new(&[("ba", "X"), ("aba", "Y")]);
        assert_eq!(t.convert("kaba").unwrap(), "kY");
    }

    #[test]
    fn conversion_or_keep() {
        let t = ConversionTable::new(&[("two", "twain")]);
        assert_eq!(t.convert_or_keep("two"), "twain");
        assert_eq!(t.convert_or_keep("seven"), "seven");
    }

    #[test]
    fn fusion_defined_pair() {
        let t = FusionTable::new("aeiou")
            .define(Connector::ScaleAttach, InitialShape::Consonant, "");
        assert_eq!(t.joiner(Connector::ScaleAttach, "dahasa"), "");
    }

    #[test]
    fn fusion_undefined_pair_falls_back_to_space() {
        let t = FusionTable::new("aeiou")
            .define(Connector::ScaleAttach, InitialShape::Consonant, "");
        // Vowel-initial word: pair undefined, plain-space join.
        assert_eq!(t.joiner(Connector::ScaleAttach, "eka"), " ");
        // Different connector: also undefined.
        assert_eq!(t.joiner(Connector::GroupAttach, "dahasa"), " ");
    }

    #[test]
    fn gendered_unit_fallback() {
        let mut lex = test_lexicon();
        lex.units_fem = Some(["", "одна", "две", "", "", "", "", "", "", ""]);
        assert_eq!(lex.unit_word(1, Gender::Fem), "одна");
        assert_eq!(lex.unit_word(3, Gender::Fem), "три");
        assert_eq!(lex.unit_word(1, Gender::Masc), "один");
    }

    fn test_lexicon() -> LexiconTable {
        LexiconTable {
            zero: "ноль",
            minus: "минус",
            point_word: "точка",
            comma_word: "запятая",
            infinity: "бесконечность",
            not_a_number: "не число",
            units: [
                "", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
            ],
            units_fem: None,
            units_masc: None,
            teens: [
                "десять",
                "одиннадцать",
                "двенадцать",
                "тринадцать",
                "четырнадцать",
                "пятнадцать",
                "шестнадцать",
                "семнадцать",
                "восемнадцать",
                "девятнадцать",
            ],
            tens: [
                "", "", "двадцать", "тридцать", "сорок", "пятьдесят", "шестьдесят", "семьдесят",
                "восемьдесят", "девяносто",
            ],
            group_style: GroupStyle::Western {
                hundreds: Hundreds::Fused([
                    "", "сто", "двести", "триста", "четыреста", "пятьсот", "шестьсот", "семьсот",
                    "восемьсот", "девятьсот",
                ]),
                tens_style: TensStyle::Regular { et_word: None },
                tens_units_joiner: " ",
                hundred_joiner: " ",
                terminal_plural: None,
            },
            group_link: GroupLink::Space,
            scale_joiner: " ",
            word_joiner: " ",
            zero_bridge: None,
            dual_absorbs_numeral: false,
            currency_joiner: None,
            default_gender: Gender::Masc,
            year_gender: Gender::Masc,
            era: EraWords {
                negative: "до н. э.",
                positive: "н. э.",
                placement: EraPlacement::Suffix,
            },
            year_exceptions: HashMap::new(),
            conversions: None,
            fusion: None,
        }
    }
}
