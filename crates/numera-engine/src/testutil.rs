// Shared test fixtures: a minimal English-style lexicon and numbering
// system. Language crates carry the real tables; these exist so engine unit
// tests can exercise composition without depending on them.

use hashbrown::HashMap;
use numera_core::context::Gender;
use numera_core::forms::FormSet;

use crate::lexicon::{
    EraPlacement, EraWords, GroupLink, GroupStyle, Hundreds, LexiconTable, TensStyle,
};
use crate::system::{Grouping, NumberingSystem, ScaleEntry};

pub(crate) fn english_lexicon() -> LexiconTable {
    LexiconTable {
        zero: "zero",
        minus: "minus",
        point_word: "point",
        comma_word: "comma",
        infinity: "infinity",
        not_a_number: "not a number",
        units: [
            "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
        ],
        units_fem: None,
        units_masc: None,
        teens: [
            "ten",
            "eleven",
            "twelve",
            "thirteen",
            "fourteen",
            "fifteen",
            "sixteen",
            "seventeen",
            "eighteen",
            "nineteen",
        ],
        tens: [
            "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
        ],
        group_style: GroupStyle::Western {
            hundreds: Hundreds::Multiplied {
                word: "hundred",
                elide_one: false,
            },
            tens_style: TensStyle::Regular { et_word: None },
            tens_units_joiner: "-",
            hundred_joiner: " ",
            terminal_plural: None,
        },
        group_link: GroupLink::Space,
        scale_joiner: " ",
        word_joiner: " ",
        zero_bridge: None,
        dual_absorbs_numeral: false,
        currency_joiner: Some("and"),
        default_gender: Gender::None,
        year_gender: Gender::None,
        era: EraWords {
            negative: "BC",
            positive: "AD",
            placement: EraPlacement::Suffix,
        },
        year_exceptions: HashMap::new(),
        conversions: None,
        fusion: None,
    }
}

pub(crate) fn english_system() -> NumberingSystem {
    NumberingSystem::new(
        Grouping::Uniform(1000),
        vec![
            ScaleEntry::new(FormSet::invariant("thousand")),
            ScaleEntry::new(FormSet::invariant("million")),
        ],
    )
}
