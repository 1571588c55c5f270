// English (short scale).

use hashbrown::HashMap;
use numera_core::context::Gender;
use numera_core::currency::CurrencyInfo;
use numera_core::forms::FormSet;
use numera_engine::lexicon::{
    EraPlacement, EraWords, GroupLink, GroupStyle, Hundreds, LexiconTable, TensStyle,
};
use numera_engine::morph::{InvariantPlural, MorphologyRule};
use numera_engine::system::{Grouping, NumberingSystem, ScaleEntry};

pub fn lexicon() -> LexiconTable {
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

/// Short scale up to 10^33. Scale words stay uninflected when counted
/// ("two million", never "two millions").
pub fn system() -> NumberingSystem {
    let scales = [
        "thousand",
        "million",
        "billion",
        "trillion",
        "quadrillion",
        "quintillion",
        "sextillion",
        "septillion",
        "octillion",
        "nonillion",
        "decillion",
    ];
    NumberingSystem::new(
        Grouping::Uniform(1000),
        scales
            .iter()
            .map(|w| ScaleEntry::new(FormSet::invariant(w)))
            .collect(),
    )
}

pub fn rule() -> Box<dyn MorphologyRule + Send + Sync> {
    Box::new(InvariantPlural)
}

pub fn default_currency() -> CurrencyInfo {
    CurrencyInfo::new("dollar", "dollars", "cent", "cents")
}
