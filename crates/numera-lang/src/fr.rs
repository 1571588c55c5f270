// French (long scale, vigesimal tens, terminal plural agreement).

use hashbrown::HashMap;
use numera_core::context::Gender;
use numera_core::currency::CurrencyInfo;
use numera_core::forms::FormSet;
use numera_engine::lexicon::{
    EraPlacement, EraWords, GroupLink, GroupStyle, Hundreds, LexiconTable, TensStyle,
};
use numera_engine::morph::{InvariantPlural, MorphologyRule};
use numera_engine::system::{Elision, Grouping, NumberingSystem, ScaleEntry};

pub fn lexicon() -> LexiconTable {
    LexiconTable {
        zero: "zéro",
        minus: "moins",
        point_word: "point",
        comma_word: "virgule",
        infinity: "infini",
        not_a_number: "pas un nombre",
        units: [
            "", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
        ],
        units_fem: Some(["", "une", "", "", "", "", "", "", "", ""]),
        units_masc: None,
        teens: [
            "dix", "onze", "douze", "treize", "quatorze", "quinze", "seize", "dix-sept",
            "dix-huit", "dix-neuf",
        ],
        // 70 and 90 build on the 60 and 80 stems; their own slots stay empty.
        tens: [
            "", "", "vingt", "trente", "quarante", "cinquante", "soixante", "", "quatre-vingt",
            "",
        ],
        group_style: GroupStyle::Western {
            hundreds: Hundreds::Multiplied {
                word: "cent",
                elide_one: true,
            },
            tens_style: TensStyle::Vigesimal { et_word: "et" },
            tens_units_joiner: "-",
            hundred_joiner: " ",
            terminal_plural: Some("s"),
        },
        group_link: GroupLink::Space,
        scale_joiner: " ",
        word_joiner: " ",
        zero_bridge: None,
        dual_absorbs_numeral: false,
        currency_joiner: Some("et"),
        default_gender: Gender::Masc,
        year_gender: Gender::Masc,
        era: EraWords {
            negative: "av. J.-C.",
            positive: "ap. J.-C.",
            placement: EraPlacement::Suffix,
        },
        year_exceptions: HashMap::new(),
        conversions: None,
        fusion: None,
    }
}

/// Long scale: mille, million, milliard, billion, billiard, trillion. "mille"
/// is invariant and elides the one; the higher scales are nouns that take
/// "un" and a plural "-s".
pub fn system() -> NumberingSystem {
    let mut scales = vec![
        ScaleEntry::new(FormSet::invariant("mille")).elision(Elision::DropOne),
    ];
    for (singular, plural) in [
        ("million", "millions"),
        ("milliard", "milliards"),
        ("billion", "billions"),
        ("billiard", "billiards"),
        ("trillion", "trillions"),
    ] {
        scales.push(
            ScaleEntry::new(FormSet::plural(singular, plural))
                .gender(Gender::Masc)
                .elision(Elision::Replace("un")),
        );
    }
    NumberingSystem::new(Grouping::Uniform(1000), scales)
}

pub fn rule() -> Box<dyn MorphologyRule + Send + Sync> {
    Box::new(InvariantPlural)
}

pub fn default_currency() -> CurrencyInfo {
    CurrencyInfo::new("euro", "euros", "centime", "centimes").gender(Gender::Masc)
}
