// Russian (short scale, triad agreement, gendered units).

use hashbrown::HashMap;
use numera_core::context::Gender;
use numera_core::currency::CurrencyInfo;
use numera_core::forms::FormSet;
use numera_engine::lexicon::{
    EraPlacement, EraWords, GroupLink, GroupStyle, Hundreds, LexiconTable, TensStyle,
};
use numera_engine::morph::{MorphologyRule, SlavicTriad};
use numera_engine::system::{Grouping, NumberingSystem, ScaleEntry};

pub fn lexicon() -> LexiconTable {
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
        // Only one and two change with gender.
        units_fem: Some(["", "одна", "две", "", "", "", "", "", "", ""]),
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
            "",
            "",
            "двадцать",
            "тридцать",
            "сорок",
            "пятьдесят",
            "шестьдесят",
            "семьдесят",
            "восемьдесят",
            "девяносто",
        ],
        group_style: GroupStyle::Western {
            hundreds: Hundreds::Fused([
                "",
                "сто",
                "двести",
                "триста",
                "четыреста",
                "пятьсот",
                "шестьсот",
                "семьсот",
                "восемьсот",
                "девятьсот",
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

/// Short scale with triad forms. Thousand is feminine; the higher scales are
/// masculine.
pub fn system() -> NumberingSystem {
    let mut scales = vec![
        ScaleEntry::new(FormSet::triad("тысяча", "тысячи", "тысяч")).gender(Gender::Fem),
    ];
    for (one, few, many) in [
        ("миллион", "миллиона", "миллионов"),
        ("миллиард", "миллиарда", "миллиардов"),
        ("триллион", "триллиона", "триллионов"),
        ("квадриллион", "квадриллиона", "квадриллионов"),
        ("квинтиллион", "квинтиллиона", "квинтиллионов"),
    ] {
        scales.push(ScaleEntry::new(FormSet::triad(one, few, many)).gender(Gender::Masc));
    }
    NumberingSystem::new(Grouping::Uniform(1000), scales)
}

pub fn rule() -> Box<dyn MorphologyRule + Send + Sync> {
    Box::new(SlavicTriad)
}

pub fn default_currency() -> CurrencyInfo {
    CurrencyInfo::with_forms(
        FormSet::triad("рубль", "рубля", "рублей"),
        Some(FormSet::triad("копейка", "копейки", "копеек")),
    )
    .gender(Gender::Masc)
    .sub_gender(Gender::Fem)
}
