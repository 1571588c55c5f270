// Chinese (myriad scale, multiplicative groups, explicit zero).

use hashbrown::HashMap;
use numera_core::context::Gender;
use numera_core::currency::CurrencyInfo;
use numera_core::forms::FormSet;
use numera_engine::lexicon::{
    EraPlacement, EraWords, GroupLink, GroupStyle, LexiconTable,
};
use numera_engine::morph::{InvariantPlural, MorphologyRule};
use numera_engine::system::{Grouping, NumberingSystem, ScaleEntry};

pub fn lexicon() -> LexiconTable {
    LexiconTable {
        zero: "零",
        minus: "负",
        point_word: "点",
        comma_word: "点",
        infinity: "无穷大",
        not_a_number: "非数值",
        units: ["", "一", "二", "三", "四", "五", "六", "七", "八", "九"],
        units_fem: None,
        units_masc: None,
        // Multiplicative groups never read the teens or tens tables.
        teens: ["", "", "", "", "", "", "", "", "", ""],
        tens: ["", "", "", "", "", "", "", "", "", ""],
        group_style: GroupStyle::Multiplicative {
            ten: "十",
            hundred: "百",
            thousand: "千",
            zero: "零",
            elide_leading_ten: true,
        },
        group_link: GroupLink::Concat,
        scale_joiner: "",
        word_joiner: "",
        zero_bridge: Some("零"),
        dual_absorbs_numeral: false,
        currency_joiner: None,
        default_gender: Gender::None,
        year_gender: Gender::None,
        era: EraWords {
            negative: "公元前",
            positive: "公元",
            placement: EraPlacement::Prefix,
        },
        year_exceptions: HashMap::new(),
        conversions: None,
        fusion: None,
    }
}

/// Myriad scale: 万 (10^4), 亿 (10^8), 兆 (10^12), 京 (10^16).
pub fn system() -> NumberingSystem {
    NumberingSystem::new(
        Grouping::Uniform(10_000),
        ["万", "亿", "兆", "京"]
            .iter()
            .map(|w| ScaleEntry::new(FormSet::invariant(w)))
            .collect(),
    )
}

pub fn rule() -> Box<dyn MorphologyRule + Send + Sync> {
    Box::new(InvariantPlural)
}

pub fn default_currency() -> CurrencyInfo {
    CurrencyInfo::with_forms(
        FormSet::invariant("元"),
        Some(FormSet::invariant("分")),
    )
}
