// Arabic (short scale, dual and paucal forms, gender polarity).

use hashbrown::HashMap;
use numera_core::context::Gender;
use numera_core::currency::CurrencyInfo;
use numera_core::forms::FormSet;
use numera_engine::lexicon::{
    EraPlacement, EraWords, GroupLink, GroupStyle, LexiconTable,
};
use numera_engine::morph::{ArabicHexad, MorphologyRule};
use numera_engine::system::{Elision, Grouping, NumberingSystem, ScaleEntry};

pub fn lexicon() -> LexiconTable {
    LexiconTable {
        zero: "صفر",
        minus: "سالب",
        point_word: "فاصلة",
        comma_word: "فاصلة",
        infinity: "ما لا نهاية",
        not_a_number: "ليس رقمًا",
        // Citation forms, used standalone and for fraction digits.
        units: [
            "",
            "واحد",
            "اثنان",
            "ثلاثة",
            "أربعة",
            "خمسة",
            "ستة",
            "سبعة",
            "ثمانية",
            "تسعة",
        ],
        // Feminine word forms: used with masculine nouns for 3..=10 by
        // polarity, and with feminine nouns for one and two.
        units_fem: Some([
            "",
            "واحدة",
            "اثنتان",
            "ثلاثة",
            "أربعة",
            "خمسة",
            "ستة",
            "سبعة",
            "ثمانية",
            "تسعة",
        ]),
        // Masculine word forms: used with feminine nouns for 3..=10.
        units_masc: Some([
            "",
            "واحد",
            "اثنان",
            "ثلاث",
            "أربع",
            "خمس",
            "ست",
            "سبع",
            "ثمان",
            "تسع",
        ]),
        teens: [
            "عشرة",
            "أحد عشر",
            "اثنا عشر",
            "ثلاثة عشر",
            "أربعة عشر",
            "خمسة عشر",
            "ستة عشر",
            "سبعة عشر",
            "ثمانية عشر",
            "تسعة عشر",
        ],
        tens: [
            "",
            "",
            "عشرون",
            "ثلاثون",
            "أربعون",
            "خمسون",
            "ستون",
            "سبعون",
            "ثمانون",
            "تسعون",
        ],
        group_style: GroupStyle::Conjoined {
            hundreds: [
                "",
                "مائة",
                "مائتان",
                "ثلاثمائة",
                "أربعمائة",
                "خمسمائة",
                "ستمائة",
                "سبعمائة",
                "ثمانمائة",
                "تسعمائة",
            ],
            conjunction: "و",
            units_before_tens: true,
        },
        group_link: GroupLink::Conjunction {
            word: "و",
            attach_next: true,
        },
        scale_joiner: " ",
        word_joiner: " ",
        zero_bridge: None,
        dual_absorbs_numeral: true,
        currency_joiner: Some("و"),
        default_gender: Gender::Masc,
        year_gender: Gender::Masc,
        era: EraWords {
            negative: "ق.م",
            positive: "م",
            placement: EraPlacement::Suffix,
        },
        year_exceptions: HashMap::new(),
        conversions: None,
        fusion: None,
    }
}

/// Short scale with the full dual/paucal/accusative paradigm. One thousand is
/// the bare scale word; two thousand is the dual standing alone.
pub fn system() -> NumberingSystem {
    let scales = [
        ("ألف", "ألفان", "آلاف", "ألفًا"),
        ("مليون", "مليونان", "ملايين", "مليونًا"),
        ("مليار", "ملياران", "مليارات", "مليارًا"),
        ("تريليون", "تريليونان", "تريليونات", "تريليونًا"),
    ];
    NumberingSystem::new(
        Grouping::Uniform(1000),
        scales
            .iter()
            .map(|(one, two, few, acc)| {
                ScaleEntry::new(FormSet::hexad(one, two, few, acc))
                    .gender(Gender::Masc)
                    .elision(Elision::DropOne)
            })
            .collect(),
    )
}

pub fn rule() -> Box<dyn MorphologyRule + Send + Sync> {
    Box::new(ArabicHexad)
}

pub fn default_currency() -> CurrencyInfo {
    CurrencyInfo::with_forms(
        FormSet::hexad("دينار", "ديناران", "دنانير", "دينارًا"),
        Some(FormSet::hexad("فلس", "فلسان", "فلوس", "فلسًا")),
    )
    .gender(Gender::Masc)
}
