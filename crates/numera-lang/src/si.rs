// Sinhala (Indian grouping, bound combining forms for non-final words).

use hashbrown::HashMap;
use numera_core::context::Gender;
use numera_core::currency::CurrencyInfo;
use numera_core::forms::FormSet;
use numera_engine::lexicon::{
    Connector, ConversionTable, EraPlacement, EraWords, FusionTable, GroupLink, GroupStyle,
    Hundreds, InitialShape, LexiconTable, TensStyle,
};
use numera_engine::morph::{MorphologyRule, Suffixing};
use numera_engine::system::{Grouping, NumberingSystem, ScaleEntry};

/// Sinhala independent vowel letters, for the fusion table's initial-shape
/// classification.
const VOWELS: &str = "අආඇඈඉඊඋඌඍඎඑඒඓඔඕඖ";

pub fn lexicon() -> LexiconTable {
    LexiconTable {
        zero: "බිංදුව",
        minus: "සෘණ",
        point_word: "දශම",
        comma_word: "දශම",
        infinity: "අනන්තය",
        not_a_number: "සංඛ්‍යාවක් නොවේ",
        units: [
            "", "එක", "දෙක", "තුන", "හතර", "පහ", "හය", "හත", "අට", "නවය",
        ],
        units_fem: None,
        units_masc: None,
        teens: [
            "දහය",
            "එකොළහ",
            "දොළහ",
            "දහතුන",
            "දාහතර",
            "පහළොව",
            "දහසය",
            "දහහත",
            "දහඅට",
            "දහනවය",
        ],
        tens: [
            "",
            "",
            "විස්ස",
            "තිහ",
            "හතළිහ",
            "පනහ",
            "හැට",
            "හැත්තෑව",
            "අසූව",
            "අනූව",
        ],
        group_style: GroupStyle::Western {
            hundreds: Hundreds::Fused([
                "",
                "එකසියය",
                "දෙසියය",
                "තුන්සියය",
                "හාරසියය",
                "පන්සියය",
                "හයසියය",
                "හත්සියය",
                "අටසියය",
                "නවසියය",
            ]),
            tens_style: TensStyle::Regular { et_word: None },
            // Tens and units compound into one word.
            tens_units_joiner: "",
            hundred_joiner: " ",
            terminal_plural: None,
        },
        group_link: GroupLink::Space,
        scale_joiner: " ",
        word_joiner: " ",
        zero_bridge: None,
        dual_absorbs_numeral: false,
        currency_joiner: Some("සහ"),
        default_gender: Gender::None,
        year_gender: Gender::None,
        era: EraWords {
            negative: "ක්‍රි.පූ.",
            positive: "ක්‍රි.ව.",
            placement: EraPlacement::Suffix,
        },
        year_exceptions: HashMap::new(),
        conversions: Some(conversions()),
        fusion: Some(
            FusionTable::new(VOWELS)
                // A numeral binds directly to a consonant-initial scale word;
                // vowel-initial pairs fall back to the plain-space join.
                .define(Connector::ScaleAttach, InitialShape::Consonant, ""),
        ),
    }
}

/// The closed membership table of convertible number words: final form on
/// the left, bound combining form on the right.
fn conversions() -> ConversionTable {
    ConversionTable::new(&[
        ("එක", "එක්"),
        ("දෙක", "දෙ"),
        ("තුන", "තුන්"),
        ("හතර", "හාර"),
        ("පහ", "පන්"),
        ("හත", "හත්"),
        ("නවය", "නව"),
        ("දහය", "දස"),
        ("විස්ස", "විසි"),
        ("තිහ", "තිස්"),
        ("හතළිහ", "හතළිස්"),
        ("පනහ", "පනස්"),
        ("හැත්තෑව", "හැත්තෑ"),
        ("අසූව", "අසූ"),
        ("අනූව", "අනූ"),
        ("සියය", "සිය"),
        ("දහස", "දහස්"),
        ("ලක්ෂය", "ලක්ෂ"),
        ("කෝටිය", "කෝටි"),
    ])
}

/// The Indian grouping with native Sinhala scale nouns: දහස (10^3),
/// ලක්ෂය (10^5), කෝටිය (10^7).
pub fn system() -> NumberingSystem {
    NumberingSystem::new(
        Grouping::Indian,
        ["දහස", "ලක්ෂය", "කෝටිය"]
            .iter()
            .map(|w| ScaleEntry::new(FormSet::invariant(w)))
            .collect(),
    )
}

pub fn rule() -> Box<dyn MorphologyRule + Send + Sync> {
    Box::new(Suffixing)
}

pub fn default_currency() -> CurrencyInfo {
    CurrencyInfo::new("රුපියල", "රුපියල්", "සතය", "සත")
}

#[cfg(test)]
mod tests {
    use super::*;
    use numera_core::decimal::Decimal;
    use numera_core::options::ConvertOptions;
    use numera_engine::convert::convert;

    fn say(input: &str) -> String {
        convert(
            &Decimal::parse(input).unwrap(),
            &ConvertOptions::cardinal(),
            None,
            &lexicon(),
            &system(),
            rule().as_ref(),
        )
        .unwrap()
    }

    #[test]
    fn final_forms_stand_alone() {
        assert_eq!(say("0"), "බිංදුව");
        assert_eq!(say("2"), "දෙක");
        assert_eq!(say("20"), "විස්ස");
        assert_eq!(say("100"), "එකසියය");
    }

    #[test]
    fn tens_compound_with_bound_stem() {
        assert_eq!(say("23"), "විසිතුන");
        assert_eq!(say("55"), "පනස්පහ");
        assert_eq!(say("99"), "අනූනවය");
    }

    #[test]
    fn hundreds_convert_when_not_final() {
        assert_eq!(say("123"), "එකසිය විසිතුන");
        assert_eq!(say("550"), "පන්සිය පනහ");
    }

    #[test]
    fn numerals_fuse_with_scale_words() {
        assert_eq!(say("1000"), "එක්දහස");
        assert_eq!(say("2000"), "දෙදහස");
        assert_eq!(say("20000"), "විසිදහස");
        assert_eq!(say("2500"), "දෙදහස් පන්සියය");
    }

    #[test]
    fn lakh_and_crore() {
        assert_eq!(say("100000"), "එක්ලක්ෂය");
        assert_eq!(say("200000"), "දෙලක්ෂය");
        assert_eq!(say("10000000"), "එක්කෝටිය");
    }

    #[test]
    fn nineteen_eighty_four() {
        assert_eq!(say("1984"), "එක්දහස් නවසිය අසූහතර");
    }

    #[test]
    fn currency_rupees() {
        let out = convert(
            &Decimal::parse("2.50").unwrap(),
            &ConvertOptions::currency(),
            Some(&default_currency()),
            &lexicon(),
            &system(),
            rule().as_ref(),
        )
        .unwrap();
        // Both amounts sit mid-expression, so they take the bound form.
        assert_eq!(out, "දෙ රුපියල් සහ පනස් සත");
    }
}
