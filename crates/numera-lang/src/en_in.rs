// Indian English: the English lexicon over the Indian lakh/crore grouping.

use numera_core::currency::CurrencyInfo;
use numera_core::forms::FormSet;
use numera_engine::lexicon::LexiconTable;
use numera_engine::morph::{InvariantPlural, MorphologyRule};
use numera_engine::system::{Grouping, NumberingSystem, ScaleEntry};

pub fn lexicon() -> LexiconTable {
    crate::en::lexicon()
}

/// Indian grouping: one 3-digit group, then 2-digit groups. Lakh and crore
/// stay uninflected when counted, matching Indian English usage ("two lakh").
pub fn system() -> NumberingSystem {
    let scales = [
        "thousand", "lakh", "crore", "arab", "kharab", "nil", "padma", "shankh",
    ];
    NumberingSystem::new(
        Grouping::Indian,
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
    CurrencyInfo::new("rupee", "rupees", "paisa", "paise")
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
    fn lakh_and_crore_grouping() {
        assert_eq!(say("100000"), "one lakh");
        assert_eq!(say("1234567"), "twelve lakh thirty-four thousand five hundred sixty-seven");
        assert_eq!(say("10000000"), "one crore");
        assert_eq!(
            say("123456789"),
            "twelve crore thirty-four lakh fifty-six thousand seven hundred eighty-nine"
        );
    }

    #[test]
    fn below_one_lakh_reads_like_english() {
        assert_eq!(say("99999"), "ninety-nine thousand nine hundred ninety-nine");
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
        assert_eq!(out, "two rupees and fifty paise");
    }
}
