// NumeraHandle: top-level integration point for number-to-words conversion.
//
// Owns one language's configuration (lexicon, numbering system, agreement
// rule, default currency) and exposes cardinal, currency and year conversion
// through a unified API. Options are stored in the handle and passed to the
// engine on every call; the configuration itself is never mutated, so a
// handle can be shared immutably across threads.

use num_bigint::BigUint;
use numera_core::context::Gender;
use numera_core::currency::CurrencyInfo;
use numera_core::decimal::{Decimal, ParseError};
use numera_core::options::{ConvertOptions, DecimalSeparator, OutputFormat};
use numera_engine::ConvertError;
use numera_engine::convert::convert;
use numera_engine::lexicon::LexiconTable;
use numera_engine::morph::MorphologyRule;
use numera_engine::system::NumberingSystem;

/// Error type for handle construction and conversion failures.
#[derive(Debug, thiserror::Error)]
pub enum LangError {
    /// The requested language tag has no built-in module (or its feature is
    /// disabled).
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The input could not be normalized into a decimal.
    #[error("invalid input: {0}")]
    Parse(#[from] ParseError),

    /// The engine refused the conversion.
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Top-level handle owning one language's configuration.
pub struct NumeraHandle {
    lexicon: LexiconTable,
    system: NumberingSystem,
    rule: Box<dyn MorphologyRule + Send + Sync>,
    currency: CurrencyInfo,
    decimal_separator: DecimalSeparator,
    round_currency: bool,
    include_era: bool,
    gender: Option<Gender>,
    negative_prefix: Option<String>,
}

impl core::fmt::Debug for NumeraHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NumeraHandle")
            .field("system", &self.system)
            .field("currency", &self.currency)
            .field("decimal_separator", &self.decimal_separator)
            .field("round_currency", &self.round_currency)
            .field("include_era", &self.include_era)
            .field("gender", &self.gender)
            .field("negative_prefix", &self.negative_prefix)
            .finish_non_exhaustive()
    }
}

impl NumeraHandle {
    /// Create a handle for a built-in language by BCP 47 tag.
    pub fn for_language(tag: &str) -> Result<Self, LangError> {
        let parts = language_parts(tag);
        let Some((lexicon, system, rule, currency)) = parts else {
            return Err(LangError::UnsupportedLanguage(tag.to_string()));
        };
        Ok(Self {
            lexicon,
            system,
            rule,
            currency,
            decimal_separator: DecimalSeparator::Point,
            round_currency: true,
            include_era: false,
            gender: None,
            negative_prefix: None,
        })
    }

    /// Tags of the built-in languages compiled into this build.
    pub fn language_tags() -> &'static [&'static str] {
        &[
            #[cfg(feature = "en")]
            "en",
            #[cfg(feature = "en-in")]
            "en-IN",
            #[cfg(feature = "fr")]
            "fr",
            #[cfg(feature = "ru")]
            "ru",
            #[cfg(feature = "ar")]
            "ar",
            #[cfg(feature = "zh")]
            "zh",
            #[cfg(feature = "si")]
            "si",
        ]
    }

    // -- Options ------------------------------------------------------------

    pub fn set_decimal_separator(&mut self, separator: DecimalSeparator) {
        self.decimal_separator = separator;
    }

    /// Round (rather than truncate) currency fractions to two sub-unit
    /// digits. Default: true.
    pub fn set_round_currency(&mut self, round: bool) {
        self.round_currency = round;
    }

    /// Append the positive-era token to years. Default: false.
    pub fn set_include_era(&mut self, include: bool) {
        self.include_era = include;
    }

    /// Override the gender numbers agree with.
    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.gender = gender;
    }

    /// Override the language's negative prefix word.
    pub fn set_negative_prefix(&mut self, prefix: Option<String>) {
        self.negative_prefix = prefix;
    }

    /// Replace the default currency names.
    pub fn set_currency_info(&mut self, info: CurrencyInfo) {
        self.currency = info;
    }

    // -- Conversion ---------------------------------------------------------

    /// Convert a decimal string to words.
    pub fn cardinal(&self, input: &str) -> Result<String, LangError> {
        let value = Decimal::parse(input)?;
        Ok(convert(
            &value,
            &self.options(OutputFormat::Cardinal, false),
            None,
            &self.lexicon,
            &self.system,
            self.rule.as_ref(),
        )?)
    }

    /// Convert a float to words. Non-finite values short-circuit to the
    /// lexicon's fixed literal without entering the engine.
    pub fn cardinal_f64(&self, value: f64) -> Result<String, LangError> {
        if value.is_nan() {
            return Ok(self.lexicon.not_a_number.to_string());
        }
        if value.is_infinite() {
            let word = self.lexicon.infinity;
            return Ok(if value < 0.0 {
                format!(
                    "{}{}{word}",
                    self.negative_prefix.as_deref().unwrap_or(self.lexicon.minus),
                    self.lexicon.word_joiner
                )
            } else {
                word.to_string()
            });
        }
        self.cardinal_decimal(&Decimal::from_f64(value)?)
    }

    /// Convert an already-normalized decimal to words.
    pub fn cardinal_decimal(&self, value: &Decimal) -> Result<String, LangError> {
        Ok(convert(
            value,
            &self.options(OutputFormat::Cardinal, false),
            None,
            &self.lexicon,
            &self.system,
            self.rule.as_ref(),
        )?)
    }

    /// Convert a decimal string to a currency amount using the handle's
    /// currency names.
    pub fn currency(&self, input: &str) -> Result<String, LangError> {
        let value = Decimal::parse(input)?;
        Ok(convert(
            &value,
            &self.options(OutputFormat::Cardinal, true),
            Some(&self.currency),
            &self.lexicon,
            &self.system,
            self.rule.as_ref(),
        )?)
    }

    /// Convert a signed year.
    pub fn year(&self, year: i64) -> Result<String, LangError> {
        let negative = year < 0;
        let magnitude = BigUint::from(year.unsigned_abs());
        Ok(numera_engine::overlay::year(
            negative,
            &magnitude,
            &self.options(OutputFormat::Year, false),
            &self.lexicon,
            &self.system,
            self.rule.as_ref(),
        )?)
    }

    /// The lexicon's fixed literal for non-finite input, for callers that do
    /// their own float screening.
    pub fn non_finite_literal(&self, nan: bool) -> &str {
        if nan {
            self.lexicon.not_a_number
        } else {
            self.lexicon.infinity
        }
    }

    fn options(&self, format: OutputFormat, currency: bool) -> ConvertOptions {
        ConvertOptions {
            format,
            currency,
            decimal_separator: self.decimal_separator,
            round: self.round_currency,
            gender: self.gender,
            negative_prefix: self.negative_prefix.clone(),
            include_era: self.include_era,
        }
    }
}

type LanguageParts = (
    LexiconTable,
    NumberingSystem,
    Box<dyn MorphologyRule + Send + Sync>,
    CurrencyInfo,
);

/// Resolve a language tag to its configuration. Region subtags select
/// variants ("en-IN"); unknown tags return `None`.
fn language_parts(tag: &str) -> Option<LanguageParts> {
    let normalized = tag.trim().replace('_', "-").to_lowercase();
    match normalized.as_str() {
        #[cfg(feature = "en")]
        "en" | "en-us" | "en-gb" => Some((
            crate::en::lexicon(),
            crate::en::system(),
            crate::en::rule(),
            crate::en::default_currency(),
        )),
        #[cfg(feature = "en-in")]
        "en-in" => Some((
            crate::en_in::lexicon(),
            crate::en_in::system(),
            crate::en_in::rule(),
            crate::en_in::default_currency(),
        )),
        #[cfg(feature = "fr")]
        "fr" | "fr-fr" => Some((
            crate::fr::lexicon(),
            crate::fr::system(),
            crate::fr::rule(),
            crate::fr::default_currency(),
        )),
        #[cfg(feature = "ru")]
        "ru" => Some((
            crate::ru::lexicon(),
            crate::ru::system(),
            crate::ru::rule(),
            crate::ru::default_currency(),
        )),
        #[cfg(feature = "ar")]
        "ar" => Some((
            crate::ar::lexicon(),
            crate::ar::system(),
            crate::ar::rule(),
            crate::ar::default_currency(),
        )),
        #[cfg(feature = "zh")]
        "zh" | "zh-cn" => Some((
            crate::zh::lexicon(),
            crate::zh::system(),
            crate::zh::rule(),
            crate::zh::default_currency(),
        )),
        #[cfg(feature = "si")]
        "si" => Some((
            crate::si::lexicon(),
            crate::si::system(),
            crate::si::rule(),
            crate::si::default_currency(),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_is_rejected() {
        let err = NumeraHandle::for_language("tlh").unwrap_err();
        assert!(matches!(err, LangError::UnsupportedLanguage(_)));
    }

    #[cfg(feature = "en")]
    #[test]
    fn tag_normalization() {
        assert!(NumeraHandle::for_language("en").is_ok());
        assert!(NumeraHandle::for_language("en-US").is_ok());
        assert!(NumeraHandle::for_language("EN").is_ok());
        assert!(NumeraHandle::for_language("en_US").is_ok());
    }

    #[cfg(feature = "en")]
    #[test]
    fn cardinal_roundtrip() {
        let handle = NumeraHandle::for_language("en").unwrap();
        assert_eq!(handle.cardinal("21").unwrap(), "twenty-one");
        assert_eq!(handle.cardinal("-3.5").unwrap(), "minus three point five");
    }

    #[cfg(feature = "en")]
    #[test]
    fn invalid_input_is_a_parse_error() {
        let handle = NumeraHandle::for_language("en").unwrap();
        assert!(matches!(
            handle.cardinal("not a number").unwrap_err(),
            LangError::Parse(_)
        ));
    }

    #[cfg(feature = "en")]
    #[test]
    fn non_finite_short_circuits() {
        let handle = NumeraHandle::for_language("en").unwrap();
        assert_eq!(handle.cardinal_f64(f64::INFINITY).unwrap(), "infinity");
        assert_eq!(
            handle.cardinal_f64(f64::NEG_INFINITY).unwrap(),
            "minus infinity"
        );
        assert_eq!(handle.cardinal_f64(f64::NAN).unwrap(), "not a number");
    }

    #[cfg(feature = "en")]
    #[test]
    fn currency_and_year() {
        let mut handle = NumeraHandle::for_language("en").unwrap();
        assert_eq!(handle.currency("1.01").unwrap(), "one dollar and one cent");
        assert_eq!(handle.year(-44).unwrap(), "forty-four BC");
        assert_eq!(handle.year(44).unwrap(), "forty-four");
        handle.set_include_era(true);
        assert_eq!(handle.year(44).unwrap(), "forty-four AD");
    }

    #[cfg(feature = "en")]
    #[test]
    fn currency_truncation_option() {
        let mut handle = NumeraHandle::for_language("en").unwrap();
        assert_eq!(
            handle.currency("1.999").unwrap(),
            "two dollars"
        );
        handle.set_round_currency(false);
        assert_eq!(
            handle.currency("1.999").unwrap(),
            "one dollar and ninety-nine cents"
        );
    }

    #[cfg(feature = "en")]
    #[test]
    fn custom_currency_info() {
        let mut handle = NumeraHandle::for_language("en").unwrap();
        handle.set_currency_info(CurrencyInfo::new("pound", "pounds", "penny", "pence"));
        assert_eq!(
            handle.currency("2.02").unwrap(),
            "two pounds and two pence"
        );
    }

    #[cfg(feature = "en")]
    #[test]
    fn scale_overflow_surfaces() {
        let handle = NumeraHandle::for_language("en").unwrap();
        let input = format!("1{}", "0".repeat(40));
        assert!(matches!(
            handle.cardinal(&input).unwrap_err(),
            LangError::Convert(ConvertError::ScaleOverflow { .. })
        ));
    }

    #[test]
    fn language_tags_listed() {
        assert!(!NumeraHandle::language_tags().is_empty());
    }
}
