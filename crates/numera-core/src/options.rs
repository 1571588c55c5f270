// Conversion options.

use crate::context::Gender;

/// Output shape for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// A plain cardinal number.
    #[default]
    Cardinal,
    /// A calendar year (era suffix handling, per-language fixed gender).
    Year,
}

/// Which separator word introduces the fraction digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecimalSeparator {
    #[default]
    Point,
    Comma,
}

/// Options for one conversion call. A closed set: everything else a language
/// needs is part of its lexicon or numbering system.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConvertOptions {
    pub format: OutputFormat,
    /// Render as a currency amount (main/sub units).
    pub currency: bool,
    pub decimal_separator: DecimalSeparator,
    /// Round the fraction to two sub-unit digits instead of truncating.
    pub round: bool,
    /// Override the gender the number agrees with.
    pub gender: Option<Gender>,
    /// Override the language's negative prefix word.
    pub negative_prefix: Option<String>,
    /// Append the positive-era suffix to years (the negative-era suffix is
    /// always appended to negative years).
    pub include_era: bool,
}

impl ConvertOptions {
    pub fn cardinal() -> Self {
        Self::default()
    }

    pub fn year() -> Self {
        Self {
            format: OutputFormat::Year,
            ..Self::default()
        }
    }

    pub fn currency() -> Self {
        Self {
            currency: true,
            round: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = ConvertOptions::cardinal();
        assert_eq!(opts.format, OutputFormat::Cardinal);
        assert!(!opts.currency);
        assert_eq!(opts.decimal_separator, DecimalSeparator::Point);
        assert!(!opts.round);
        assert!(opts.gender.is_none());
        assert!(!opts.include_era);
    }

    #[test]
    fn currency_rounds_by_default() {
        assert!(ConvertOptions::currency().round);
    }

    #[test]
    fn year_format() {
        assert_eq!(ConvertOptions::year().format, OutputFormat::Year);
    }
}
