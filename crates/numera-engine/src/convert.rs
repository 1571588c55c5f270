// The language-agnostic entry point.

use numera_core::context::NumberRole;
use numera_core::currency::CurrencyInfo;
use numera_core::decimal::Decimal;
use numera_core::options::{ConvertOptions, OutputFormat};
use num_traits::Zero;

use crate::ConvertError;
use crate::chunk::chunk;
use crate::compose::{ComposeCtx, compose};
use crate::fraction::{render_fraction, trim_trailing_zeros};
use crate::lexicon::LexiconTable;
use crate::morph::MorphologyRule;
use crate::overlay;
use crate::system::NumberingSystem;

/// Convert a normalized decimal into words.
///
/// Dispatches to the currency or year overlay when the options request one;
/// otherwise renders a plain cardinal with an optional fraction. The caller
/// owns all fallback behavior: on error no partial text is produced.
pub fn convert(
    value: &Decimal,
    options: &ConvertOptions,
    currency_info: Option<&CurrencyInfo>,
    lexicon: &LexiconTable,
    system: &NumberingSystem,
    rule: &dyn MorphologyRule,
) -> Result<String, ConvertError> {
    if options.currency {
        if let Some(info) = currency_info {
            return overlay::currency(value, options, info, lexicon, system, rule);
        }
    }
    if options.format == OutputFormat::Year {
        return overlay::year(
            value.is_negative(),
            value.magnitude(),
            options,
            lexicon,
            system,
            rule,
        );
    }
    cardinal(value, options, lexicon, system, rule)
}

fn cardinal(
    value: &Decimal,
    options: &ConvertOptions,
    lexicon: &LexiconTable,
    system: &NumberingSystem,
    rule: &dyn MorphologyRule,
) -> Result<String, ConvertError> {
    let mut parts: Vec<String> = Vec::new();
    if value.is_negative() {
        let prefix = options
            .negative_prefix
            .as_deref()
            .unwrap_or(lexicon.minus);
        parts.push(prefix.to_string());
    }

    let frac = trim_trailing_zeros(value.fraction_digits());

    // Zero is the literal zero word; it never enters the group pipeline.
    if value.magnitude().is_zero() {
        parts.push(lexicon.zero.to_string());
    } else {
        let groups = chunk(value.magnitude(), system)?;
        let ctx = ComposeCtx {
            gender: options.gender.unwrap_or(lexicon.default_gender),
            role: NumberRole::Standalone,
            terminal: frac.is_empty(),
        };
        parts.push(compose(&groups, lexicon, system, rule, &ctx)?);
    }

    if !frac.is_empty() {
        parts.push(render_fraction(
            frac,
            overlay::separator_word(options, lexicon),
            lexicon,
        ));
    }

    Ok(parts.join(lexicon.word_joiner))
}
