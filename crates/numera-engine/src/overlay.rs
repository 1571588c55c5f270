// Currency and year overlays on top of the numeral pipeline.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use numera_core::context::{MorphContext, NumberRole};
use numera_core::currency::CurrencyInfo;
use numera_core::decimal::Decimal;
use numera_core::forms::FormSlot;
use numera_core::options::{ConvertOptions, DecimalSeparator};

use crate::ConvertError;
use crate::chunk::chunk;
use crate::compose::{ComposeCtx, compose};
use crate::fraction::{render_fraction, trim_trailing_zeros};
use crate::lexicon::{EraPlacement, LexiconTable};
use crate::morph::MorphologyRule;
use crate::system::NumberingSystem;

/// Fold a count into the range agreement rules branch on. Above `u64` only
/// the last two digits matter (no rule distinguishes exact values past ten),
/// so oversized counts map to `200 + (count mod 100)`.
pub(crate) fn count_key(n: &BigUint) -> u64 {
    match n.to_u64() {
        Some(v) => v,
        None => 200 + (n % 100u32).to_u64().unwrap_or(0),
    }
}

pub(crate) fn separator_word(opts: &ConvertOptions, lexicon: &LexiconTable) -> &'static str {
    match opts.decimal_separator {
        DecimalSeparator::Point => lexicon.point_word,
        DecimalSeparator::Comma => lexicon.comma_word,
    }
}

fn negative_prefix<'a>(opts: &'a ConvertOptions, lexicon: &LexiconTable) -> &'a str {
    opts.negative_prefix.as_deref().unwrap_or(lexicon.minus)
}

/// Render a currency amount: main units from the integer part, sub-units
/// from the fraction scaled to two digits.
pub fn currency(
    value: &Decimal,
    opts: &ConvertOptions,
    info: &CurrencyInfo,
    lexicon: &LexiconTable,
    system: &NumberingSystem,
    rule: &dyn MorphologyRule,
) -> Result<String, ConvertError> {
    let (main, sub) = split_amount(value, opts.round);
    let gender = opts.gender.unwrap_or(info.unit_gender());

    let mut parts: Vec<String> = Vec::new();
    if value.is_negative() {
        parts.push(negative_prefix(opts, lexicon).to_string());
    }

    // Main amount.
    let main_count = count_key(&main);
    let morph = MorphContext {
        count: main_count,
        gender,
        polarity: rule.polarity(),
        role: NumberRole::CurrencyMain,
    };
    // A zero amount counts the unit in the genitive/plural, never the
    // singular.
    let slot = if main.is_zero() {
        FormSlot::GenitivePlural
    } else {
        rule.select(main_count, &morph)
    };
    let unit = info.main_forms().resolve(slot);
    if main.is_zero() {
        parts.push(lexicon.zero.to_string());
        parts.push(unit.to_string());
    } else if main_count == 2 && slot == FormSlot::Dual && lexicon.dual_absorbs_numeral {
        parts.push(unit.to_string());
    } else {
        let groups = chunk(&main, system)?;
        let ctx = ComposeCtx {
            gender,
            role: NumberRole::CurrencyMain,
            terminal: false, // the unit name always follows
        };
        parts.push(compose(&groups, lexicon, system, rule, &ctx)?);
        parts.push(unit.to_string());
    }

    // Sub-unit amount.
    if sub > 0 {
        match info.sub_forms() {
            Some(forms) => {
                let sub_gender = opts.gender.unwrap_or(info.sub_unit_gender());
                let morph = MorphContext {
                    count: u64::from(sub),
                    gender: sub_gender,
                    polarity: rule.polarity(),
                    role: NumberRole::CurrencySub,
                };
                let slot = rule.select(u64::from(sub), &morph);
                let unit = forms.resolve(slot);
                let sub_text = if sub == 2
                    && slot == FormSlot::Dual
                    && lexicon.dual_absorbs_numeral
                {
                    unit.to_string()
                } else {
                    let groups = chunk(&BigUint::from(sub), system)?;
                    let ctx = ComposeCtx {
                        gender: sub_gender,
                        role: NumberRole::CurrencySub,
                        terminal: false,
                    };
                    let amount = compose(&groups, lexicon, system, rule, &ctx)?;
                    format!("{amount}{}{unit}", lexicon.word_joiner)
                };
                match info.separator_word().or(lexicon.currency_joiner) {
                    // An attaching conjunction binds to the sub amount.
                    Some(sep) if attaches(lexicon, sep) => {
                        parts.push(format!("{sep}{sub_text}"));
                    }
                    Some(sep) => {
                        parts.push(sep.to_string());
                        parts.push(sub_text);
                    }
                    None => parts.push(sub_text),
                }
            }
            None => {
                // No sub-unit defined: speak the fraction digits plainly.
                let digits = format!("{sub:02}");
                let digits = trim_trailing_zeros(&digits);
                parts.push(render_fraction(digits, separator_word(opts, lexicon), lexicon));
            }
        }
    }

    Ok(parts.join(lexicon.word_joiner))
}

/// Whether a currency separator is the language's attaching conjunction.
fn attaches(lexicon: &LexiconTable, sep: &str) -> bool {
    matches!(
        lexicon.group_link,
        crate::lexicon::GroupLink::Conjunction {
            word,
            attach_next: true,
        } if word == sep
    )
}

/// Split a decimal into whole main units and 0..=99 sub-units.
fn split_amount(value: &Decimal, round: bool) -> (BigUint, u32) {
    let mut main = value.magnitude().clone();
    let digits = value.fraction_digits();
    let digit_at = |i: usize| digits.as_bytes().get(i).map_or(0, |b| u32::from(b - b'0'));

    let mut sub = digit_at(0) * 10 + digit_at(1);
    if round && digit_at(2) >= 5 {
        sub += 1;
    }
    if sub == 100 {
        main += BigUint::one();
        sub = 0;
    }
    (main, sub)
}

/// Render a year, consulting the irregular-year table first.
///
/// The era token for negative years is applied unconditionally; the positive
/// era token only when the caller asked for it.
pub fn year(
    negative: bool,
    magnitude: &BigUint,
    opts: &ConvertOptions,
    lexicon: &LexiconTable,
    system: &NumberingSystem,
    rule: &dyn MorphologyRule,
) -> Result<String, ConvertError> {
    let era = if negative {
        Some(lexicon.era.negative)
    } else if opts.include_era {
        Some(lexicon.era.positive)
    } else {
        None
    };

    let exception = magnitude
        .to_u64()
        .and_then(|y| lexicon.year_exceptions.get(&y).copied());
    let body = match exception {
        Some(text) => text.to_string(),
        None if magnitude.is_zero() => lexicon.zero.to_string(),
        None => {
            let groups = chunk(magnitude, system)?;
            let ctx = ComposeCtx {
                gender: opts.gender.unwrap_or(lexicon.year_gender),
                role: NumberRole::Year,
                // Era tokens annotate the year rather than continue the
                // numeral expression, so the body always composes as final.
                terminal: true,
            };
            compose(&groups, lexicon, system, rule, &ctx)?
        }
    };

    Ok(match (era, lexicon.era.placement) {
        (None, _) => body,
        (Some(era), EraPlacement::Suffix) => {
            format!("{body}{}{era}", lexicon.word_joiner)
        }
        (Some(era), EraPlacement::Prefix) => {
            format!("{era}{}{body}", lexicon.word_joiner)
        }
    })
}
