// ScaleComposer: join rendered groups with scale words, elision, linking
// and fusion.
//
// All composition decisions (elision, zero bridging, terminal agreement,
// suffix conversion) are made structurally while the expression is built,
// never as a substitution pass over an already-built string.

use numera_core::context::{Gender, MorphContext, NumberRole};
use numera_core::forms::FormSlot;

use crate::ConvertError;
use crate::chunk::Group;
use crate::group::{RenderCtx, render_group};
use crate::lexicon::{Connector, GroupLink, LexiconTable};
use crate::morph::MorphologyRule;
use crate::system::{Elision, NumberingSystem};

/// Context for composing one magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeCtx {
    /// Gender the scale-0 numerals agree with (counted noun or language
    /// default).
    pub gender: Gender,
    pub role: NumberRole,
    /// False when further words (fraction, unit name) follow the integer
    /// words; suffixing languages then convert every word, and terminal
    /// agreement never fires.
    pub terminal: bool,
}

/// Compose the word sequence for a chunked magnitude.
///
/// Groups arrive most-significant first; zero groups are skipped but still
/// drive the inter-group zero bridge. The scale word's form is selected from
/// the group's own value, never from the whole magnitude.
pub fn compose(
    groups: &[Group],
    lexicon: &LexiconTable,
    system: &NumberingSystem,
    rule: &dyn MorphologyRule,
    ctx: &ComposeCtx,
) -> Result<String, ConvertError> {
    let last_nonzero = groups.iter().rposition(|g| g.value > 0);
    debug_assert!(last_nonzero.is_some());

    let mut words: Vec<String> = Vec::new();
    let mut prev_scale: Option<usize> = None;

    for (index, g) in groups.iter().enumerate() {
        if g.value == 0 {
            continue;
        }
        let is_first = prev_scale.is_none();
        let is_last = Some(index) == last_nonzero;

        let text = if g.scale == 0 {
            let rctx = RenderCtx {
                gender: ctx.gender,
                polarity: rule.polarity(),
                terminal: ctx.terminal && is_last,
                most_significant: is_first,
            };
            render_group(g.value, lexicon, &rctx)
        } else {
            render_scaled_group(g, lexicon, system, rule, is_first)?
        };

        link_group(&mut words, text, lexicon, g, prev_scale, system);
        prev_scale = Some(g.scale);
    }

    let mut out = words.join(" ");
    if let Some(conversions) = &lexicon.conversions {
        out = convert_nonfinal_words(&out, conversions, ctx.terminal);
    }
    Ok(out)
}

/// Render one group that carries a scale word.
fn render_scaled_group(
    g: &Group,
    lexicon: &LexiconTable,
    system: &NumberingSystem,
    rule: &dyn MorphologyRule,
    is_first: bool,
) -> Result<String, ConvertError> {
    let entry = system
        .scale(g.scale)
        .ok_or(ConvertError::UnsupportedMagnitude { scale: g.scale })?;

    let count = u64::from(g.value);
    let morph = MorphContext {
        count,
        gender: entry.gender,
        polarity: rule.polarity(),
        role: NumberRole::ScaleCount,
    };
    let slot = rule.select(count, &morph);
    let scale_word = entry.forms.resolve(slot);

    // Numeral elision before the scale word.
    let numeral = if g.value == 1 {
        match &entry.elision {
            Elision::DropOne => None,
            Elision::Replace(word) => Some((*word).to_string()),
            Elision::KeepOne => Some(render_numeral(g, lexicon, entry.gender, rule, is_first)),
        }
    } else if g.value == 2 && slot == FormSlot::Dual && lexicon.dual_absorbs_numeral {
        // The dual form of the scale word stands for "two x" on its own.
        None
    } else {
        Some(render_numeral(g, lexicon, entry.gender, rule, is_first))
    };

    Ok(match numeral {
        None => scale_word.to_string(),
        Some(numeral) => {
            let numeral = convert_last_word(numeral, lexicon);
            let joiner = match &lexicon.fusion {
                Some(fusion) => fusion.joiner(Connector::ScaleAttach, scale_word),
                None => lexicon.scale_joiner,
            };
            format!("{numeral}{joiner}{scale_word}")
        }
    })
}

fn render_numeral(
    g: &Group,
    lexicon: &LexiconTable,
    gender: Gender,
    rule: &dyn MorphologyRule,
    is_first: bool,
) -> String {
    let rctx = RenderCtx {
        gender,
        polarity: rule.polarity(),
        terminal: false, // a scale word always follows
        most_significant: is_first,
    };
    render_group(g.value, lexicon, &rctx)
}

/// A numeral directly followed by its scale word is never expression-final:
/// suffixing languages convert its last word to the bound form here.
fn convert_last_word(numeral: String, lexicon: &LexiconTable) -> String {
    let Some(conversions) = &lexicon.conversions else {
        return numeral;
    };
    match numeral.rsplit_once(' ') {
        Some((head, last)) => format!("{head} {}", conversions.convert_or_keep(last)),
        None => conversions.convert_or_keep(&numeral),
    }
}

/// Append a rendered group to the output, inserting the inter-group linker
/// and the zero bridge where the language requires them.
fn link_group(
    words: &mut Vec<String>,
    text: String,
    lexicon: &LexiconTable,
    g: &Group,
    prev_scale: Option<usize>,
    system: &NumberingSystem,
) {
    let bridge = prev_scale.is_some_and(|prev| needs_zero_bridge(prev, g, system));

    match &lexicon.group_link {
        GroupLink::Space => {
            if bridge {
                if let Some(zero) = lexicon.zero_bridge {
                    words.push(zero.to_string());
                }
            }
            words.push(text);
        }
        GroupLink::Conjunction { word, attach_next } => {
            if words.is_empty() {
                words.push(text);
            } else if *attach_next {
                words.push(format!("{word}{text}"));
            } else {
                words.push((*word).to_string());
                words.push(text);
            }
        }
        GroupLink::Concat => match words.last_mut() {
            Some(last) => {
                if bridge {
                    if let Some(zero) = lexicon.zero_bridge {
                        last.push_str(zero);
                    }
                }
                last.push_str(&text);
            }
            None => words.push(text),
        },
    }
}

/// The inter-group zero rule (distinct from the intra-group placeholder):
/// a bridge is required when one or more whole groups were zero, or when the
/// current group has a leading zero digit within its own width.
fn needs_zero_bridge(prev_scale: usize, g: &Group, system: &NumberingSystem) -> bool {
    if prev_scale > g.scale + 1 {
        return true;
    }
    g.value < system.group_radix(g.scale) / 10
}

/// Apply the bound combining form to every word that does not end the whole
/// expression. When the expression continues past these words (`terminal` is
/// false), the last word converts as well.
fn convert_nonfinal_words(
    text: &str,
    conversions: &crate::lexicon::ConversionTable,
    terminal: bool,
) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    let mut converted: Vec<String> = Vec::with_capacity(words.len());
    for (i, word) in words.iter().enumerate() {
        let is_final = i + 1 == words.len();
        if is_final && terminal {
            converted.push((*word).to_string());
        } else {
            converted.push(conversions.convert_or_keep(word));
        }
    }
    converted.join(" ")
}
