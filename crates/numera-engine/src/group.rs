// GroupRenderer: one in-range group value to words.

use numera_core::context::Gender;

use crate::lexicon::{GroupStyle, Hundreds, LexiconTable, TensStyle};

/// Positional context for rendering one group.
///
/// `terminal` is true when the group's words end the whole expression (no
/// further group, scale word, fraction or unit name follows) -- this drives
/// terminal-position agreement such as the French plural "-s".
/// `most_significant` is true for the group that opens the expression, which
/// drives the Chinese-family leading-ten elision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderCtx {
    pub gender: Gender,
    pub polarity: bool,
    pub terminal: bool,
    pub most_significant: bool,
}

/// The gender a single unit word renders in. Polarity only inverts the
/// numerals 3..=10; one and two agree with the noun directly.
fn unit_gender(ctx: &RenderCtx, unit: u32) -> Gender {
    if ctx.polarity && (3..=10).contains(&unit) {
        ctx.gender.opposite()
    } else {
        ctx.gender
    }
}

fn unit_word(lexicon: &LexiconTable, unit: u32, ctx: &RenderCtx) -> &'static str {
    lexicon.unit_word(unit as usize, unit_gender(ctx, unit))
}

/// Render one group value into words.
///
/// The value must be within the numbering system's group range; zero groups
/// never reach the renderer (the composer skips them, and a zero magnitude is
/// rendered as the literal zero word before the pipeline starts).
pub fn render_group(value: u32, lexicon: &LexiconTable, ctx: &RenderCtx) -> String {
    debug_assert!(value > 0);
    match &lexicon.group_style {
        GroupStyle::Western {
            hundreds,
            tens_style,
            tens_units_joiner,
            hundred_joiner,
            terminal_plural,
        } => render_western(
            value,
            lexicon,
            ctx,
            hundreds,
            tens_style,
            tens_units_joiner,
            hundred_joiner,
            *terminal_plural,
        ),
        GroupStyle::Conjoined {
            hundreds,
            conjunction,
            units_before_tens,
        } => render_conjoined(value, lexicon, ctx, hundreds, conjunction, *units_before_tens),
        GroupStyle::Multiplicative {
            ten,
            hundred,
            thousand,
            zero,
            elide_leading_ten,
        } => render_multiplicative(value, lexicon, ctx, ten, hundred, thousand, zero, *elide_leading_ten),
    }
}

#[allow(clippy::too_many_arguments)]
fn render_western(
    value: u32,
    lexicon: &LexiconTable,
    ctx: &RenderCtx,
    hundreds: &Hundreds,
    tens_style: &TensStyle,
    tens_units_joiner: &str,
    hundred_joiner: &str,
    terminal_plural: Option<&'static str>,
) -> String {
    let h = value / 100;
    let r = value % 100;
    let mut parts: Vec<String> = Vec::new();

    if h > 0 {
        let mut text = match hundreds {
            Hundreds::Multiplied { word, elide_one } => {
                if h == 1 && *elide_one {
                    (*word).to_string()
                } else {
                    format!("{} {}", unit_word(lexicon, h, ctx), word)
                }
            }
            Hundreds::Fused(table) => table[h as usize].to_string(),
        };
        // Terminal-position agreement: the hundreds word is the final word of
        // the expression, and more than one hundred is counted.
        if ctx.terminal && r == 0 && h >= 2 {
            if let Some(suffix) = terminal_plural {
                text.push_str(suffix);
            }
        }
        parts.push(text);
    }

    if r > 0 {
        parts.push(render_western_tens(
            r,
            lexicon,
            ctx,
            tens_style,
            tens_units_joiner,
            terminal_plural,
        ));
    }

    parts.join(hundred_joiner)
}

fn render_western_tens(
    r: u32,
    lexicon: &LexiconTable,
    ctx: &RenderCtx,
    tens_style: &TensStyle,
    joiner: &str,
    terminal_plural: Option<&'static str>,
) -> String {
    if r < 10 {
        return unit_word(lexicon, r, ctx).to_string();
    }
    if r < 20 {
        return lexicon.teens[(r - 10) as usize].to_string();
    }
    let d = r / 10;
    let u = r % 10;

    match tens_style {
        TensStyle::Regular { et_word } => {
            let mut tens_word = lexicon.tens[d as usize].to_string();
            if u == 0 {
                return tens_word;
            }
            // Compounding languages convert the tens word to its bound form
            // before attaching the unit.
            if joiner.is_empty() {
                if let Some(conversions) = &lexicon.conversions {
                    tens_word = conversions.convert_or_keep(&tens_word);
                }
            }
            if u == 1 {
                if let Some(et) = et_word {
                    return format!("{tens_word} {et} {}", unit_word(lexicon, u, ctx));
                }
            }
            format!("{tens_word}{joiner}{}", unit_word(lexicon, u, ctx))
        }
        TensStyle::Vigesimal { et_word } => {
            match d {
                // 70 and 90: previous decade stem + teen.
                7 | 9 => {
                    let stem = lexicon.tens[(d - 1) as usize];
                    let teen = lexicon.teens[u as usize];
                    if d == 7 && u == 1 {
                        format!("{stem} {et_word} {teen}")
                    } else {
                        format!("{stem}{joiner}{teen}")
                    }
                }
                // 80: base-20 stem; bare 80 takes the terminal plural marker.
                8 => {
                    let stem = lexicon.tens[8];
                    if u == 0 {
                        match terminal_plural {
                            Some(suffix) if ctx.terminal => format!("{stem}{suffix}"),
                            _ => stem.to_string(),
                        }
                    } else {
                        format!("{stem}{joiner}{}", unit_word(lexicon, u, ctx))
                    }
                }
                _ => {
                    let tens_word = lexicon.tens[d as usize];
                    if u == 0 {
                        tens_word.to_string()
                    } else if u == 1 {
                        format!("{tens_word} {et_word} {}", unit_word(lexicon, u, ctx))
                    } else {
                        format!("{tens_word}{joiner}{}", unit_word(lexicon, u, ctx))
                    }
                }
            }
        }
    }
}

fn render_conjoined(
    value: u32,
    lexicon: &LexiconTable,
    ctx: &RenderCtx,
    hundreds: &[&'static str; 10],
    conjunction: &str,
    units_before_tens: bool,
) -> String {
    let h = value / 100;
    let r = value % 100;
    let mut words: Vec<String> = Vec::new();

    if h > 0 {
        words.push(hundreds[h as usize].to_string());
    }
    if r > 0 {
        if r < 10 {
            words.push(unit_word(lexicon, r, ctx).to_string());
        } else if r < 20 {
            words.push(lexicon.teens[(r - 10) as usize].to_string());
        } else {
            let d = r / 10;
            let u = r % 10;
            if u > 0 && units_before_tens {
                words.push(unit_word(lexicon, u, ctx).to_string());
                words.push(lexicon.tens[d as usize].to_string());
            } else if u > 0 {
                words.push(lexicon.tens[d as usize].to_string());
                words.push(unit_word(lexicon, u, ctx).to_string());
            } else {
                words.push(lexicon.tens[d as usize].to_string());
            }
        }
    }

    // The conjunction binds to the word that follows it.
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push(' ');
            out.push_str(conjunction);
        }
        out.push_str(word);
    }
    out
}

#[allow(clippy::too_many_arguments)]
fn render_multiplicative(
    value: u32,
    lexicon: &LexiconTable,
    ctx: &RenderCtx,
    ten: &str,
    hundred: &str,
    thousand: &str,
    zero: &str,
    elide_leading_ten: bool,
) -> String {
    let digits = [
        (value / 1000, Some(thousand)),
        ((value / 100) % 10, Some(hundred)),
        ((value / 10) % 10, Some(ten)),
        (value % 10, None),
    ];

    let mut out = String::new();
    let mut started = false;
    // Tracks "a zero place was skipped since the last rendered digit"; the
    // placeholder is emitted once, and only when a lower place turns out to
    // be non-zero. This state never leaves the group.
    let mut pending_zero = false;

    for (index, (digit, place)) in digits.into_iter().enumerate() {
        if digit == 0 {
            if started {
                pending_zero = true;
            }
            continue;
        }
        if pending_zero {
            out.push_str(zero);
            pending_zero = false;
        }
        // index 2 is the tens place.
        let elide_one =
            digit == 1 && index == 2 && !started && elide_leading_ten && ctx.most_significant;
        if !elide_one {
            out.push_str(unit_word(lexicon, digit, ctx));
        }
        if let Some(place_word) = place {
            out.push_str(place_word);
        }
        started = true;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{GroupStyle, Hundreds, TensStyle};
    use crate::testutil;

    fn base_lexicon(style: GroupStyle) -> LexiconTable {
        let mut lex = testutil::english_lexicon();
        lex.group_style = style;
        lex
    }

    fn english() -> LexiconTable {
        testutil::english_lexicon()
    }

    fn french() -> LexiconTable {
        let mut lex = base_lexicon(GroupStyle::Western {
            hundreds: Hundreds::Multiplied {
                word: "cent",
                elide_one: true,
            },
            tens_style: TensStyle::Vigesimal { et_word: "et" },
            tens_units_joiner: "-",
            hundred_joiner: " ",
            terminal_plural: Some("s"),
        });
        lex.units = [
            "", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
        ];
        lex.teens = [
            "dix", "onze", "douze", "treize", "quatorze", "quinze", "seize", "dix-sept",
            "dix-huit", "dix-neuf",
        ];
        lex.tens = [
            "", "", "vingt", "trente", "quarante", "cinquante", "soixante", "", "quatre-vingt", "",
        ];
        lex
    }

    fn chinese() -> LexiconTable {
        let mut lex = base_lexicon(GroupStyle::Multiplicative {
            ten: "十",
            hundred: "百",
            thousand: "千",
            zero: "零",
            elide_leading_ten: true,
        });
        lex.units = ["", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
        lex
    }

    fn ctx() -> RenderCtx {
        RenderCtx::default()
    }

    fn terminal_ctx() -> RenderCtx {
        RenderCtx {
            terminal: true,
            ..RenderCtx::default()
        }
    }

    #[test]
    fn english_units_and_teens() {
        let lex = english();
        assert_eq!(render_group(7, &lex, &ctx()), "seven");
        assert_eq!(render_group(13, &lex, &ctx()), "thirteen");
    }

    #[test]
    fn english_tens_hyphenation() {
        let lex = english();
        assert_eq!(render_group(20, &lex, &ctx()), "twenty");
        assert_eq!(render_group(42, &lex, &ctx()), "forty-two");
    }

    #[test]
    fn english_hundreds() {
        let lex = english();
        assert_eq!(render_group(100, &lex, &ctx()), "one hundred");
        assert_eq!(render_group(999, &lex, &ctx()), "nine hundred ninety-nine");
        assert_eq!(render_group(205, &lex, &ctx()), "two hundred five");
    }

    #[test]
    fn french_elides_one_hundred() {
        let lex = french();
        assert_eq!(render_group(100, &lex, &ctx()), "cent");
        assert_eq!(render_group(101, &lex, &ctx()), "cent un");
    }

    #[test]
    fn french_et_un() {
        let lex = french();
        assert_eq!(render_group(21, &lex, &ctx()), "vingt et un");
        assert_eq!(render_group(61, &lex, &ctx()), "soixante et un");
        assert_eq!(render_group(22, &lex, &ctx()), "vingt-deux");
    }

    #[test]
    fn french_vigesimal_seventies_and_nineties() {
        let lex = french();
        assert_eq!(render_group(70, &lex, &ctx()), "soixante-dix");
        assert_eq!(render_group(71, &lex, &ctx()), "soixante et onze");
        assert_eq!(render_group(77, &lex, &ctx()), "soixante-dix-sept");
        assert_eq!(render_group(90, &lex, &ctx()), "quatre-vingt-dix");
        assert_eq!(render_group(91, &lex, &ctx()), "quatre-vingt-onze");
        assert_eq!(render_group(99, &lex, &ctx()), "quatre-vingt-dix-neuf");
    }

    #[test]
    fn french_eighties() {
        let lex = french();
        assert_eq!(render_group(80, &lex, &terminal_ctx()), "quatre-vingts");
        assert_eq!(render_group(80, &lex, &ctx()), "quatre-vingt");
        assert_eq!(render_group(81, &lex, &terminal_ctx()), "quatre-vingt-un");
        assert_eq!(render_group(85, &lex, &ctx()), "quatre-vingt-cinq");
    }

    #[test]
    fn french_terminal_hundreds_plural() {
        let lex = french();
        assert_eq!(render_group(200, &lex, &terminal_ctx()), "deux cents");
        assert_eq!(render_group(200, &lex, &ctx()), "deux cent");
        assert_eq!(render_group(201, &lex, &terminal_ctx()), "deux cent un");
        assert_eq!(render_group(100, &lex, &terminal_ctx()), "cent");
        assert_eq!(
            render_group(380, &lex, &terminal_ctx()),
            "trois cent quatre-vingts"
        );
    }

    #[test]
    fn multiplicative_basic() {
        let lex = chinese();
        assert_eq!(render_group(5, &lex, &ctx()), "五");
        assert_eq!(render_group(42, &lex, &ctx()), "四十二");
        assert_eq!(render_group(360, &lex, &ctx()), "三百六十");
        assert_eq!(render_group(7777, &lex, &ctx()), "七千七百七十七");
    }

    #[test]
    fn multiplicative_zero_insertion() {
        let lex = chinese();
        assert_eq!(render_group(105, &lex, &ctx()), "一百零五");
        assert_eq!(render_group(1005, &lex, &ctx()), "一千零五");
        assert_eq!(render_group(1050, &lex, &ctx()), "一千零五十");
        // A run of zero places inserts the placeholder once.
        assert_eq!(render_group(1500, &lex, &ctx()), "一千五百");
    }

    #[test]
    fn multiplicative_leading_ten_elision() {
        let lex = chinese();
        let leading = RenderCtx {
            most_significant: true,
            ..RenderCtx::default()
        };
        assert_eq!(render_group(15, &lex, &leading), "十五");
        // Not the opening group: keep the multiplier.
        assert_eq!(render_group(15, &lex, &ctx()), "一十五");
        // Internal tens always keep it.
        assert_eq!(render_group(115, &lex, &leading), "一百一十五");
    }

    #[test]
    fn conjoined_units_before_tens() {
        let mut lex = base_lexicon(GroupStyle::Conjoined {
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
        });
        lex.units = [
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
        ];
        lex.teens = [
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
        ];
        lex.tens = [
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
        ];
        assert_eq!(render_group(25, &lex, &ctx()), "خمسة وعشرون");
        assert_eq!(render_group(125, &lex, &ctx()), "مائة وخمسة وعشرون");
        assert_eq!(render_group(110, &lex, &ctx()), "مائة وعشرة");
        assert_eq!(render_group(200, &lex, &ctx()), "مائتان");
        assert_eq!(render_group(19, &lex, &ctx()), "تسعة عشر");
    }

    #[test]
    fn polarity_flips_only_three_through_ten() {
        let mut lex = english();
        // Synthetic gendered tables to observe the selection.
        lex.units_masc = Some(["", "oneM", "twoM", "threeM", "", "", "", "", "", ""]);
        lex.units_fem = Some(["", "oneF", "twoF", "threeF", "", "", "", "", "", ""]);
        let polar_fem = RenderCtx {
            gender: Gender::Fem,
            polarity: true,
            ..RenderCtx::default()
        };
        // 1 and 2 agree with the noun; 3 flips to the opposite gender.
        assert_eq!(render_group(1, &lex, &polar_fem), "oneF");
        assert_eq!(render_group(2, &lex, &polar_fem), "twoF");
        assert_eq!(render_group(3, &lex, &polar_fem), "threeM");
    }
}
