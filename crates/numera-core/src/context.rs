// Grammatical context threaded through one conversion call.

/// Grammatical gender of a counted noun or numeral word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    Masc,
    Fem,
    Neuter,
    /// The language does not mark gender on numerals.
    #[default]
    None,
}

impl Gender {
    /// The opposite gender, used by polarity agreement (a numeral taking the
    /// gender opposite to the noun it counts). `Neuter` and `None` are their
    /// own opposites.
    pub fn opposite(self) -> Gender {
        match self {
            Gender::Masc => Gender::Fem,
            Gender::Fem => Gender::Masc,
            other => other,
        }
    }
}

/// What the number being rendered stands for. Scale words and counted nouns
/// agree differently depending on this role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumberRole {
    /// A bare cardinal.
    #[default]
    Standalone,
    /// The count in front of a scale word (thousand, lakh, ...).
    ScaleCount,
    /// The main currency amount.
    CurrencyMain,
    /// The sub-unit currency amount.
    CurrencySub,
    /// A calendar year.
    Year,
}

/// Per-call morphological context.
///
/// Created fresh for every conversion and never shared across calls. `count`
/// is the value the agreement rule inspects; counts that exceed `u64` are
/// folded by the caller so that the last two digits (the only thing any
/// agreement rule branches on above ten) are preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MorphContext {
    pub count: u64,
    pub gender: Gender,
    /// Whether the numeral word takes the opposite gender of the counted noun.
    pub polarity: bool,
    pub role: NumberRole,
}

impl MorphContext {
    pub fn new(count: u64, gender: Gender, role: NumberRole) -> Self {
        Self {
            count,
            gender,
            polarity: false,
            role,
        }
    }

    /// The gender the numeral word itself renders in, after polarity.
    pub fn numeral_gender(&self) -> Gender {
        if self.polarity {
            self.gender.opposite()
        } else {
            self.gender
        }
    }
}
