// Caller-supplied currency unit names.

use crate::context::Gender;
use crate::forms::FormSet;

/// Names and forms for one currency, supplied by the caller and read-only to
/// the engine.
///
/// The unit names are resolved into [`FormSet`]s at construction time, so the
/// engine applies the same agreement rule to a currency unit as to any scale
/// word instead of re-deriving forms per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyInfo {
    main: FormSet,
    sub: Option<FormSet>,
    /// Word(s) inserted between the main and sub amounts. `None` uses the
    /// language default conjunction.
    separator: Option<String>,
    /// Gender the main unit noun carries, for languages that agree on it.
    gender: Gender,
    /// Gender of the sub-unit noun, when it differs from the main unit.
    sub_gender: Option<Gender>,
}

impl CurrencyInfo {
    /// A currency whose unit names follow the singular/plural pattern.
    pub fn new(main_singular: &str, main_plural: &str, sub_singular: &str, sub_plural: &str) -> Self {
        Self {
            main: FormSet::plural(main_singular, main_plural),
            sub: Some(FormSet::plural(sub_singular, sub_plural)),
            separator: None,
            gender: Gender::None,
            sub_gender: None,
        }
    }

    /// A currency with fully specified form sets.
    pub fn with_forms(main: FormSet, sub: Option<FormSet>) -> Self {
        Self {
            main,
            sub,
            separator: None,
            gender: Gender::None,
            sub_gender: None,
        }
    }

    /// Override the main/sub separator word.
    pub fn separator(mut self, sep: &str) -> Self {
        self.separator = Some(sep.to_string());
        self
    }

    /// Set the grammatical gender of the main unit noun.
    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Set the sub-unit noun's gender where it differs from the main unit.
    pub fn sub_gender(mut self, gender: Gender) -> Self {
        self.sub_gender = Some(gender);
        self
    }

    pub fn main_forms(&self) -> &FormSet {
        &self.main
    }

    pub fn sub_forms(&self) -> Option<&FormSet> {
        self.sub.as_ref()
    }

    pub fn separator_word(&self) -> Option<&str> {
        self.separator.as_deref()
    }

    pub fn unit_gender(&self) -> Gender {
        self.gender
    }

    pub fn sub_unit_gender(&self) -> Gender {
        self.sub_gender.unwrap_or(self.gender)
    }
}
