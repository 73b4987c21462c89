//! Enumerated-field codecs.
//!
//! Enumerated profile fields travel as short codes (`"0"`, `"1"`,
//! `"passport"`, ...) and display as human labels (`Mailing`, `Work`,
//! `Passport`, ...). Each [`CodeSet`] maps one field's codes to labels, both
//! directions. A code or label outside the known set passes through verbatim
//! in either direction -- never dropped, never blanked.

/// Bidirectional code ⇄ label mapping for one enumerated field.
#[derive(Debug, Clone, Copy)]
pub struct CodeSet {
    pairs: &'static [(&'static str, &'static str)],
    /// Whether the field's select offers an empty "not chosen" state.
    allow_blank: bool,
}

/// Address `type`: `"0"` Mailing, `"1"` Work.
pub const ADDRESS_KIND: CodeSet = CodeSet::new(&[("0", "Mailing"), ("1", "Work")]);

/// Email/phone `type`: `"0"` Personal, `"1"` Work.
pub const CONTACT_KIND: CodeSet = CodeSet::new(&[("0", "Personal"), ("1", "Work")]);

/// Email/phone `preferred`: `"true"` Yes, `"false"` No. No blank state;
/// blank rows start at `"false"`.
pub const PREFERRED: CodeSet = CodeSet::without_blank(&[("true", "Yes"), ("false", "No")]);

/// Identification document `idtype`.
pub const ID_KIND: CodeSet = CodeSet::new(&[
    ("passport", "Passport"),
    ("driver_license", "Driver License"),
    ("national_id", "National ID"),
]);

/// Occupation `occupation`.
pub const OCCUPATION_KIND: CodeSet = CodeSet::new(&[
    ("student", "Student"),
    ("engineer", "Engineer"),
    ("teacher", "Teacher"),
    ("doctor", "Doctor"),
    ("business", "Business"),
    ("other", "Other"),
]);

impl CodeSet {
    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            pairs,
            allow_blank: true,
        }
    }

    pub const fn without_blank(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            pairs,
            allow_blank: false,
        }
    }

    /// Display label for a stored code. Unknown codes pass through verbatim.
    pub fn label_for<'a>(&self, code: &'a str) -> &'a str {
        for (c, label) in self.pairs {
            if *c == code {
                return label;
            }
        }
        code
    }

    /// Stored code for a display label. Unknown labels pass through verbatim.
    pub fn code_for<'a>(&self, label: &'a str) -> &'a str {
        for (c, l) in self.pairs {
            if *l == label {
                return c;
            }
        }
        label
    }

    /// Whether `code` is one of the known codes.
    pub fn contains_code(&self, code: &str) -> bool {
        self.pairs.iter().any(|(c, _)| *c == code)
    }

    /// Known codes in select order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(c, _)| *c)
    }

    /// The code a select moves to from `current`.
    ///
    /// Cycles through the known codes in order, passing through the blank
    /// "not chosen" state when the field offers one. An unknown current code
    /// moves to the first known code.
    pub fn cycle(&self, current: &str) -> &'static str {
        if current.is_empty() {
            return self.pairs.first().map(|(c, _)| *c).unwrap_or("");
        }
        let Some(pos) = self.pairs.iter().position(|(c, _)| *c == current) else {
            return self.pairs.first().map(|(c, _)| *c).unwrap_or("");
        };
        match self.pairs.get(pos + 1) {
            Some((next, _)) => next,
            None if self.allow_blank => "",
            // Wrap directly to the first code when no blank state exists
            None => self.pairs[0].0,
        }
    }
}
