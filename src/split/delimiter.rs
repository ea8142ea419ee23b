use crate::Error;

use super::{Rules, VecRules};

/// How a [`Delimiter`] is compared to an item.
///
/// [`Delimiter`]: struct.Delimiter.html
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matching {
    /// The item equals the delimiter.
    Equal,
    /// The item starts with the delimiter.
    Prefix,
    /// The item ends with the delimiter.
    Suffix,
    /// The item contains the delimiter.
    Contains,
}

/// String predicate that detects run starts by comparing every item to a
/// fixed delimiter.
///
/// # Examples
///
/// ```
/// use runsplit::*;
///
/// let delimiter = Delimiter::equal("END")?.ignore_case();
///
/// assert!(delimiter.matches("end"));
/// assert!(!delimiter.matches("ending"));
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiter {
    text: String,
    upper: String,
    matching: Matching,
    ignore_case: bool,
}

impl Delimiter {
    /// Creates a case sensitive delimiter. Fails if `text` is empty.
    pub fn new<S>(text: S, matching: Matching) -> Result<Self, Error>
    where
        S: Into<String>,
    {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::EmptyDelimiter);
        }

        Ok(Self {
            upper: String::new(),
            text,
            matching,
            ignore_case: false,
        })
    }

    /// Matches items equal to `text`.
    pub fn equal<S: Into<String>>(text: S) -> Result<Self, Error> {
        Self::new(text, Matching::Equal)
    }

    /// Matches items starting with `text`.
    pub fn prefix<S: Into<String>>(text: S) -> Result<Self, Error> {
        Self::new(text, Matching::Prefix)
    }

    /// Matches items ending with `text`.
    pub fn suffix<S: Into<String>>(text: S) -> Result<Self, Error> {
        Self::new(text, Matching::Suffix)
    }

    /// Matches items containing `text`.
    pub fn contains<S: Into<String>>(text: S) -> Result<Self, Error> {
        Self::new(text, Matching::Contains)
    }

    /// Compare without regard to case.
    ///
    /// [`Matching::Equal`] compares one character at a time, so characters
    /// whose upper case form has a different length never match
    /// (`"straße"` is not equal to `"STRASSE"`). The other modes upper-case
    /// the delimiter and the item before searching.
    ///
    /// [`Matching::Equal`]: enum.Matching.html#variant.Equal
    pub fn ignore_case(mut self) -> Self {
        if !self.ignore_case {
            self.upper = self.text.to_uppercase();
            self.ignore_case = true;
        }

        self
    }

    /// How items are compared to the delimiter.
    pub fn matching(&self) -> Matching {
        self.matching
    }

    /// Returns `true` if `value` starts a new run.
    pub fn matches(&self, value: &str) -> bool {
        match (self.ignore_case, self.matching) {
            (false, _) => self.compare(&self.text, value),
            (true, Matching::Equal) => equal_ignore_case(&self.text, value),
            (true, _) => self.compare(&self.upper, &value.to_uppercase()),
        }
    }

    /// Rules splitting at every matching item, collecting into `Vec<Vec<T>>`.
    pub fn into_rules<T>(self, exclude_trigger: bool) -> VecRules<T, impl Fn(&T) -> bool + Clone + Send + Sync>
    where
        T: AsRef<str>,
    {
        Rules::new(move |item: &T| self.matches(item.as_ref()), exclude_trigger)
    }

    fn compare(&self, text: &str, value: &str) -> bool {
        match self.matching {
            Matching::Equal => value == text,
            Matching::Prefix => value.starts_with(text),
            Matching::Suffix => value.ends_with(text),
            Matching::Contains => value.contains(text),
        }
    }
}

fn equal_ignore_case(a: &str, b: &str) -> bool {
    let mut a = a.chars();
    let mut b = b.chars();

    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if char_equal_ignore_case(x, y) => (),
            _ => return false,
        }
    }
}

fn char_equal_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase()) || a.to_lowercase().eq(b.to_lowercase())
}
