//! Runtime lookups over the table of registered status codes
//!
//! The table is fixed at compile time. Nothing in this module can add, remove or change an entry.
use crate::class::StatusClass;
use crate::error::Error;
use crate::status::{StatusCode, ALL};
use convert_case::{Case, Casing};
use std::str::FromStr;

/// Returns every registered status code, in ascending order of value
pub fn all() -> &'static [StatusCode] {
    ALL
}

/// Returns the registered status codes that belong to `class`, in ascending order of value
pub fn in_class(class: StatusClass) -> impl Iterator<Item = &'static StatusCode> {
    ALL.iter().filter(move |code| code.class() == class)
}

/// Returns the status code registered under the symbolic `name`.
///
/// The name must match exactly, e.g. `NOT_FOUND`. Use [`str::parse`] for a more lenient lookup.
pub fn lookup(name: &str) -> Result<&'static StatusCode, Error> {
    match ALL.iter().find(|code| code.name() == name) {
        Some(code) => Ok(code),
        None => {
            log::debug!(name = name; "No status code registered under this name");
            Err(Error::UnknownName(name.to_string()))
        }
    }
}

/// Returns the numeric value of the status code registered under the symbolic `name`
///
/// ```
/// use http_status::{registry, Error};
///
/// assert_eq!(registry::value_of("NOT_FOUND"), Ok(404));
/// assert_eq!(
///     registry::value_of("DOES_NOT_EXIST"),
///     Err(Error::UnknownName("DOES_NOT_EXIST".into()))
/// );
/// ```
pub fn value_of(name: &str) -> Result<u16, Error> {
    lookup(name).map(StatusCode::value)
}

/// Returns the status code registered with the numeric `value`
pub fn from_value(value: u16) -> Result<&'static StatusCode, Error> {
    match ALL.binary_search_by_key(&value, StatusCode::value) {
        Ok(index) => Ok(&ALL[index]),
        Err(_) => {
            log::debug!(value = value; "No status code registered with this value");
            Err(Error::UnregisteredValue(value))
        }
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        from_value(value).copied()
    }
}

impl FromStr for StatusCode {
    type Err = Error;

    /// Parses a numeric value, a title, or a symbolic name.
    ///
    /// - `"404"`, and `"404 Not Found"` as produced by the `Display` impl.
    /// - the RFC title, ignoring ASCII case: `"Request-URI Too Long"`.
    /// - the symbolic name, converted to upper snake case first, so `"not-found"` and
    ///   `"NotFound"` resolve to [`StatusCode::NOT_FOUND`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let unknown = || Error::UnknownName(s.to_string());

        let (number, rest) = match s.split_once(' ') {
            Some((number, rest)) => (number, rest.trim()),
            None => (s, ""),
        };

        if let Ok(value) = number.parse::<u16>() {
            let code = StatusCode::try_from(value)?;

            if rest.is_empty() || code.title().eq_ignore_ascii_case(rest) {
                return Ok(code);
            }
            return Err(unknown());
        }

        if let Some(code) = ALL.iter().find(|code| code.title().eq_ignore_ascii_case(s)) {
            return Ok(*code);
        }

        let name = s.to_case(Case::UpperSnake);
        lookup(&name).copied().map_err(|_| unknown())
    }
}
