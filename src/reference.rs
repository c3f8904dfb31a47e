use std::fmt;

/// The RFC section that defines a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reference {
    rfc: u16,
    section: &'static str,
}

impl Reference {
    pub(crate) const fn new(rfc: u16, section: &'static str) -> Self {
        Self { rfc, section }
    }

    /// Returns the RFC number
    pub fn rfc(&self) -> u16 {
        self.rfc
    }

    /// Returns the section within the RFC, e.g. `10.4.5`
    pub fn section(&self) -> &'static str {
        self.section
    }

    /// Returns a link to the section on tools.ietf.org
    pub fn url(&self) -> String {
        format!(
            "https://tools.ietf.org/html/rfc{}#section-{}",
            self.rfc, self.section
        )
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RFC {}, Section {}", self.rfc, self.section)
    }
}
