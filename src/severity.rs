//! Severity classification for changelog events.

use std::fmt;
use std::str::FromStr;

/// Ordered criticality classification attached to every event.
///
/// Each severity maps to an integer code 1–5 carried in the payload's
/// `criticality` field. Names outside the five canonical ones are not an
/// error; [`Severity::code_for`] maps them to code `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Notification,
    Warning,
    Error,
    Critical,
}

impl Severity {
    /// Integer code carried on the wire.
    pub fn code(self) -> u8 {
        match self {
            Self::Info => 1,
            Self::Notification => 2,
            Self::Warning => 3,
            Self::Error => 4,
            Self::Critical => 5,
        }
    }

    /// Wire code for a severity name, `0` for anything unrecognised.
    ///
    /// The lookup is case-sensitive; only the canonical upper-case names
    /// resolve to a non-zero code.
    pub fn code_for(name: &str) -> u8 {
        name.parse::<Self>().map(Self::code).unwrap_or(0)
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::Info
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Info => "INFO",
            Self::Notification => "NOTIFICATION",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        };
        f.write_str(s)
    }
}

impl FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INFO" => Ok(Self::Info),
            "NOTIFICATION" => Ok(Self::Notification),
            "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Severity;

    #[rstest]
    #[case("INFO", 1)]
    #[case("NOTIFICATION", 2)]
    #[case("WARNING", 3)]
    #[case("ERROR", 4)]
    #[case("CRITICAL", 5)]
    fn canonical_names_map_to_fixed_codes(#[case] name: &str, #[case] expected: u8) {
        assert_eq!(Severity::code_for(name), expected);
    }

    #[rstest]
    #[case("")]
    #[case("DEBUG")]
    #[case("info")]
    #[case("Warning")]
    fn unknown_names_map_to_zero(#[case] name: &str) {
        assert_eq!(Severity::code_for(name), 0);
    }

    #[rstest]
    fn display_round_trips_through_from_str() {
        for severity in [
            Severity::Info,
            Severity::Notification,
            Severity::Warning,
            Severity::Error,
            Severity::Critical,
        ] {
            assert_eq!(severity.to_string().parse::<Severity>(), Ok(severity));
        }
    }
}
