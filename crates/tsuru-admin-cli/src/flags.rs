//! Flag value types shared by commands

use std::fmt;
use std::str::FromStr;

/// Boolean flag that also remembers whether it was given at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TriState {
    #[default]
    Unset,
    True,
    False,
}

impl TriState {
    /// Form value sent to the API; `Unset` is an empty string
    #[must_use]
    pub const fn form_value(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::True => "true",
            Self::False => "false",
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl FromStr for TriState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Unset),
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(Self::True),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(Self::False),
            other => Err(format!("invalid boolean value {other:?}")),
        }
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("not set"),
            other => f.write_str(other.form_value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_go_booleans() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(raw.parse::<TriState>().unwrap(), TriState::True);
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(raw.parse::<TriState>().unwrap(), TriState::False);
        }
        assert_eq!("".parse::<TriState>().unwrap(), TriState::Unset);
        assert!("yes".parse::<TriState>().is_err());
    }

    #[test]
    fn test_form_value() {
        assert_eq!(TriState::Unset.form_value(), "");
        assert_eq!(TriState::from(true).form_value(), "true");
        assert_eq!(TriState::from(false).form_value(), "false");
        assert_eq!(TriState::default().to_string(), "not set");
    }
}
