//! Identity designators
//!
//! A user or group given on the command line is either a literal numeric id
//! (all ASCII digits) or a symbolic name that has to be resolved against the
//! host's identity database.

use std::fmt;
use std::str::FromStr;

/// A user or group as given by the operator
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentitySpec {
    /// Numeric id, used without lookup
    Id(u32),
    /// Symbolic name, resolved through the host
    Name(String),
}

impl IdentitySpec {
    pub fn is_numeric(&self) -> bool {
        matches!(self, IdentitySpec::Id(_))
    }
}

/// Error for empty or unparseable designators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentitySpecError(pub String);

impl fmt::Display for IdentitySpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for IdentitySpecError {}

impl FromStr for IdentitySpec {
    type Err = IdentitySpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IdentitySpecError("empty user/group designator".to_string()));
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<u32>()
                .map(IdentitySpec::Id)
                .map_err(|_| IdentitySpecError(format!("numeric id out of range: {}", s)));
        }
        Ok(IdentitySpec::Name(s.to_string()))
    }
}

impl fmt::Display for IdentitySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentitySpec::Id(id) => write!(f, "{}", id),
            IdentitySpec::Name(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_numeric_ids() {
        assert_eq!("33".parse::<IdentitySpec>().unwrap(), IdentitySpec::Id(33));
        assert_eq!("0".parse::<IdentitySpec>().unwrap(), IdentitySpec::Id(0));
    }

    #[test]
    fn names_are_kept_verbatim() {
        assert_eq!(
            "www-data".parse::<IdentitySpec>().unwrap(),
            IdentitySpec::Name("www-data".to_string())
        );
    }

    #[test]
    fn mixed_digits_and_letters_is_a_name() {
        assert_eq!(
            "1000a".parse::<IdentitySpec>().unwrap(),
            IdentitySpec::Name("1000a".to_string())
        );
    }

    #[test]
    fn negative_number_is_a_name() {
        // Only plain digits count as an id
        assert!(!"-1".parse::<IdentitySpec>().unwrap().is_numeric());
    }

    #[test]
    fn empty_is_rejected() {
        assert!("".parse::<IdentitySpec>().is_err());
        assert!("   ".parse::<IdentitySpec>().is_err());
    }

    #[test]
    fn overflowing_id_is_rejected() {
        assert!("99999999999".parse::<IdentitySpec>().is_err());
    }
}
