//! User roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marketplace role, fixed at registration.
///
/// Role switching is out of scope: a host account cannot book and a
/// guest account cannot list caravans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Lists caravans and drives reservation approval.
    Host,
    /// Searches, books, and reviews caravans.
    Guest,
}

impl UserRole {
    pub fn is_host(&self) -> bool {
        matches!(self, UserRole::Host)
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, UserRole::Guest)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Host => write!(f, "HOST"),
            UserRole::Guest => write!(f, "GUEST"),
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "HOST" => Ok(UserRole::Host),
            "GUEST" => Ok(UserRole::Guest),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("host".parse::<UserRole>().unwrap(), UserRole::Host);
        assert_eq!("GUEST".parse::<UserRole>().unwrap(), UserRole::Guest);
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn serializes_uppercase() {
        assert_eq!(serde_json::to_string(&UserRole::Host).unwrap(), "\"HOST\"");
    }
}
