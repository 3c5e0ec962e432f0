//! Review rating value object (1 to 5 stars).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Star rating left by a guest: 1 (worst) to 5 (best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a Rating, returning an error when outside 1..=5.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::out_of_range(
                "rating",
                Self::MIN as i64,
                Self::MAX as i64,
                value,
            ))
        }
    }

    /// Returns the numeric star value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_star_range() {
        for v in 1..=5 {
            assert_eq!(Rating::try_new(v).unwrap().value() as i64, v);
        }
    }

    #[test]
    fn rejects_zero_and_six() {
        assert!(Rating::try_new(0).is_err());
        assert!(Rating::try_new(6).is_err());
        assert!(Rating::try_new(-3).is_err());
    }
}
