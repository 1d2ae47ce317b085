//! Section distance type.

use std::fmt;

/// Error returned when a distance is not strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid distance {value}: must be greater than zero")]
pub struct InvalidDistance {
    value: u32,
}

/// Distance between two adjacent stations, in metres.
///
/// Always greater than zero.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Distance;
///
/// let d = Distance::new(1200).unwrap();
/// assert_eq!(d.get(), 1200);
///
/// assert!(Distance::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(u32);

impl Distance {
    pub fn new(value: u32) -> Result<Self, InvalidDistance> {
        if value == 0 {
            return Err(InvalidDistance { value });
        }
        Ok(Distance(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Subtract `other`, returning `None` if the result would not be a
    /// valid distance.
    pub fn checked_sub(self, other: Distance) -> Option<Distance> {
        self.0
            .checked_sub(other.0)
            .filter(|&d| d > 0)
            .map(Distance)
    }
}

impl TryFrom<u32> for Distance {
    type Error = InvalidDistance;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Distance::new(value)
    }
}

impl From<Distance> for u32 {
    fn from(d: Distance) -> Self {
        d.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}
