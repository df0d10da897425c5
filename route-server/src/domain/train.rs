//! Train number types.

use std::fmt;
use std::sync::Arc;

/// Error returned when parsing an invalid train number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid train number: {reason}")]
pub struct InvalidTrainNo {
    reason: &'static str,
}

/// A valid train number.
///
/// Train numbers in the schedule data are 1 to 8 ASCII digits or uppercase
/// letters (most are plain numbers like "12951"). Like [`StationCode`], the
/// value is canonical by construction and cheap to clone.
///
/// [`StationCode`]: super::StationCode
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TrainNo(Arc<str>);

impl TrainNo {
    /// Parse a train number from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidTrainNo> {
        let bytes = s.as_bytes();

        if bytes.is_empty() {
            return Err(InvalidTrainNo {
                reason: "must not be empty",
            });
        }
        if bytes.len() > 8 {
            return Err(InvalidTrainNo {
                reason: "must be at most 8 characters",
            });
        }

        for &b in bytes {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidTrainNo {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(TrainNo(Arc::from(s)))
    }

    /// Parse a train number leniently: trims and uppercases first.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidTrainNo> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the train number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TrainNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainNo({})", self.as_str())
    }
}

impl fmt::Display for TrainNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_numbers() {
        assert!(TrainNo::parse("12951").is_ok());
        assert!(TrainNo::parse("1").is_ok());
        assert!(TrainNo::parse("T1").is_ok());
        assert!(TrainNo::parse("12345678").is_ok());
    }

    #[test]
    fn reject_invalid() {
        assert!(TrainNo::parse("").is_err());
        assert!(TrainNo::parse("123456789").is_err());
        assert!(TrainNo::parse("12 95").is_err());
        assert!(TrainNo::parse("t1").is_err());
    }

    #[test]
    fn normalized_trims_and_uppercases() {
        let no = TrainNo::parse_normalized(" t1 ").unwrap();
        assert_eq!(no.as_str(), "T1");
    }

    #[test]
    fn display() {
        let no = TrainNo::parse("12951").unwrap();
        assert_eq!(format!("{}", no), "12951");
        assert_eq!(format!("{:?}", no), "TrainNo(12951)");
    }
}
