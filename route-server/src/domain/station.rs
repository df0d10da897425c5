//! Station code types.

use std::fmt;
use std::sync::Arc;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A valid railway station code.
///
/// Station codes in the schedule data are 1 to 8 uppercase ASCII letters or
/// digits (e.g. "NDLS", "BCT", "SBC"). This type guarantees that any
/// `StationCode` value is valid and canonically uppercase by construction.
///
/// Backed by `Arc<str>` so that cloning is cheap: the route search clones
/// codes into every frontier path it branches.
///
/// # Examples
///
/// ```
/// use route_server::domain::StationCode;
///
/// let ndls = StationCode::parse("NDLS").unwrap();
/// assert_eq!(ndls.as_str(), "NDLS");
///
/// // Lowercase is rejected by the strict parser...
/// assert!(StationCode::parse("ndls").is_err());
///
/// // ...but accepted by the normalizing one.
/// let normalized = StationCode::parse_normalized(" ndls ").unwrap();
/// assert_eq!(normalized, ndls);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationCode(Arc<str>);

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must be 1 to 8 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let bytes = s.as_bytes();

        if bytes.is_empty() {
            return Err(InvalidStationCode {
                reason: "must not be empty",
            });
        }
        if bytes.len() > 8 {
            return Err(InvalidStationCode {
                reason: "must be at most 8 characters",
            });
        }

        for &b in bytes {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidStationCode {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(StationCode(Arc::from(s)))
    }

    /// Parse a station code leniently: trims whitespace and uppercases
    /// before validating. This is the entry point for user-supplied codes,
    /// which are case-insensitive.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the station code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(StationCode::parse("NDLS").is_ok());
        assert!(StationCode::parse("BCT").is_ok());
        assert!(StationCode::parse("A").is_ok());
        assert!(StationCode::parse("CSMT1").is_ok());
        assert!(StationCode::parse("ABCDEFGH").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(StationCode::parse("ndls").is_err());
        assert!(StationCode::parse("Ndls").is_err());
    }

    #[test]
    fn reject_empty_and_too_long() {
        assert!(StationCode::parse("").is_err());
        assert!(StationCode::parse("ABCDEFGHI").is_err());
    }

    #[test]
    fn reject_punctuation_and_spaces() {
        assert!(StationCode::parse("N-LS").is_err());
        assert!(StationCode::parse("N LS").is_err());
        assert!(StationCode::parse("NÖLS").is_err());
    }

    #[test]
    fn normalized_trims_and_uppercases() {
        let code = StationCode::parse_normalized("  ndls ").unwrap();
        assert_eq!(code.as_str(), "NDLS");
        assert_eq!(code, StationCode::parse("NDLS").unwrap());
    }

    #[test]
    fn normalized_rejects_blank() {
        assert!(StationCode::parse_normalized("   ").is_err());
        assert!(StationCode::parse_normalized("").is_err());
    }

    #[test]
    fn display_and_debug() {
        let code = StationCode::parse("BCT").unwrap();
        assert_eq!(format!("{}", code), "BCT");
        assert_eq!(format!("{:?}", code), "StationCode(BCT)");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StationCode::parse("NDLS").unwrap());
        assert!(set.contains(&StationCode::parse("NDLS").unwrap()));
        assert!(!set.contains(&StationCode::parse("BCT").unwrap()));
    }
}
