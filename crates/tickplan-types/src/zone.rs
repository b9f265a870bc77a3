//! IANA time zone lookup.

use chrono_tz::Tz;

use crate::TickError;

/// Resolves an IANA zone name such as `America/Chicago`.
///
/// Surrounding whitespace is ignored; the lookup itself is case-sensitive,
/// as in the IANA database.
///
/// # Errors
///
/// Returns [`TickError::InvalidTimeZone`] if the name is unknown.
pub fn parse_time_zone(name: &str) -> Result<Tz, TickError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| TickError::InvalidTimeZone(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_zone() {
        assert_eq!(parse_time_zone("America/Chicago").unwrap(), Tz::America__Chicago);
        assert_eq!(parse_time_zone(" UTC ").unwrap(), Tz::UTC);
    }

    #[test]
    fn test_unknown_zone() {
        assert_eq!(
            parse_time_zone("Mars/Olympus_Mons").unwrap_err(),
            TickError::InvalidTimeZone("Mars/Olympus_Mons".to_string())
        );
        assert!(parse_time_zone("").is_err());
    }
}
