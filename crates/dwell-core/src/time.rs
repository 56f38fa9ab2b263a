//! Stop-log time values.
//!
//! The simulation writes times in two shapes: plain (possibly fractional)
//! seconds, and clock strings `H:M:S` or `D:H:M:S` where only the seconds
//! component may be fractional.

use crate::errors::DwellError;

/// Parse a stop-log time value into seconds.
///
/// Plain seconds may be negative (the simulation uses negative values for
/// "unknown"); clock components may not. Anything else is an error,
/// including empty strings, `inf`/`nan` and clock strings with the wrong
/// number of components.
pub fn parse_time(value: &str) -> Result<f64, DwellError> {
    let trimmed = value.trim();
    if let Ok(seconds) = trimmed.parse::<f64>() {
        if seconds.is_finite() {
            return Ok(seconds);
        }
    } else if let Some(seconds) = parse_clock(trimmed) {
        return Ok(seconds);
    }
    Err(DwellError::Time {
        value: value.to_string(),
    })
}

fn parse_clock(s: &str) -> Option<f64> {
    let parts: Vec<&str> = s.split(':').collect();
    let (days, hms) = match parts.as_slice() {
        [h, m, sec] => (0, [*h, *m, *sec]),
        [d, h, m, sec] => (d.parse::<u64>().ok()?, [*h, *m, *sec]),
        _ => return None,
    };
    let hours: u64 = hms[0].parse().ok()?;
    let minutes: u64 = hms[1].parse().ok()?;
    let seconds: f64 = hms[2].parse().ok()?;
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    Some(days as f64 * 86_400.0 + hours as f64 * 3_600.0 + minutes as f64 * 60.0 + seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_seconds() {
        assert_eq!(parse_time("0").unwrap(), 0.0);
        assert_eq!(parse_time("132").unwrap(), 132.0);
        assert_eq!(parse_time("132.5").unwrap(), 132.5);
        assert_eq!(parse_time(" 61.5 ").unwrap(), 61.5);
        assert_eq!(parse_time("-5").unwrap(), -5.0);
    }

    #[test]
    fn clock_strings() {
        assert_eq!(parse_time("0:2:12").unwrap(), 132.0);
        assert_eq!(parse_time("0:01:01.5").unwrap(), 61.5);
        assert_eq!(parse_time("2:0:0").unwrap(), 7200.0);
        assert_eq!(parse_time("1:0:0:0").unwrap(), 86_400.0);
        assert_eq!(parse_time("1:2:3:4.5").unwrap(), 93_784.5);
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "abc", "7:xx", "1:2", "1:2:3:4:5", "inf", "nan"] {
            assert!(parse_time(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn rejects_negative_clock_components() {
        assert!(parse_time("0:0:-5").is_err());
        assert!(parse_time("-1:0:0").is_err());
        assert!(parse_time("-1:0:0:0").is_err());
    }

    #[test]
    fn error_carries_the_value() {
        match parse_time("7:xx") {
            Err(DwellError::Time { value }) => assert_eq!(value, "7:xx"),
            other => panic!("expected Time error, got {other:?}"),
        }
    }
}
