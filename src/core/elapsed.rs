//! Human-readable elapsed-time rendering for record messages

use std::time::Duration;

/// Format an elapsed duration the way query logs conventionally render it:
/// `850ns`, `120µs`, `5ms`, `4.25ms`, `1.5s`.
///
/// The unit is chosen by magnitude and trailing zeros are trimmed, so a
/// whole number of milliseconds renders without a fraction (`250ms`).
pub fn format_elapsed(elapsed: Duration) -> String {
    const MICROSECOND: u128 = 1_000;
    const MILLISECOND: u128 = 1_000_000;
    const SECOND: u128 = 1_000_000_000;

    let nanos = elapsed.as_nanos();
    if nanos < MICROSECOND {
        format!("{}ns", nanos)
    } else if nanos < MILLISECOND {
        format!("{}µs", scaled(nanos, MICROSECOND))
    } else if nanos < SECOND {
        format!("{}ms", scaled(nanos, MILLISECOND))
    } else {
        format!("{}s", scaled(nanos, SECOND))
    }
}

/// Render `nanos / unit` with up to three fractional digits, trimmed.
fn scaled(nanos: u128, unit: u128) -> String {
    let whole = nanos / unit;
    let frac = (nanos % unit) * 1_000 / unit;
    if frac == 0 {
        format!("{}", whole)
    } else {
        let s = format!("{}.{:03}", whole, frac);
        s.trim_end_matches('0').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_milliseconds() {
        assert_eq!(format_elapsed(Duration::from_millis(5)), "5ms");
        assert_eq!(format_elapsed(Duration::from_millis(250)), "250ms");
    }

    #[test]
    fn test_fractional_milliseconds() {
        assert_eq!(format_elapsed(Duration::from_micros(4_250)), "4.25ms");
        assert_eq!(format_elapsed(Duration::from_micros(1_001)), "1.001ms");
    }

    #[test]
    fn test_sub_millisecond() {
        assert_eq!(format_elapsed(Duration::from_nanos(850)), "850ns");
        assert_eq!(format_elapsed(Duration::from_micros(120)), "120µs");
    }

    #[test]
    fn test_seconds() {
        assert_eq!(format_elapsed(Duration::from_millis(1_500)), "1.5s");
        assert_eq!(format_elapsed(Duration::from_secs(3)), "3s");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_elapsed(Duration::ZERO), "0ns");
    }
}
