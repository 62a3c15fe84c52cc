use std::time::Duration;
use tracing::trace;

/// Maps a duration in seconds to a [`Duration`].
///
/// Zero, negative and NaN map to [`Duration::ZERO`]; infinity and values past
/// the range of `Duration` saturate at [`Duration::MAX`].
pub fn to_duration(seconds: f64) -> Duration {
    if !(seconds > 0.0) {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
}

/// Blocks the calling thread for at least `seconds`.
pub fn delay(seconds: f64) {
    let duration = to_duration(seconds);
    trace!(?duration, "delay");
    if !duration.is_zero() {
        std::thread::sleep(duration);
    }
}

/// Waits at least `seconds` without blocking the runtime thread.
#[cfg(feature = "tokio")]
pub async fn delay_async(seconds: f64) {
    let duration = to_duration(seconds);
    trace!(?duration, "delay_async");
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_to_duration() {
        assert_eq!(to_duration(0.0), Duration::ZERO);
        assert_eq!(to_duration(-1.5), Duration::ZERO);
        assert_eq!(to_duration(f64::NAN), Duration::ZERO);
        assert_eq!(to_duration(f64::INFINITY), Duration::MAX);
        assert_eq!(to_duration(0.25), Duration::from_millis(250));
        assert_eq!(to_duration(2.0), Duration::from_secs(2));
    }

    #[test]
    fn test_delay_lower_bound() {
        for &seconds in &[0.0, 0.1, 1.0] {
            let started = Instant::now();
            delay(seconds);
            assert!(started.elapsed() >= to_duration(seconds));
        }
    }

    #[test]
    fn test_delay_negative_returns() {
        let started = Instant::now();
        delay(-10.0);
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[cfg(feature = "tokio")]
    #[tokio::test]
    async fn test_delay_async_lower_bound() {
        let started = Instant::now();
        delay_async(0.1).await;
        assert!(started.elapsed() >= Duration::from_millis(100));
    }
}
