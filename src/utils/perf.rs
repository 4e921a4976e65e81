use std::time::Duration;

/// Time a block when `LOG_PERFORMANCE` is on.
/// `$threshold_micros`: 500 for 0.5ms, 1000 for 1ms, etc.
#[macro_export]
macro_rules! trace_time {
    ($name:expr, $threshold_micros:expr, $block:block) => {{
        let timer = $crate::config::LOG_PERFORMANCE.then($crate::utils::AppInstant::now);
        let result = $block;
        if let Some(start) = timer {
            $crate::utils::report_elapsed($name, start.elapsed(), $threshold_micros);
        }
        result
    }};
}

/// Log one timing. Returns true when the block ran over its threshold.
pub fn report_elapsed(name: &str, elapsed: Duration, threshold_micros: u128) -> bool {
    let micros = elapsed.as_micros();
    let slow = micros > threshold_micros;
    if slow {
        let mode = if cfg!(debug_assertions) { "DEBUG" } else { "RELEASE" };
        log::warn!(
            "SLOW [{}]: '{}' took {:.3}ms (Threshold: {:.3}ms)",
            mode,
            name,
            micros as f64 / 1000.0,
            threshold_micros as f64 / 1000.0
        );
    } else {
        log::trace!("'{}' took {}us", name, micros);
    }
    slow
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_blocks_over_threshold() {
        assert!(report_elapsed("slow", Duration::from_millis(3), 2_000));
        assert!(!report_elapsed("fast", Duration::from_micros(150), 2_000));
    }

    #[test]
    fn macro_returns_the_block_value() {
        let value = crate::trace_time!("sum", 1_000_000, { (1..=4).sum::<i32>() });
        assert_eq!(value, 10);
    }
}
