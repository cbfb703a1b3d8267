//! Single-shot wall-clock timing.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Runs `op` once and returns how long it took.
///
/// The result is passed through [`black_box`] so the work cannot be optimized
/// away, and is dropped after the clock stops. There is no warm-up and no
/// repetition.
pub fn measure<R, F>(op: F) -> Duration
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let out = black_box(op());
    let elapsed = start.elapsed();
    drop(out);
    elapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_op_exactly_once() {
        let mut calls = 0;
        let _ = measure(|| calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn covers_the_op() {
        let d = measure(|| std::thread::sleep(Duration::from_millis(5)));
        assert!(d >= Duration::from_millis(5));
    }

    #[test]
    fn output_is_produced_inside_the_interval() {
        let d = measure(|| vec![0u8; 1024]);
        assert!(d < Duration::from_secs(5));
    }
}
