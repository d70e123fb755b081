//! Property-based tests for strategies and counters
//!
//! These use proptest to check the algebraic relations between strategy
//! parameters and the state transitions of the attempt counters.

#[cfg(test)]
mod tests {
    use crate::counter::AttemptCounter;
    use crate::strategy::{Backoff, Clamped, Constant, Exponential, Jittered, Linear};
    use proptest::prelude::*;

    // ===== Strategy Generators =====

    fn arb_attempt() -> impl Strategy<Value = u32> {
        0u32..20
    }

    fn arb_seconds() -> impl Strategy<Value = f64> {
        -1_000.0f64..1_000.0
    }

    // Small integral values keep the float arithmetic exact.
    fn arb_small_int() -> impl Strategy<Value = f64> {
        (1i32..8).prop_map(f64::from)
    }

    // ===== Backoff Strategy Properties =====

    proptest! {
        /// Property: Constant ignores the attempt number
        #[test]
        fn prop_constant_ignores_attempt(k in arb_seconds(), attempt in any::<u32>()) {
            prop_assert_eq!(Constant::new(k).backoff(attempt).unwrap(), k);
        }

        /// Property: Linear grows by exactly the slope per attempt
        #[test]
        fn prop_linear_step_is_slope(
            m in arb_small_int(),
            b in arb_small_int(),
            attempt in arb_attempt(),
        ) {
            let linear = Linear::new(m, b);
            let step = linear.backoff(attempt + 1).unwrap() - linear.backoff(attempt).unwrap();
            prop_assert_eq!(step, m);
        }

        /// Property: Doubling the factor doubles the delay
        #[test]
        fn prop_exponential_factor_scales(
            base in arb_small_int(),
            factor in arb_small_int(),
            attempt in 0u32..10,
        ) {
            let one = Exponential::with_factor(base, factor);
            let two = Exponential::with_factor(base, factor * 2.0);
            prop_assert_eq!(one.backoff(attempt).unwrap() * 2.0, two.backoff(attempt).unwrap());
        }

        /// Property: The constant is a flat offset
        #[test]
        fn prop_exponential_constant_offsets(
            base in arb_small_int(),
            c in arb_small_int(),
            attempt in 0u32..10,
        ) {
            let zero = Exponential::new(base);
            let offset = Exponential::builder().base(base).constant(c).build();
            prop_assert_eq!(offset.backoff(attempt).unwrap() - zero.backoff(attempt).unwrap(), c);
        }

        /// Property: Scaling the base by k scales the delay by k^attempt
        #[test]
        fn prop_exponential_base_ratio(
            b1 in arb_small_int(),
            k in arb_small_int(),
            attempt in 0u32..10,
        ) {
            let small = Exponential::new(b1);
            let large = Exponential::new(b1 * k);
            let ratio = k.powi(attempt as i32);
            prop_assert_eq!(
                small.backoff(attempt).unwrap() * ratio,
                large.backoff(attempt).unwrap()
            );
        }

        /// Property: Clamped output stays within its bounds
        #[test]
        fn prop_clamped_within_bounds(
            m in arb_seconds(),
            lo in 0.0f64..10.0,
            span in 0.0f64..100.0,
            attempt in arb_attempt(),
        ) {
            let clamped = Clamped::new(Linear::new(m, 0.0), lo, lo + span);
            let delay = clamped.backoff(attempt).unwrap();
            prop_assert!(delay >= lo && delay <= lo + span);
        }

        /// Property: Jittered output stays within ±jitter of the base delay
        #[test]
        fn prop_jittered_within_band(
            k in 0.0f64..1_000.0,
            jitter in 0.0f64..=1.0,
        ) {
            let delay = Jittered::new(Constant::new(k), jitter).backoff(0).unwrap();
            let epsilon = 1e-9;
            prop_assert!(delay >= k * (1.0 - jitter) - epsilon);
            prop_assert!(delay <= k * (1.0 + jitter) + epsilon);
        }
    }

    // ===== Attempt Counter Properties =====

    proptest! {
        /// Property: n failures from fresh yields n attempts
        #[test]
        fn prop_failed_counts(n in 0u32..200) {
            let mut counter = AttemptCounter::new(Constant::new(0.0));
            for _ in 0..n {
                counter.failed();
            }
            prop_assert_eq!(counter.attempts(), n);
        }

        /// Property: One success after any streak resets to zero
        #[test]
        fn prop_resetting_clears(n in 0u32..200) {
            let mut counter = AttemptCounter::resetting(Constant::new(0.0));
            for _ in 0..n {
                counter.failed();
            }
            counter.success().unwrap();
            prop_assert_eq!(counter.attempts(), 0);
        }

        /// Property: Decrementing never drops below zero
        #[test]
        fn prop_decrementing_floor(failures in 0u32..50, successes in 0u32..100) {
            let mut counter = AttemptCounter::decrementing(Constant::new(0.0));
            for _ in 0..failures {
                counter.failed();
            }
            for _ in 0..successes {
                counter.success().unwrap();
            }
            prop_assert_eq!(counter.attempts(), failures.saturating_sub(successes));
        }

        /// Property: Counter delay is the strategy evaluated at the attempt count
        #[test]
        fn prop_counter_delegates(m in arb_small_int(), b in arb_small_int(), n in arb_attempt()) {
            let linear = Linear::new(m, b);
            let mut counter = AttemptCounter::decrementing(linear);
            for _ in 0..n {
                counter.failed();
            }
            prop_assert_eq!(counter.backoff().unwrap(), linear.backoff(n).unwrap());
        }
    }
}
