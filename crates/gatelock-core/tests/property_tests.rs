//! Property-based tests for gatelock-core using proptest
//!
//! These tests verify invariants that should hold for all valid inputs.

use proptest::prelude::*;
use gatelock_core::{GuardState, LoginGuard, Outcome};

fn arb_candidate() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None::<String>),
        "[a-z]{0,12}".prop_map(Some),
        Just(Some("hunter2".to_string())),
    ]
}

proptest! {
    #[test]
    fn fresh_guard_starts_unlocked(max in 1u32..100) {
        let guard = LoginGuard::with_max_attempts("hunter2", max).unwrap();
        prop_assert_eq!(guard.failed_attempts(), 0);
        prop_assert_eq!(guard.state(), GuardState::Unlocked);
    }

    #[test]
    fn counter_never_exceeds_max(
        max in 1u32..20,
        candidates in prop::collection::vec(arb_candidate(), 0..60),
    ) {
        let mut guard = LoginGuard::with_max_attempts("hunter2", max).unwrap();
        for candidate in &candidates {
            guard.attempt(candidate.as_deref());
            prop_assert!(guard.failed_attempts() <= max);
        }
    }

    #[test]
    fn remaining_matches_counter_on_every_failure(
        max in 1u32..20,
        candidates in prop::collection::vec(arb_candidate(), 0..60),
    ) {
        let mut guard = LoginGuard::with_max_attempts("hunter2", max).unwrap();
        for candidate in &candidates {
            if let Outcome::Failure { remaining } = guard.attempt(candidate.as_deref()) {
                prop_assert_eq!(remaining, max - guard.failed_attempts());
            }
        }
    }

    #[test]
    fn lockout_is_absorbing(
        max in 1u32..10,
        tail in prop::collection::vec(arb_candidate(), 1..30),
    ) {
        let mut guard = LoginGuard::with_max_attempts("hunter2", max).unwrap();

        // Drive to lockout with guaranteed failures
        for _ in 0..max {
            guard.attempt(Some("not the password"));
        }
        prop_assert_eq!(guard.state(), GuardState::Locked);

        let frozen_counter = guard.failed_attempts();
        let frozen_flag = guard.is_authenticated();
        for candidate in &tail {
            prop_assert_eq!(guard.attempt(candidate.as_deref()), Outcome::Locked);
            prop_assert_eq!(guard.failed_attempts(), frozen_counter);
            prop_assert_eq!(guard.is_authenticated(), frozen_flag);
        }
    }

    #[test]
    fn success_never_increments(
        max in 1u32..20,
        prefix_failures in 0u32..19,
    ) {
        let prefix_failures = prefix_failures.min(max - 1);
        let mut guard = LoginGuard::with_max_attempts("hunter2", max).unwrap();

        for _ in 0..prefix_failures {
            guard.attempt(Some("wrong"));
        }
        prop_assert_eq!(guard.attempt(Some("hunter2")), Outcome::Success);
        prop_assert_eq!(guard.failed_attempts(), prefix_failures);
        prop_assert!(guard.is_authenticated());
    }
}
