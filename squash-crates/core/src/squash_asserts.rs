//! Assertions which are checked depending on the configured assert level.
//!
//! Cheap checks use [`squash_assert_simple!`] and are always active. The more expensive levels
//! are only enabled in tests or when the `debug-checks` feature is turned on, since they can
//! change the asymptotic complexity of the engine (e.g. checking the entailment of every
//! propagator whenever a solution is found).

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const SQUASH_ASSERT_LEVEL_DEFINITION: u8 = SQUASH_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const SQUASH_ASSERT_LEVEL_DEFINITION: u8 = SQUASH_ASSERT_MODERATE;

pub const SQUASH_ASSERT_SIMPLE: u8 = 1;
pub const SQUASH_ASSERT_MODERATE: u8 = 2;
pub const SQUASH_ASSERT_ADVANCED: u8 = 3;
pub const SQUASH_ASSERT_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! squash_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::SQUASH_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SQUASH_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! squash_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::SQUASH_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SQUASH_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! squash_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::SQUASH_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SQUASH_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! squash_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::SQUASH_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SQUASH_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! squash_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::SQUASH_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SQUASH_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
