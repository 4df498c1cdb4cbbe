#[cfg(all(not(test), not(feature = "debug-checks")))]
pub(crate) const BRML_ASSERT_LEVEL_DEFINITION: u8 = BRML_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub(crate) const BRML_ASSERT_LEVEL_DEFINITION: u8 = BRML_ASSERT_MODERATE;

pub(crate) const BRML_ASSERT_SIMPLE: u8 = 1;
pub(crate) const BRML_ASSERT_MODERATE: u8 = 2;

#[macro_export]
#[doc(hidden)]
macro_rules! brml_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::BRML_ASSERT_LEVEL_DEFINITION >= $crate::asserts::BRML_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}
