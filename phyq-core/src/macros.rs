//! Macros for declaring ratio relations.

/// Generates [`Finer`](crate::Finer) impls for every pair of ratios in a list sorted by ascending value.
///
/// The first ratio of the list is finer than all the others; the macro emits its pairs and recurses on the rest.
/// The list must be sorted, the macro cannot compare values itself.
#[macro_export]
macro_rules! impl_finer {
    // Base case: a single ratio is only finer than itself
    ($only:ty $(,)?) => {
        impl $crate::Finer<$only> for $only {
            type Output = $only;
        }
    };

    // Recursive case: the head wins against every later ratio, then recurse with the rest
    ($first:ty, $($rest:ty),+ $(,)?) => {
        impl $crate::Finer<$first> for $first {
            type Output = $first;
        }

        $(
            impl $crate::Finer<$rest> for $first {
                type Output = $first;
            }

            impl $crate::Finer<$first> for $rest {
                type Output = $first;
            }
        )+

        $crate::impl_finer!($($rest),+);
    };
}
