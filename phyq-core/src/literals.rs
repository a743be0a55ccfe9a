//! Constructors for base-ratio quantities of each SI base dimension.
//!
//! These take a raw non-negative count, so they read like unit literals at the call site:
//!
//! ```rust
//! use phyq_core::literals::{metres, seconds};
//!
//! let v = metres(100_000) / seconds(3_600);
//! assert_eq!(v.value(), 27);
//! ```
//!
//! Counts above `i64::MAX` panic in debug builds and wrap in release builds, like the rest of the unguarded integer
//! arithmetic.

use crate::dimension::{
    Amount, Current, Dimensionless, Length, LuminousIntensity, Mass, Temperature, Time,
};
use crate::Quantity;

macro_rules! base_literal {
    ($(#[$doc:meta])* $name:ident => $dim:ty) => {
        $(#[$doc])*
        ///
        /// # Panics
        ///
        /// In debug builds, if `value` exceeds `i64::MAX`.
        #[inline]
        pub const fn $name(value: u64) -> Quantity<$dim> {
            debug_assert!(value <= i64::MAX as u64, "literal count exceeds i64::MAX");
            Quantity::new(value as i64)
        }
    };
}

base_literal!(
    /// `value` metres.
    metres => Length
);
base_literal!(
    /// `value` kilograms.
    kilograms => Mass
);
base_literal!(
    /// `value` seconds.
    seconds => Time
);
base_literal!(
    /// `value` amperes.
    amperes => Current
);
base_literal!(
    /// `value` kelvins.
    kelvins => Temperature
);
base_literal!(
    /// `value` moles.
    moles => Amount
);
base_literal!(
    /// `value` candelas.
    candelas => LuminousIntensity
);
base_literal!(
    /// `value` radians, a dimensionless plane angle.
    radians => Dimensionless
);
