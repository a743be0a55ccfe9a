//! Core type system for dimensioned integer quantities.
//!
//! `phyq-core` tracks physical dimensions and scale ratios in the type system:
//!
//! - A *dimension* is a vector of seven exponents over the SI base dimensions, encoded as [`Dim`].
//! - A *ratio* is a zero-sized marker type implementing [`Ratio`] (e.g. [`Milli`], [`Kilo`], [`Foot`]).
//! - A value tagged with both is a [`Quantity<D, R>`], backed by an `i64`.
//! - Conversion between ratios is an explicit, truncating [`cast`].
//!
//! Most users should depend on `phyq` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time rejection of dimensionally inconsistent arithmetic (length plus time, …).
//! - Automatic exponent tracking across `*` and `/` (`m * m` is `m^2`, `m / s` is `m·s^-1`).
//! - Automatic rescaling between ratios: mixed-ratio operands are cast to the finer ratio before combining.
//! - Zero runtime overhead for the tags; a quantity is the size of an `i64`.
//!
//! # What this crate does not try to solve
//!
//! - Floating-point or arbitrary-precision magnitudes. Everything is `i64`, and division truncates.
//! - Runtime unit parsing, offset scales (Celsius) or localized formatting.
//! - User-defined ratios outside the closed set declared in [`ratio`].
//!
//! # Quick start
//!
//! ```rust
//! use phyq_core::length::{Metres, Millimetres};
//!
//! let sum = Metres::new(5) + Millimetres::new(3);
//! assert_eq!(sum, Millimetres::new(5003));
//! ```
//!
//! Derived dimensions fall out of `*` and `/`:
//!
//! ```rust
//! use phyq_core::literals::{metres, seconds};
//! use phyq_core::mechanics::MetresPerSecond;
//!
//! let v: MetresPerSecond = metres(100_000) / seconds(3_600);
//! assert_eq!(v.to_string(), "27 m·s^-1");
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `phyq-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! phyq-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity<D, R>`; serialization is the raw `i64` magnitude only, with
//!   [`serde_with_unit`] available to keep the tags.
//!
//! # Panics and errors
//!
//! The operators follow plain `i64` semantics: overflow panics in debug builds and wraps in release builds, and
//! division by a zero magnitude panics. The `checked_*` methods and [`Quantity::exact_cast`] report these cases as
//! [`QuantityError`] instead, and log each failure at `debug` level through the `log` facade.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod checked;
pub mod dimension;
mod error;
pub mod literals;
mod macros;
mod quantity;
pub mod ratio;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{
    AccelerationDim, Amount, Area, Current, Dim, DimDiv, DimMul, DimProduct, DimQuotient, Dimension,
    Dimensionless, ForceDim, FrequencyDim, JerkDim, Length, LuminousIntensity, Mass, QuotientRatio,
    Temperature, Time, VelocityDim, Volume,
};
pub use error::QuantityError;
pub use quantity::{cast, Quantity, QuotientRatioOf};
pub use ratio::{
    Centi, Deca, Deci, Finer, FinerOf, Foot, Hecto, Hour, Inch, Kilo, Mega, Micro, Mile, Milli, Minute, Nano, One,
    Ratio, Yard,
};

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

/// Re-export of the `typenum` integers used as dimension exponents.
pub use typenum;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined quantity aliases (grouped by dimension).
pub mod units;

pub use units::amount;
pub use units::current;
pub use units::length;
pub use units::luminous;
pub use units::mass;
pub use units::mechanics;
pub use units::temperature;
pub use units::time;
pub use units::unitless;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{
        Centimetres, Decimetres, Feet, Hectometres, Inches, Kilometres, Metres, Millimetres, SquareMetres,
    };
    use crate::mechanics::MetresPerSecond;
    use crate::time::{Hours, Minutes, Seconds};
    use crate::unitless::Unitless;
    use proptest::prelude::*;

    fn same<A: 'static, B: 'static>(_: &B) -> bool {
        core::any::TypeId::of::<A>() == core::any::TypeId::of::<B>()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Basic Quantity behavior
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn quantity_new_and_value() {
        let q = Metres::new(42);
        assert_eq!(q.value(), 42);
        assert_eq!(Metres::ZERO.value(), 0);
        assert_eq!(Metres::default(), Metres::ZERO);
    }

    #[test]
    fn quantity_abs_and_is_zero() {
        assert_eq!(Metres::new(-7).abs(), Metres::new(7));
        assert!(Metres::new(0).is_zero());
        assert!(!Metres::new(-1).is_zero());
    }

    #[test]
    fn quantity_min_max() {
        let a = Seconds::new(3);
        let b = Seconds::new(-4);
        assert_eq!(a.min(b), b);
        assert_eq!(a.max(b), a);
    }

    #[test]
    fn quantity_is_one_word() {
        assert_eq!(core::mem::size_of::<Kilometres>(), core::mem::size_of::<i64>());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Cast
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn cast_to_same_ratio() {
        let m = Metres::new(15);
        assert_eq!(m.cast::<One>().value(), 15);
    }

    #[test]
    fn cast_to_finer_and_coarser() {
        let mm: Millimetres = cast(Metres::new(2));
        assert_eq!(mm.value(), 2_000);

        let m: Metres = cast(Millimetres::new(2_999));
        assert_eq!(m.value(), 2);
    }

    #[test]
    fn cast_truncates_toward_zero() {
        let m: Metres = cast(Millimetres::new(-2_999));
        assert_eq!(m.value(), -2);
    }

    #[test]
    fn cast_in_const_context() {
        const KM: Kilometres = Kilometres::new(3);
        const M: Metres = KM.cast::<One>();
        assert_eq!(M.value(), 3_000);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Operator traits
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn operator_add() {
        let sum = Metres::new(100) + Metres::new(10);
        assert_eq!(sum.value(), 110);
        assert_eq!(sum.to_string(), "110 m");
    }

    #[test]
    fn operator_sub() {
        let diff = Metres::new(1_000) - Metres::new(100);
        assert_eq!(diff.value(), 900);
    }

    #[test]
    fn operator_add_mixed_ratio_takes_finer() {
        let sum = Metres::new(5) + Millimetres::new(3);
        assert!(same::<Millimetres, _>(&sum));
        assert_eq!(sum.value(), 5_003);
        assert_eq!(sum.to_string(), "5003 milli m");

        let sum = Millimetres::new(3) + Metres::new(5);
        assert!(same::<Millimetres, _>(&sum));
        assert_eq!(sum.value(), 5_003);
    }

    #[test]
    fn operator_mul_squares_dimension() {
        let area = Metres::new(24) * Metres::new(84);
        assert!(same::<SquareMetres, _>(&area));
        assert_eq!(area.value(), 2_016);
        assert_eq!(area.to_string(), "2016 m^2");
    }

    #[test]
    fn operator_div_builds_velocity() {
        let v = Metres::new(100_000) / Seconds::new(3_600);
        assert!(same::<MetresPerSecond, _>(&v));
        assert_eq!(v.value(), 27);
        assert_eq!(v.to_string(), "27 m·s^-1");
    }

    #[test]
    fn operator_div_same_dimension_is_unitless() {
        let r = Kilometres::new(12) / Hectometres::new(20);
        assert!(same::<Unitless, _>(&r));
        assert_eq!(r.value(), 6);
        assert_eq!(r.to_string(), "6");
    }

    #[test]
    fn operator_div_cancels_to_unitless_across_ratios() {
        let r = Hours::new(2) / Minutes::new(30);
        assert!(same::<Unitless, _>(&r));
        assert_eq!(r.value(), 4);
    }

    #[test]
    #[should_panic]
    fn operator_div_by_zero_panics() {
        let _ = Metres::new(1) / Seconds::new(0);
    }

    #[test]
    #[should_panic]
    fn operator_div_by_truncated_zero_panics() {
        // 1 mm cast to the hectometre ratio truncates to zero.
        let _ = Hectometres::new(1) / Millimetres::new(1).cast::<Hecto>();
    }

    #[test]
    fn operator_neg() {
        assert_eq!(-Metres::new(4), Metres::new(-4));
    }

    #[test]
    fn operator_scalar() {
        assert_eq!(Metres::new(4) * 3, Metres::new(12));
        assert_eq!(3 * Metres::new(4), Metres::new(12));
        assert_eq!(Metres::new(13) / 4, Metres::new(3));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Assignment operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn operator_add_assign_keeps_receiver_ratio() {
        let mut m = Metres::new(5);
        m += Millimetres::new(2_500);
        assert_eq!(m.value(), 7);

        let mut mm = Millimetres::new(5);
        mm += Metres::new(2);
        assert_eq!(mm.value(), 2_005);
    }

    #[test]
    fn operator_sub_assign_keeps_receiver_ratio() {
        let mut cm = Centimetres::new(100);
        cm -= Decimetres::new(3);
        assert_eq!(cm.value(), 70);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparisons
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn compare_across_ratios() {
        assert!(Metres::new(1) == Millimetres::new(1_000));
        assert!(Millimetres::new(999) < Metres::new(1));
        assert!(Kilometres::new(2) > Metres::new(1_999));
        assert!(Metres::new(3) != Metres::new(4));
        assert!(Metres::new(2) != Millimetres::new(1_000));
        assert!(Millimetres::new(1_000) <= Metres::new(1));
        assert!(Centimetres::new(99) <= Metres::new(1));
    }

    #[test]
    fn less_or_equal_casts_right_operand_into_left_ratio() {
        // 1999 mm truncates to 1 m on the right; on the left it stays 1999 mm against 1000 mm.
        assert!(Metres::new(1) <= Millimetres::new(1_999));
        assert!(!(Millimetres::new(1_999) <= Metres::new(1)));
    }

    #[test]
    fn compare_casts_right_operand_into_left_ratio() {
        // 1500 mm truncates to 1 m on the right, but stays exact on the left.
        assert!(Metres::new(1) == Millimetres::new(1_500));
        assert!(!(Millimetres::new(1_500) == Metres::new(1)));
        assert!(Millimetres::new(1_500) != Metres::new(1));
        assert!(!(Metres::new(1) != Millimetres::new(1_500)));
    }

    #[test]
    fn imperial_comparison() {
        assert!(Inches::new(12) == Feet::new(1));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_add_commutes(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            let lhs = Metres::new(a) + Millimetres::new(b);
            let rhs = Millimetres::new(b) + Metres::new(a);
            prop_assert_eq!(lhs.value(), rhs.value());
            prop_assert!(same::<Millimetres, _>(&lhs) && same::<Millimetres, _>(&rhs));
        }

        #[test]
        fn prop_sub_antisymmetric(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            let ab = Kilometres::new(a) - Metres::new(b);
            let ba = Metres::new(b) - Kilometres::new(a);
            prop_assert_eq!(ab, -ba);
        }

        #[test]
        fn prop_unitless_one_is_identity(a in -1_000_000i64..1_000_000) {
            let q = Metres::new(a) * Unitless::new(1);
            prop_assert_eq!(q.value(), a);
            prop_assert_eq!(q.to_string(), Metres::new(a).to_string());
        }

        #[test]
        fn prop_exact_cast_round_trip(a in -1_000_000_000i64..1_000_000_000) {
            let mm: Millimetres = cast(Metres::new(a));
            let back: Metres = cast(mm);
            prop_assert_eq!(back.value(), a);
        }

        #[test]
        fn prop_same_dimension_quotient_is_base_ratio(a in 1i64..1_000_000, b in 1i64..1_000_000) {
            let r = Metres::new(a) / Metres::new(b);
            prop_assert!(same::<Unitless, _>(&r));
            prop_assert_eq!(r.value(), a / b);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Serde
    // ─────────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use serde::{Deserialize, Serialize};

        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Leg {
            distance: Kilometres,
            #[serde(with = "crate::serde_with_unit")]
            climb: Millimetres,
        }

        #[test]
        fn serializes_bare_magnitude() {
            let json = serde_json::to_string(&Metres::new(110)).unwrap();
            assert_eq!(json, "110");
            let back: Metres = serde_json::from_str(&json).unwrap();
            assert_eq!(back.value(), 110);
        }

        #[test]
        fn serde_with_unit_writes_tags() {
            let leg = Leg {
                distance: Kilometres::new(12),
                climb: Millimetres::new(4_500),
            };
            let json = serde_json::to_string(&leg).unwrap();
            assert_eq!(
                json,
                r#"{"distance":12,"climb":{"value":4500,"ratio":[1,1000],"dimension":[1,0,0,0,0,0,0]}}"#
            );
            let back: Leg = serde_json::from_str(&json).unwrap();
            assert_eq!(back, leg);
        }

        #[test]
        fn serde_with_unit_tags_are_optional() {
            let back: Leg = serde_json::from_str(r#"{"distance":1,"climb":{"value":7}}"#).unwrap();
            assert_eq!(back.climb.value(), 7);
        }

        #[test]
        fn serde_with_unit_rejects_ratio_mismatch() {
            let err = serde_json::from_str::<Leg>(r#"{"distance":1,"climb":{"value":7,"ratio":[1,1]}}"#)
                .unwrap_err();
            assert!(err.to_string().contains("ratio mismatch"));
        }

        #[test]
        fn serde_with_unit_rejects_dimension_mismatch() {
            let err = serde_json::from_str::<Leg>(
                r#"{"distance":1,"climb":{"value":7,"dimension":[0,0,1,0,0,0,0]}}"#,
            )
            .unwrap_err();
            assert!(err.to_string().contains("dimension mismatch"));
        }

        #[test]
        fn serde_with_unit_rejects_missing_value() {
            let err = serde_json::from_str::<Leg>(r#"{"distance":1,"climb":{"ratio":[1,1000]}}"#).unwrap_err();
            assert!(err.to_string().contains("missing field `value`"));
        }

        #[test]
        fn serde_with_unit_rejects_duplicate_value() {
            let err = serde_json::from_str::<Leg>(r#"{"distance":1,"climb":{"value":1,"value":2}}"#).unwrap_err();
            assert!(err.to_string().contains("duplicate field `value`"));
        }
    }
}
