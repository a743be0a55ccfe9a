//! Compile-time dimension-checked physical quantities with integer magnitudes.
//!
//! `phyq` is the user-facing crate in this workspace. It re-exports the full API from `phyq-core` plus the predefined
//! quantity aliases (lengths, masses, times, the remaining SI base dimensions and a few mechanical quantities).
//!
//! The core idea is: a value is always a `Quantity<D, R>`, where `D` is a dimension vector and `R` a scale ratio,
//! both zero-sized types. The magnitude is an `i64` counting units of `R`, so `Millimetres::new(3)` is three
//! thousandths of a metre.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Tracks exponents through `*` and `/`, so `m / s` is a velocity and `m / m` a plain number.
//! - Rescales mixed ratios automatically: `5 m + 3 mm` is `5003 mm`.
//!
//! # What this crate does not try to solve
//!
//! - Fractional precision: magnitudes are `i64`, casts and division truncate toward zero.
//! - Runtime unit parsing or arbitrary user-defined ratios.
//! - Overflow protection on the operators; use the `checked_*` methods where that matters.
//!
//! # Quick start
//!
//! ```rust
//! use phyq::{Metres, Millimetres};
//!
//! let sum = Metres::new(5) + Millimetres::new(3);
//! assert_eq!(sum.value(), 5003);
//! assert_eq!(sum.to_string(), "5003 milli m");
//! ```
//!
//! Compose derived dimensions (velocity = length / time):
//!
//! ```rust
//! use phyq::{Metres, MetresPerSecond, Seconds};
//!
//! let v: MetresPerSecond = Metres::new(100_000) / Seconds::new(3_600);
//! assert_eq!(v.value(), 27);
//! ```
//!
//! A quotient of like dimensions is a plain number at the base ratio:
//!
//! ```rust
//! use phyq::{Hectometres, Kilometres, Unitless};
//!
//! let r: Unitless = Kilometres::new(12) / Hectometres::new(20);
//! assert_eq!(r.value(), 6);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use phyq::{Metres, Seconds};
//!
//! let d = Metres::new(1);
//! let t = Seconds::new(1);
//! let _ = d + t; // cannot add a length to a time
//! ```
//!
//! # Modules
//!
//! Aliases are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `phyq::length` (metres with SI prefixes, inches, feet, yards, miles, areas, volumes)
//! - `phyq::mass` (kilograms, grams, milligrams, tonnes)
//! - `phyq::time` (seconds with SI prefixes, minutes, hours)
//! - `phyq::current`, `phyq::temperature`, `phyq::amount`, `phyq::luminous`
//! - `phyq::mechanics` (velocity, acceleration, jerk, frequency, force)
//! - `phyq::unitless` (plain numbers and plane angles)
//!
//! Base-unit constructors such as `phyq::literals::metres(5)` live in `phyq::literals`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `phyq-core`.
//! - `serde`: enables `serde` support for `Quantity<D, R>`; serialization is the raw `i64` magnitude, and
//!   `phyq::serde_with_unit` keeps the ratio and dimension alongside it.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! phyq = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! The operators panic on division by a zero magnitude and, in debug builds, on `i64` overflow. The `checked_*`
//! methods return [`QuantityError`] for those cases instead.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use phyq_core::*;

/// Derive macro used by `phyq-core` to define ratio marker types.
///
/// This macro expands in terms of `crate::Ratio`, so it is intended for use inside `phyq-core` (or crates exposing the
/// same crate-root API). Most users should not need this.
pub use phyq_derive::Ratio;

pub use phyq_core::units::amount::*;
pub use phyq_core::units::current::*;
pub use phyq_core::units::length::*;
pub use phyq_core::units::luminous::*;
pub use phyq_core::units::mass::*;
pub use phyq_core::units::mechanics::*;
pub use phyq_core::units::temperature::*;
pub use phyq_core::units::time::*;
pub use phyq_core::units::unitless::*;
