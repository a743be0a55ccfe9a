//! Scale ratios.
//!
//! A ratio `NUM/DEN` says how many base units one unit of a magnitude represents: a magnitude of `3` at
//! [`Milli`] is `3/1000` of the base unit. Ratios are zero-sized marker types declared with
//! `#[derive(Ratio)]`, which reduces the fraction when the marker is defined.
//!
//! The markers below form a closed set ordered by value. [`Finer`] is generated over that order so the result ratio
//! of `+`, `-`, `*` and `/` is known to the compiler.
//!
//! The imperial markers are fixed rational approximations, not exact definitions.
//!
//! ```rust
//! use phyq_core::ratio::{FinerOf, Kilo, Milli, Ratio};
//!
//! assert_eq!((Milli::NUM, Milli::DEN), (1, 1000));
//! assert_eq!(<FinerOf<Kilo, Milli> as Ratio>::SYMBOL, "milli");
//! ```

use core::cmp::Ordering;
use core::fmt::Debug;
use phyq_derive::Ratio;

/// Trait implemented by every **scale ratio** marker.
///
/// # Invariants
///
/// - `NUM` and `DEN` are strictly positive and coprime.
/// - Implementations are zero-sized marker types.
pub trait Ratio: Copy + Debug + 'static {
    /// Numerator of the reduced fraction.
    const NUM: i64;
    /// Denominator of the reduced fraction.
    const DEN: i64;
    /// Name shown by [`core::fmt::Display`]; empty for [`One`].
    const SYMBOL: &'static str;
}

/// Selects the finer (smaller by value) of two ratios.
///
/// Equal ratios select themselves.
pub trait Finer<Rhs: Ratio>: Ratio {
    /// The finer ratio.
    type Output: Ratio;
}

/// The finer of two ratios.
pub type FinerOf<A, B> = <A as Finer<B>>::Output;

/// Greatest common divisor of two non-negative integers.
pub const fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Factor `(num, den)` that converts a magnitude at ratio `From` into ratio `To`, in lowest terms.
///
/// The factor is `From::NUM * To::DEN / (From::DEN * To::NUM)`.
pub const fn rescale_factor<From: Ratio, To: Ratio>() -> (i64, i64) {
    let num = From::NUM * To::DEN;
    let den = From::DEN * To::NUM;
    let divisor = gcd(num, den);
    (num / divisor, den / divisor)
}

/// Compares two ratios by rational value.
pub const fn compare<A: Ratio, B: Ratio>() -> Ordering {
    let lhs = A::NUM as i128 * B::DEN as i128;
    let rhs = B::NUM as i128 * A::DEN as i128;
    if lhs < rhs {
        Ordering::Less
    } else if lhs > rhs {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SI prefixes
// ─────────────────────────────────────────────────────────────────────────────

/// The base ratio `1/1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Ratio)]
#[ratio(num = 1, den = 1, symbol = "")]
pub struct One;

/// `1/1_000_000_000`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Ratio)]
#[ratio(num = 1, den = 1_000_000_000, symbol = "nano")]
pub struct Nano;

/// `1/1_000_000`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Ratio)]
#[ratio(num = 1, den = 1_000_000, symbol = "micro")]
pub struct Micro;

/// `1/1000`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Ratio)]
#[ratio(num = 1, den = 1000, symbol = "milli")]
pub struct Milli;

/// `1/100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Ratio)]
#[ratio(num = 1, den = 100, symbol = "centi")]
pub struct Centi;

/// `1/10`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Ratio)]
#[ratio(num = 1, den = 10, symbol = "deci")]
pub struct Deci;

/// `10/1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Ratio)]
#[ratio(num = 10, den = 1, symbol = "deca")]
pub struct Deca;

/// `100/1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Ratio)]
#[ratio(num = 100, den = 1, symbol = "hecto")]
pub struct Hecto;

/// `1000/1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Ratio)]
#[ratio(num = 1000, den = 1, symbol = "kilo")]
pub struct Kilo;

/// `1_000_000/1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Ratio)]
#[ratio(num = 1_000_000, den = 1, symbol = "mega")]
pub struct Mega;

// ─────────────────────────────────────────────────────────────────────────────
// Imperial length approximations
// ─────────────────────────────────────────────────────────────────────────────

/// Inch, approximated as `10000/393700` (`0.0254`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Ratio)]
#[ratio(num = 10000, den = 393700, symbol = "inch")]
pub struct Inch;

/// Foot, approximated as `10000/32808` (`≈ 0.304804`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Ratio)]
#[ratio(num = 10000, den = 32808, symbol = "foot")]
pub struct Foot;

/// Yard, approximated as `10000/10936` (`≈ 0.914411`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Ratio)]
#[ratio(num = 10000, den = 10936, symbol = "yard")]
pub struct Yard;

/// Statute mile, approximated as `160934/100` (`1609.34`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Ratio)]
#[ratio(num = 160934, den = 100, symbol = "mile")]
pub struct Mile;

// ─────────────────────────────────────────────────────────────────────────────
// Clock multiples
// ─────────────────────────────────────────────────────────────────────────────

/// `60/1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Ratio)]
#[ratio(num = 60, den = 1, symbol = "minute")]
pub struct Minute;

/// `3600/1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Ratio)]
#[ratio(num = 3600, den = 1, symbol = "hour")]
pub struct Hour;

// Ascending by value; the `ladder_is_ascending` test guards the order.
crate::impl_finer!(
    Nano, Micro, Milli, Centi, Inch, Deci, Foot, Yard, One, Deca, Minute, Hecto, Kilo, Mile, Hour, Mega,
);
