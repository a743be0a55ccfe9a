//! Dimension vectors and the type-level functions combining them.
//!
//! A dimension is the seven-exponent vector `(m, kg, s, A, K, mol, cd)` encoded with [`typenum`] signed integers.
//! Multiplying two quantities sums their exponents ([`DimMul`]), dividing subtracts them ([`DimDiv`]). Both are
//! resolved by the compiler; nothing is stored at runtime.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Sub};

use typenum::{Diff, Integer, NInt, NonZero, PInt, Sum, Unsigned, N1, N2, N3, P1, P2, P3, Z0};

use crate::ratio::{One, Ratio};

/// Symbols of the seven SI base units, in exponent order.
pub const BASE_SYMBOLS: [&str; 7] = ["m", "kg", "s", "A", "K", "mol", "cd"];

/// Marker trait for **dimension vectors**.
///
/// Implemented only by [`Dim`]; the exponents are available at runtime for formatting and serialization.
pub trait Dimension: Copy + fmt::Debug + 'static {
    /// Exponents in `(m, kg, s, A, K, mol, cd)` order.
    const EXPONENTS: [i32; 7];

    /// `true` when every exponent is zero.
    const IS_DIMENSIONLESS: bool = is_zero_vector(&Self::EXPONENTS);
}

const fn is_zero_vector(exponents: &[i32; 7]) -> bool {
    let mut i = 0;
    while i < exponents.len() {
        if exponents[i] != 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// A dimension vector: one `typenum` integer exponent per SI base dimension.
///
/// Parameters, in order: length (`m`), mass (`kg`), time (`s`), electric current (`A`), thermodynamic
/// temperature (`K`), amount of substance (`mol`), luminous intensity (`cd`).
///
/// ```rust
/// use phyq_core::{Dim, Dimension};
/// use typenum::{N1, P1, Z0};
///
/// type Velocity = Dim<P1, Z0, N1, Z0, Z0, Z0, Z0>;
/// assert_eq!(Velocity::EXPONENTS, [1, 0, -1, 0, 0, 0, 0]);
/// ```
pub struct Dim<L, M, T, I, Th, N, J>(PhantomData<(L, M, T, I, Th, N, J)>);

// Manual impls: derives would demand the same traits from every exponent type.
impl<L, M, T, I, Th, N, J> Clone for Dim<L, M, T, I, Th, N, J> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L, M, T, I, Th, N, J> Copy for Dim<L, M, T, I, Th, N, J> {}

impl<L, M, T, I, Th, N, J> Default for Dim<L, M, T, I, Th, N, J> {
    fn default() -> Self {
        Dim(PhantomData)
    }
}

impl<L, M, T, I, Th, N, J> fmt::Debug for Dim<L, M, T, I, Th, N, J>
where
    L: Integer,
    M: Integer,
    T: Integer,
    I: Integer,
    Th: Integer,
    N: Integer,
    J: Integer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let exponents = [L::I32, M::I32, T::I32, I::I32, Th::I32, N::I32, J::I32];
        f.debug_tuple("Dim").field(&exponents).finish()
    }
}

impl<L, M, T, I, Th, N, J> Dimension for Dim<L, M, T, I, Th, N, J>
where
    L: Integer,
    M: Integer,
    T: Integer,
    I: Integer,
    Th: Integer,
    N: Integer,
    J: Integer,
{
    const EXPONENTS: [i32; 7] = [L::I32, M::I32, T::I32, I::I32, Th::I32, N::I32, J::I32];
}

/// Type-level product of two dimensions (component-wise exponent sum).
pub trait DimMul<Rhs: Dimension>: Dimension {
    /// The combined dimension.
    type Output: Dimension;
}

/// Type-level quotient of two dimensions (component-wise exponent difference).
pub trait DimDiv<Rhs: Dimension>: Dimension {
    /// The combined dimension.
    type Output: Dimension;
}

/// Dimension of `A * B`.
pub type DimProduct<A, B> = <A as DimMul<B>>::Output;
/// Dimension of `A / B`.
pub type DimQuotient<A, B> = <A as DimDiv<B>>::Output;

impl<La, Ma, Ta, Ia, Ka, Na, Ja, Lb, Mb, Tb, Ib, Kb, Nb, Jb>
    DimMul<Dim<Lb, Mb, Tb, Ib, Kb, Nb, Jb>> for Dim<La, Ma, Ta, Ia, Ka, Na, Ja>
where
    La: Integer + Add<Lb>,
    Ma: Integer + Add<Mb>,
    Ta: Integer + Add<Tb>,
    Ia: Integer + Add<Ib>,
    Ka: Integer + Add<Kb>,
    Na: Integer + Add<Nb>,
    Ja: Integer + Add<Jb>,
    Lb: Integer,
    Mb: Integer,
    Tb: Integer,
    Ib: Integer,
    Kb: Integer,
    Nb: Integer,
    Jb: Integer,
    Sum<La, Lb>: Integer,
    Sum<Ma, Mb>: Integer,
    Sum<Ta, Tb>: Integer,
    Sum<Ia, Ib>: Integer,
    Sum<Ka, Kb>: Integer,
    Sum<Na, Nb>: Integer,
    Sum<Ja, Jb>: Integer,
{
    type Output = Dim<
        Sum<La, Lb>,
        Sum<Ma, Mb>,
        Sum<Ta, Tb>,
        Sum<Ia, Ib>,
        Sum<Ka, Kb>,
        Sum<Na, Nb>,
        Sum<Ja, Jb>,
    >;
}

impl<La, Ma, Ta, Ia, Ka, Na, Ja, Lb, Mb, Tb, Ib, Kb, Nb, Jb>
    DimDiv<Dim<Lb, Mb, Tb, Ib, Kb, Nb, Jb>> for Dim<La, Ma, Ta, Ia, Ka, Na, Ja>
where
    La: Integer + Sub<Lb>,
    Ma: Integer + Sub<Mb>,
    Ta: Integer + Sub<Tb>,
    Ia: Integer + Sub<Ib>,
    Ka: Integer + Sub<Kb>,
    Na: Integer + Sub<Nb>,
    Ja: Integer + Sub<Jb>,
    Lb: Integer,
    Mb: Integer,
    Tb: Integer,
    Ib: Integer,
    Kb: Integer,
    Nb: Integer,
    Jb: Integer,
    Diff<La, Lb>: Integer,
    Diff<Ma, Mb>: Integer,
    Diff<Ta, Tb>: Integer,
    Diff<Ia, Ib>: Integer,
    Diff<Ka, Kb>: Integer,
    Diff<Na, Nb>: Integer,
    Diff<Ja, Jb>: Integer,
{
    type Output = Dim<
        Diff<La, Lb>,
        Diff<Ma, Mb>,
        Diff<Ta, Tb>,
        Diff<Ia, Ib>,
        Diff<Ka, Kb>,
        Diff<Na, Nb>,
        Diff<Ja, Jb>,
    >;
}

/// Picks the scale ratio of a quotient whose dimension is `Self`.
///
/// A dimensionless quotient is always expressed in [`One`]; any other dimension keeps the candidate ratio `R`.
/// The impls dispatch on the first non-zero exponent, so exactly one applies to every concrete [`Dim`].
pub trait QuotientRatio<R: Ratio>: Dimension {
    /// Ratio of the quotient.
    type Output: Ratio;
}

impl<R: Ratio> QuotientRatio<R> for Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0> {
    type Output = One;
}

macro_rules! impl_scaled_quotient {
    ([$($zero:ty),*], [$($tail:ident),*]) => {
        impl<U, $($tail,)* R> QuotientRatio<R> for Dim<$($zero,)* PInt<U>, $($tail),*>
        where
            U: Unsigned + NonZero,
            $($tail: Integer,)*
            R: Ratio,
        {
            type Output = R;
        }

        impl<U, $($tail,)* R> QuotientRatio<R> for Dim<$($zero,)* NInt<U>, $($tail),*>
        where
            U: Unsigned + NonZero,
            $($tail: Integer,)*
            R: Ratio,
        {
            type Output = R;
        }
    };
}

impl_scaled_quotient!([], [M, T, I, Th, N, J]);
impl_scaled_quotient!([Z0], [T, I, Th, N, J]);
impl_scaled_quotient!([Z0, Z0], [I, Th, N, J]);
impl_scaled_quotient!([Z0, Z0, Z0], [Th, N, J]);
impl_scaled_quotient!([Z0, Z0, Z0, Z0], [N, J]);
impl_scaled_quotient!([Z0, Z0, Z0, Z0, Z0], [J]);
impl_scaled_quotient!([Z0, Z0, Z0, Z0, Z0, Z0], []);

/// Writes `exponents` as a product of base symbols in `m kg s A K mol cd` order, e.g. `m·kg·s^-2`.
///
/// Zero exponents are skipped and an exponent of one is implicit. Nothing is written for the zero vector.
pub fn write_dimension(f: &mut fmt::Formatter<'_>, exponents: &[i32; 7]) -> fmt::Result {
    let mut first = true;
    for (symbol, &exp) in BASE_SYMBOLS.iter().zip(exponents.iter()) {
        if exp == 0 {
            continue;
        }
        if !first {
            f.write_str("·")?;
        }
        first = false;
        f.write_str(symbol)?;
        if exp != 1 {
            write!(f, "^{}", exp)?;
        }
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Named dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// The zero vector (pure numbers, plane angles, same-dimension quotients).
pub type Dimensionless = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Length (`m`).
pub type Length = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Mass (`kg`).
pub type Mass = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
/// Time (`s`).
pub type Time = Dim<Z0, Z0, P1, Z0, Z0, Z0, Z0>;
/// Electric current (`A`).
pub type Current = Dim<Z0, Z0, Z0, P1, Z0, Z0, Z0>;
/// Thermodynamic temperature (`K`).
pub type Temperature = Dim<Z0, Z0, Z0, Z0, P1, Z0, Z0>;
/// Amount of substance (`mol`).
pub type Amount = Dim<Z0, Z0, Z0, Z0, Z0, P1, Z0>;
/// Luminous intensity (`cd`).
pub type LuminousIntensity = Dim<Z0, Z0, Z0, Z0, Z0, Z0, P1>;

/// Area (`m^2`).
pub type Area = Dim<P2, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Volume (`m^3`).
pub type Volume = Dim<P3, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Velocity (`m·s^-1`).
pub type VelocityDim = Dim<P1, Z0, N1, Z0, Z0, Z0, Z0>;
/// Acceleration (`m·s^-2`).
pub type AccelerationDim = Dim<P1, Z0, N2, Z0, Z0, Z0, Z0>;
/// Frequency (`s^-1`).
pub type FrequencyDim = Dim<Z0, Z0, N1, Z0, Z0, Z0, Z0>;
/// Force (`m·kg·s^-2`).
pub type ForceDim = Dim<P1, P1, N2, Z0, Z0, Z0, Z0>;
/// Jerk (`m·s^-3`).
pub type JerkDim = Dim<P1, Z0, N3, Z0, Z0, Z0, Z0>;
