//! Quantity type and its implementations.

use crate::dimension::{
    write_dimension, DimDiv, DimMul, DimProduct, DimQuotient, Dimension, QuotientRatio,
};
use crate::ratio::{rescale_factor, Finer, FinerOf, One, Ratio};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An integer magnitude tagged with a dimension `D` and a scale ratio `R`.
///
/// The magnitude counts units of `R`: `Quantity::<Length, Milli>::new(3)` is three millimetres. Both tags are
/// phantom types, so a quantity is exactly the size of an `i64`.
///
/// Operators between quantities rescale through [`Quantity::cast`] before touching magnitudes:
///
/// - `+`, `-` require the same dimension and return the finer of the two ratios.
/// - `*` sums dimension exponents, `/` subtracts them. Both return the finer ratio, except that a dimensionless
///   quotient always comes back at [`One`].
/// - `==`, `<`, … require the same dimension and compare in the left operand's ratio.
///
/// Integer division truncates toward zero, so sub-unit precision is dropped rather than rounded. Arithmetic overflow
/// is not guarded: it panics in debug builds and wraps in release builds. See the `checked_*` methods for fallible
/// variants.
///
/// # Examples
///
/// ```rust
/// use phyq_core::{Length, Milli, Quantity};
///
/// let m = Quantity::<Length>::new(5);
/// let mm = Quantity::<Length, Milli>::new(3);
/// let sum = m + mm;
/// assert_eq!(sum.value(), 5003);
/// assert_eq!(sum.to_string(), "5003 milli m");
/// ```
///
/// Mixing dimensions is a type error:
///
/// ```compile_fail
/// use phyq_core::{Length, Quantity, Time};
///
/// let _ = Quantity::<Length>::new(1) + Quantity::<Time>::new(1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<D: Dimension, R: Ratio = One>(i64, PhantomData<(D, R)>);

/// Ratio of `Quantity<D1, R1> / Quantity<D2, R2>`.
pub type QuotientRatioOf<D1, D2, R1, R2> =
    <DimQuotient<D1, D2> as QuotientRatio<FinerOf<R1, R2>>>::Output;

impl<D: Dimension, R: Ratio> Quantity<D, R> {
    /// Zero units.
    pub const ZERO: Self = Self::new(0);

    /// Creates a quantity of `value` units of `R`.
    ///
    /// ```rust
    /// use phyq_core::length::Millimetres;
    /// let d = Millimetres::new(3);
    /// assert_eq!(d.value(), 3);
    /// ```
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw magnitude, in units of `R`.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Re-expresses this quantity in ratio `T`.
    ///
    /// The magnitude becomes `value * R::NUM * T::DEN / (R::DEN * T::NUM)`, truncated toward zero.
    ///
    /// ```rust
    /// use phyq_core::length::{Kilometres, Metres};
    /// use phyq_core::Kilo;
    ///
    /// let m = Metres::new(2_999);
    /// let km: Kilometres = m.cast::<Kilo>();
    /// assert_eq!(km.value(), 2);
    /// ```
    #[inline]
    pub const fn cast<T: Ratio>(self) -> Quantity<D, T> {
        let (num, den) = rescale_factor::<R, T>();
        Quantity::new(self.0 * num / den)
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// `true` when the magnitude is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The smaller of two quantities of the same type.
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }

    /// The larger of two quantities of the same type.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        if self.0 >= other.0 {
            self
        } else {
            other
        }
    }
}

/// Re-expresses `quantity` in ratio `T`; the target is usually inferred from the binding.
///
/// ```rust
/// use phyq_core::cast;
/// use phyq_core::length::{Metres, Nanometres};
///
/// let nm: Nanometres = cast(Metres::new(2));
/// assert_eq!(nm.value(), 2_000_000_000);
/// ```
#[inline]
pub const fn cast<D: Dimension, R: Ratio, T: Ratio>(quantity: Quantity<D, R>) -> Quantity<D, T> {
    quantity.cast::<T>()
}

// ─────────────────────────────────────────────────────────────────────────────
// Compound assignment
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, R: Ratio, R2: Ratio> AddAssign<Quantity<D, R2>> for Quantity<D, R> {
    /// Adds `rhs` cast into this quantity's ratio; the receiver keeps its ratio.
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<D, R2>) {
        self.0 += rhs.cast::<R>().0;
    }
}

impl<D: Dimension, R: Ratio, R2: Ratio> SubAssign<Quantity<D, R2>> for Quantity<D, R> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<D, R2>) {
        self.0 -= rhs.cast::<R>().0;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D, R1, R2> Add<Quantity<D, R2>> for Quantity<D, R1>
where
    D: Dimension,
    R1: Ratio + Finer<R2>,
    R2: Ratio,
{
    type Output = Quantity<D, FinerOf<R1, R2>>;

    #[inline]
    fn add(self, rhs: Quantity<D, R2>) -> Self::Output {
        Quantity::new(self.cast::<FinerOf<R1, R2>>().0 + rhs.cast::<FinerOf<R1, R2>>().0)
    }
}

impl<D, R1, R2> Sub<Quantity<D, R2>> for Quantity<D, R1>
where
    D: Dimension,
    R1: Ratio + Finer<R2>,
    R2: Ratio,
{
    type Output = Quantity<D, FinerOf<R1, R2>>;

    #[inline]
    fn sub(self, rhs: Quantity<D, R2>) -> Self::Output {
        Quantity::new(self.cast::<FinerOf<R1, R2>>().0 - rhs.cast::<FinerOf<R1, R2>>().0)
    }
}

impl<D1, R1, D2, R2> Mul<Quantity<D2, R2>> for Quantity<D1, R1>
where
    D1: DimMul<D2>,
    D2: Dimension,
    R1: Ratio + Finer<R2>,
    R2: Ratio,
{
    type Output = Quantity<DimProduct<D1, D2>, FinerOf<R1, R2>>;

    #[inline]
    fn mul(self, rhs: Quantity<D2, R2>) -> Self::Output {
        Quantity::new(self.cast::<FinerOf<R1, R2>>().0 * rhs.cast::<FinerOf<R1, R2>>().0)
    }
}

impl<D1, R1, D2, R2> Div<Quantity<D2, R2>> for Quantity<D1, R1>
where
    D1: DimDiv<D2>,
    D2: Dimension,
    R1: Ratio + Finer<R2>,
    R2: Ratio,
    DimQuotient<D1, D2>: QuotientRatio<FinerOf<R1, R2>>,
{
    type Output = Quantity<DimQuotient<D1, D2>, QuotientRatioOf<D1, D2, R1, R2>>;

    /// # Panics
    ///
    /// Panics if `rhs`, once cast to the common ratio, is zero.
    #[inline]
    fn div(self, rhs: Quantity<D2, R2>) -> Self::Output {
        Quantity::new(self.cast::<FinerOf<R1, R2>>().0 / rhs.cast::<FinerOf<R1, R2>>().0)
    }
}

impl<D: Dimension, R: Ratio> Neg for Quantity<D, R> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<D: Dimension, R: Ratio> Mul<i64> for Quantity<D, R> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<D: Dimension, R: Ratio> Mul<Quantity<D, R>> for i64 {
    type Output = Quantity<D, R>;
    #[inline]
    fn mul(self, rhs: Quantity<D, R>) -> Self::Output {
        rhs * self
    }
}

impl<D: Dimension, R: Ratio> Div<i64> for Quantity<D, R> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: i64) -> Self {
        Self::new(self.0 / rhs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparisons
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, R1: Ratio, R2: Ratio> PartialEq<Quantity<D, R2>> for Quantity<D, R1> {
    /// Compares after casting `other` into `R1`.
    #[inline]
    fn eq(&self, other: &Quantity<D, R2>) -> bool {
        self.0 == other.cast::<R1>().0
    }
}

impl<D: Dimension, R: Ratio> Eq for Quantity<D, R> {}

impl<D: Dimension, R1: Ratio, R2: Ratio> PartialOrd<Quantity<D, R2>> for Quantity<D, R1> {
    /// Orders after casting `other` into `R1`.
    #[inline]
    fn partial_cmp(&self, other: &Quantity<D, R2>) -> Option<Ordering> {
        Some(self.0.cmp(&other.cast::<R1>().0))
    }
}

impl<D: Dimension, R: Ratio> Ord for Quantity<D, R> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<D: Dimension, R: Ratio> Hash for Quantity<D, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<D: Dimension, R: Ratio> Default for Quantity<D, R> {
    fn default() -> Self {
        Self::ZERO
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, R: Ratio> fmt::Display for Quantity<D, R> {
    /// Formats as `<value>[ <ratio>][ <dimension>]`, e.g. `110 m`, `5003 milli m` or `6`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        if !R::SYMBOL.is_empty() {
            write!(f, " {}", R::SYMBOL)?;
        }
        if !D::IS_DIMENSIONLESS {
            f.write_str(" ")?;
            write_dimension(f, &D::EXPONENTS)?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D: Dimension, R: Ratio> Serialize for Quantity<D, R> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension, R: Ratio> Deserialize<'de> for Quantity<D, R> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helper module for serializing quantities together with their tags.
///
/// Use this with `#[serde(with = "...")]` to keep the ratio and dimension in serialized data:
///
/// ```rust
/// use phyq_core::length::Millimetres;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Part {
///     #[serde(with = "phyq_core::serde_with_unit")]
///     width: Millimetres, // {"value": 12, "ratio": [1, 1000], "dimension": [1, 0, 0, 0, 0, 0, 0]}
///
///     depth: Millimetres, // 12
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a `Quantity<D, R>` as a struct with `value`, `ratio` and `dimension` fields.
    pub fn serialize<D, R, S>(quantity: &Quantity<D, R>, serializer: S) -> Result<S::Ok, S::Error>
    where
        D: Dimension,
        R: Ratio,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 3)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("ratio", &[R::NUM, R::DEN])?;
        state.serialize_field("dimension", &D::EXPONENTS)?;
        state.end()
    }

    /// Deserializes a `Quantity<D, R>` from a struct with `value` and optional `ratio`/`dimension` fields.
    ///
    /// Tags are validated when present and must match `R` and `D` exactly; no conversion is attempted.
    pub fn deserialize<'de, D, R, De>(deserializer: De) -> Result<Quantity<D, R>, De::Error>
    where
        D: Dimension,
        R: Ratio,
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Ratio,
            Dimension,
        }

        struct QuantityVisitor<D, R>(PhantomData<(D, R)>);

        impl<'de, D: Dimension, R: Ratio> Visitor<'de> for QuantityVisitor<D, R> {
            type Value = Quantity<D, R>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value, ratio and dimension fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<D, R>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<i64> = None;
                let mut ratio: Option<[i64; 2]> = None;
                let mut dimension: Option<[i32; 7]> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Ratio => {
                            if ratio.is_some() {
                                return Err(de::Error::duplicate_field("ratio"));
                            }
                            ratio = Some(map.next_value()?);
                        }
                        Field::Dimension => {
                            if dimension.is_some() {
                                return Err(de::Error::duplicate_field("dimension"));
                            }
                            dimension = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some([num, den]) = ratio {
                    if (num, den) != (R::NUM, R::DEN) {
                        return Err(de::Error::custom(format_args!(
                            "ratio mismatch: expected {}/{}, found {}/{}",
                            R::NUM,
                            R::DEN,
                            num,
                            den
                        )));
                    }
                }

                if let Some(exponents) = dimension {
                    if exponents != D::EXPONENTS {
                        return Err(de::Error::custom(format_args!(
                            "dimension mismatch: expected {:?}, found {:?}",
                            D::EXPONENTS,
                            exponents
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "ratio", "dimension"],
            QuantityVisitor(PhantomData),
        )
    }
}
