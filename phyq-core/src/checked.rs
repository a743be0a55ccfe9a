//! Fallible counterparts of the quantity operators.
//!
//! The operators on [`Quantity`] follow plain `i64` semantics. The methods here compute the same result types but
//! report overflow, truncation and division by zero as [`QuantityError`] instead.
//!
//! ```rust
//! use phyq_core::length::{Kilometres, Metres};
//! use phyq_core::{Kilo, QuantityError};
//!
//! let m = Metres::new(2_500);
//! assert_eq!(m.checked_cast::<Kilo>().unwrap(), Kilometres::new(2));
//! assert!(matches!(m.exact_cast::<Kilo>(), Err(QuantityError::Inexact { remainder: 500, .. })));
//! ```

use crate::dimension::{DimDiv, DimMul, DimProduct, DimQuotient, Dimension, QuotientRatio};
use crate::error::QuantityError;
use crate::quantity::{Quantity, QuotientRatioOf};
use crate::ratio::{rescale_factor, Finer, FinerOf, Ratio};

fn reject<T>(err: QuantityError) -> Result<T, QuantityError> {
    log::debug!("checked quantity operation failed: {}", err);
    Err(err)
}

/// Scales `value` by `num` and reports the pre-division product.
fn scaled(value: i64, num: i64, den: i64) -> Result<i64, QuantityError> {
    match value.checked_mul(num) {
        Some(product) => Ok(product),
        None => reject(QuantityError::RescaleOverflow { value, num, den }),
    }
}

fn combine(
    op: &'static str,
    lhs: i64,
    rhs: i64,
    f: fn(i64, i64) -> Option<i64>,
) -> Result<i64, QuantityError> {
    match f(lhs, rhs) {
        Some(value) => Ok(value),
        None => reject(QuantityError::Overflow { op, lhs, rhs }),
    }
}

impl<D: Dimension, R: Ratio> Quantity<D, R> {
    /// Like [`Quantity::cast`], but fails instead of overflowing.
    pub fn checked_cast<T: Ratio>(self) -> Result<Quantity<D, T>, QuantityError> {
        let (num, den) = rescale_factor::<R, T>();
        let product = scaled(self.value(), num, den)?;
        Ok(Quantity::new(product / den))
    }

    /// Like [`Quantity::checked_cast`], but also fails when truncation would drop a remainder.
    pub fn exact_cast<T: Ratio>(self) -> Result<Quantity<D, T>, QuantityError> {
        let (num, den) = rescale_factor::<R, T>();
        let product = scaled(self.value(), num, den)?;
        let remainder = product % den;
        if remainder != 0 {
            return reject(QuantityError::Inexact {
                value: self.value(),
                num,
                den,
                remainder,
            });
        }
        Ok(Quantity::new(product / den))
    }

    /// Checked `self + rhs`.
    pub fn checked_add<R2>(
        self,
        rhs: Quantity<D, R2>,
    ) -> Result<Quantity<D, FinerOf<R, R2>>, QuantityError>
    where
        R: Finer<R2>,
        R2: Ratio,
    {
        let lhs = self.checked_cast::<FinerOf<R, R2>>()?.value();
        let rhs = rhs.checked_cast::<FinerOf<R, R2>>()?.value();
        combine("addition", lhs, rhs, i64::checked_add).map(Quantity::new)
    }

    /// Checked `self - rhs`.
    pub fn checked_sub<R2>(
        self,
        rhs: Quantity<D, R2>,
    ) -> Result<Quantity<D, FinerOf<R, R2>>, QuantityError>
    where
        R: Finer<R2>,
        R2: Ratio,
    {
        let lhs = self.checked_cast::<FinerOf<R, R2>>()?.value();
        let rhs = rhs.checked_cast::<FinerOf<R, R2>>()?.value();
        combine("subtraction", lhs, rhs, i64::checked_sub).map(Quantity::new)
    }

    /// Checked `self * rhs`.
    pub fn checked_mul<D2, R2>(
        self,
        rhs: Quantity<D2, R2>,
    ) -> Result<Quantity<DimProduct<D, D2>, FinerOf<R, R2>>, QuantityError>
    where
        D: DimMul<D2>,
        D2: Dimension,
        R: Finer<R2>,
        R2: Ratio,
    {
        let lhs = self.checked_cast::<FinerOf<R, R2>>()?.value();
        let rhs = rhs.checked_cast::<FinerOf<R, R2>>()?.value();
        combine("multiplication", lhs, rhs, i64::checked_mul).map(Quantity::new)
    }

    /// Checked `self / rhs`; a zero divisor yields [`QuantityError::DivisionByZero`].
    pub fn checked_div<D2, R2>(
        self,
        rhs: Quantity<D2, R2>,
    ) -> Result<Quantity<DimQuotient<D, D2>, QuotientRatioOf<D, D2, R, R2>>, QuantityError>
    where
        D: DimDiv<D2>,
        D2: Dimension,
        R: Finer<R2>,
        R2: Ratio,
        DimQuotient<D, D2>: QuotientRatio<FinerOf<R, R2>>,
    {
        let lhs = self.checked_cast::<FinerOf<R, R2>>()?.value();
        let rhs = rhs.checked_cast::<FinerOf<R, R2>>()?.value();
        if rhs == 0 {
            return reject(QuantityError::DivisionByZero);
        }
        combine("division", lhs, rhs, i64::checked_div).map(Quantity::new)
    }
}
