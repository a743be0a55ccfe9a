//! Errors reported by the checked arithmetic API.

use thiserror::Error;

/// Failure of a `checked_*` or `exact_cast` operation on a [`Quantity`](crate::Quantity).
///
/// The plain operators never produce these; they truncate, wrap or panic instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// Rescaling a magnitude into another ratio overflowed `i64`.
    #[error("rescaling {value} by {num}/{den} overflows i64")]
    RescaleOverflow {
        /// Magnitude being rescaled.
        value: i64,
        /// Numerator of the reduced rescale factor.
        num: i64,
        /// Denominator of the reduced rescale factor.
        den: i64,
    },

    /// Rescaling would drop a non-zero remainder.
    #[error("rescaling {value} by {num}/{den} is inexact (remainder {remainder})")]
    Inexact {
        /// Magnitude being rescaled.
        value: i64,
        /// Numerator of the reduced rescale factor.
        num: i64,
        /// Denominator of the reduced rescale factor.
        den: i64,
        /// Remainder that truncation would discard.
        remainder: i64,
    },

    /// Combining two normalized magnitudes overflowed `i64`.
    #[error("{op} of {lhs} and {rhs} overflows i64")]
    Overflow {
        /// Operation name (`"addition"`, `"subtraction"`, …).
        op: &'static str,
        /// Left magnitude, in the common ratio.
        lhs: i64,
        /// Right magnitude, in the common ratio.
        rhs: i64,
    },

    /// The divisor was zero once cast into the common ratio.
    #[error("division by a zero-magnitude quantity")]
    DivisionByZero,
}
