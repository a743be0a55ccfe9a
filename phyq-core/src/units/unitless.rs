//! Dimensionless quantities.
//!
//! Every dimensionless quantity carries [`Dimensionless`] exponents. Plane angles are dimensionless in the SI, so
//! [`Radians`] is the same type as [`Unitless`]; the alias only documents intent.
//!
//! The quotient of two quantities of the same dimension is always dimensionless and always lands at the base ratio:
//!
//! ```rust
//! use phyq_core::length::{Hectometres, Kilometres};
//! use phyq_core::unitless::Unitless;
//!
//! let r: Unitless = Kilometres::new(12) / Hectometres::new(20);
//! assert_eq!(r.value(), 6);
//! assert_eq!(r.to_string(), "6");
//! ```

use crate::dimension::Dimensionless;
use crate::ratio::{Micro, Milli, One};
use crate::Quantity;

/// A plain dimensionless count at the base ratio.
pub type Unitless = Quantity<Dimensionless, One>;
/// A plane angle in radians.
pub type Radians = Quantity<Dimensionless, One>;
/// A plane angle in milliradians.
pub type Milliradians = Quantity<Dimensionless, Milli>;
/// A plane angle in microradians.
pub type Microradians = Quantity<Dimensionless, Micro>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Metres, Millimetres};
    use crate::time::{Hours, Minutes};

    #[test]
    fn same_dimension_quotient_is_base_ratio() {
        let r: Unitless = Metres::new(5) / Millimetres::new(250);
        assert_eq!(r.value(), 20);

        let r: Unitless = Hours::new(3) / Minutes::new(45);
        assert_eq!(r.value(), 4);
    }

    #[test]
    fn milliradians_display() {
        let a = Milliradians::new(1_571);
        assert_eq!(a.to_string(), "1571 milli");
        let rad: Radians = a.cast();
        assert_eq!(rad.value(), 1);
    }

    #[test]
    fn dimensionless_multiplication_keeps_finer_ratio() {
        let a = Milliradians::new(3) * Unitless::new(2);
        assert_eq!(a.value(), 6_000);
        assert!(a == Microradians::new(6_000_000));
    }
}
