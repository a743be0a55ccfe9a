//! Mass quantities.
//!
//! The SI base unit of mass is the kilogram, so [`Kilograms`] sit at the base ratio and grams are [`Milli`]
//! kilograms.

use crate::dimension::Mass;
use crate::ratio::{Kilo, Micro, Milli, One};
use crate::Quantity;

/// A mass in kilograms.
pub type Kilograms = Quantity<Mass, One>;
/// A mass in grams (`1/1000 kg`).
pub type Grams = Quantity<Mass, Milli>;
/// A mass in milligrams (`1/1_000_000 kg`).
pub type Milligrams = Quantity<Mass, Micro>;
/// A mass in tonnes (`1000 kg`).
pub type Tonnes = Quantity<Mass, Kilo>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilograms_to_grams() {
        let g: Grams = Kilograms::new(3).cast();
        assert_eq!(g.value(), 3_000);
    }

    #[test]
    fn tonnes_plus_kilograms() {
        let total = Tonnes::new(2) + Kilograms::new(150);
        assert_eq!(total.value(), 2_150);
        assert_eq!(total, Kilograms::new(2_150));
    }

    #[test]
    fn milligrams_compare_with_grams() {
        assert!(Grams::new(1) == Milligrams::new(1_000));
        assert!(Milligrams::new(999) < Grams::new(1));
    }
}
