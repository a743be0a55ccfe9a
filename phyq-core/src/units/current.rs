//! Electric current quantities.

use crate::dimension::Current;
use crate::ratio::{Kilo, Micro, Milli, One};
use crate::Quantity;

/// A current in amperes.
pub type Amperes = Quantity<Current, One>;
/// A current in microamperes.
pub type Microamperes = Quantity<Current, Micro>;
/// A current in milliamperes.
pub type Milliamperes = Quantity<Current, Milli>;
/// A current in kiloamperes.
pub type Kiloamperes = Quantity<Current, Kilo>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milliamperes_sum() {
        let total = Amperes::new(1) + Milliamperes::new(250);
        assert_eq!(total.value(), 1_250);
        let ua: Microamperes = total.cast();
        assert_eq!(ua.value(), 1_250_000);
    }
}
