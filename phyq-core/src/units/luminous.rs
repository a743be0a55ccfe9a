//! Luminous intensity quantities.

use crate::dimension::LuminousIntensity;
use crate::ratio::{Milli, One};
use crate::Quantity;

/// A luminous intensity in candelas.
pub type Candelas = Quantity<LuminousIntensity, One>;
/// A luminous intensity in millicandelas.
pub type Millicandelas = Quantity<LuminousIntensity, Milli>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candela_display() {
        assert_eq!(Candelas::new(12).to_string(), "12 cd");
        assert_eq!(Millicandelas::new(12).to_string(), "12 milli cd");
    }
}
