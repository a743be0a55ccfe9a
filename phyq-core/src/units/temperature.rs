//! Thermodynamic temperature quantities.
//!
//! Only absolute kelvin scales are modelled; offset scales such as Celsius are not ratios and are out of scope.

use crate::dimension::Temperature;
use crate::ratio::{Milli, One};
use crate::Quantity;

/// A temperature in kelvins.
pub type Kelvins = Quantity<Temperature, One>;
/// A temperature in millikelvins.
pub type Millikelvins = Quantity<Temperature, Milli>;
