//! Amount-of-substance quantities.

use crate::dimension::Amount;
use crate::ratio::{Micro, Milli, One};
use crate::Quantity;

/// An amount in moles.
pub type Moles = Quantity<Amount, One>;
/// An amount in millimoles.
pub type Millimoles = Quantity<Amount, Milli>;
/// An amount in micromoles.
pub type Micromoles = Quantity<Amount, Micro>;
