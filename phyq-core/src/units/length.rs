//! Length quantities.
//!
//! The base ratio is the metre. SI prefixes are exact; [`Inches`], [`Feet`], [`Yards`] and [`Miles`] use the fixed
//! rational approximations of their ratio markers.
//!
//! ```rust
//! use phyq_core::length::{Feet, Inches};
//!
//! let total = Feet::new(1) + Inches::new(6);
//! assert_eq!(total.value(), 18);
//! ```

use crate::dimension::{Area, Length, Volume};
use crate::ratio::{Centi, Deca, Deci, Foot, Hecto, Inch, Kilo, Micro, Mile, Milli, Nano, One, Yard};
use crate::Quantity;

/// A length in metres.
pub type Metres = Quantity<Length, One>;
/// A length in nanometres.
pub type Nanometres = Quantity<Length, Nano>;
/// A length in micrometres.
pub type Micrometres = Quantity<Length, Micro>;
/// A length in millimetres.
pub type Millimetres = Quantity<Length, Milli>;
/// A length in centimetres.
pub type Centimetres = Quantity<Length, Centi>;
/// A length in decimetres.
pub type Decimetres = Quantity<Length, Deci>;
/// A length in decametres.
pub type Decametres = Quantity<Length, Deca>;
/// A length in hectometres.
pub type Hectometres = Quantity<Length, Hecto>;
/// A length in kilometres.
pub type Kilometres = Quantity<Length, Kilo>;

/// A length in inches.
pub type Inches = Quantity<Length, Inch>;
/// A length in feet.
pub type Feet = Quantity<Length, Foot>;
/// A length in yards.
pub type Yards = Quantity<Length, Yard>;
/// A length in statute miles.
pub type Miles = Quantity<Length, Mile>;

/// An area in square metres.
pub type SquareMetres = Quantity<Area, One>;
/// A volume in cubic metres.
pub type CubicMetres = Quantity<Volume, One>;
