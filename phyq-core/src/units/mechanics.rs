//! Derived mechanical quantities: velocity, acceleration, jerk, frequency and force.
//!
//! These aliases name the types that `*` and `/` already produce, so they can be used as annotations on the results
//! of ordinary arithmetic:
//!
//! ```rust
//! use phyq_core::length::Metres;
//! use phyq_core::mechanics::MetresPerSecond;
//! use phyq_core::time::Seconds;
//!
//! let v: MetresPerSecond = Metres::new(100_000) / Seconds::new(3_600);
//! assert_eq!(v.value(), 27);
//! ```

use crate::dimension::{AccelerationDim, ForceDim, FrequencyDim, JerkDim, VelocityDim};
use crate::ratio::{Kilo, Mega, Milli, One};
use crate::Quantity;

/// A velocity in metres per second.
pub type MetresPerSecond = Quantity<VelocityDim, One>;
/// A velocity in millimetres per second.
pub type MillimetresPerSecond = Quantity<VelocityDim, Milli>;
/// A velocity in kilometres per second.
pub type KilometresPerSecond = Quantity<VelocityDim, Kilo>;

/// An acceleration in metres per second squared.
pub type MetresPerSecondSquared = Quantity<AccelerationDim, One>;
/// A jerk in metres per second cubed.
pub type MetresPerSecondCubed = Quantity<JerkDim, One>;

/// A frequency in hertz.
pub type Hertz = Quantity<FrequencyDim, One>;
/// A frequency in kilohertz.
pub type Kilohertz = Quantity<FrequencyDim, Kilo>;
/// A frequency in megahertz.
pub type Megahertz = Quantity<FrequencyDim, Mega>;

/// A force in newtons.
pub type Newtons = Quantity<ForceDim, One>;
/// A force in kilonewtons.
pub type Kilonewtons = Quantity<ForceDim, Kilo>;
