//! Predefined quantity aliases grouped by dimension.
//!
//! Every alias is a plain `Quantity<Dimension, Ratio>`; nothing here adds behaviour. The modules exist so that
//! common scales have readable names.
//!
//! ## Modules
//!
//! - [`length`]: metres and their SI prefixes, imperial approximations, areas and volumes.
//! - [`mass`]: kilograms (the SI base), grams, milligrams, tonnes.
//! - [`time`]: seconds and their SI prefixes, minutes, hours.
//! - [`current`], [`temperature`], [`amount`], [`luminous`]: the remaining SI base dimensions.
//! - [`mechanics`]: velocity, acceleration, frequency and force.
//! - [`unitless`]: dimensionless numbers and plane angles.

pub mod amount;
pub mod current;
pub mod length;
pub mod luminous;
pub mod mass;
pub mod mechanics;
pub mod temperature;
pub mod time;
pub mod unitless;
