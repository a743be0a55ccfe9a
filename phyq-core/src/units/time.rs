//! Time quantities.
//!
//! The base ratio is the SI second. [`Minutes`] and [`Hours`] use the conventional `60 s` and `3600 s`.
//!
//! ```rust
//! use phyq_core::time::{Hours, Minutes};
//!
//! let t = Hours::new(1) + Minutes::new(30);
//! assert_eq!(t.value(), 90);
//! ```

use crate::dimension::Time;
use crate::ratio::{Hour, Micro, Milli, Minute, Nano, One};
use crate::Quantity;

/// A duration in seconds.
pub type Seconds = Quantity<Time, One>;
/// A duration in nanoseconds.
pub type Nanoseconds = Quantity<Time, Nano>;
/// A duration in microseconds.
pub type Microseconds = Quantity<Time, Micro>;
/// A duration in milliseconds.
pub type Milliseconds = Quantity<Time, Milli>;
/// A duration in minutes.
pub type Minutes = Quantity<Time, Minute>;
/// A duration in hours.
pub type Hours = Quantity<Time, Hour>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratio::Ratio;

    #[test]
    fn hours_to_seconds() {
        let s: Seconds = Hours::new(2).cast();
        assert_eq!(s.value(), 2 * Hour::NUM);
    }

    #[test]
    fn seconds_to_minutes_truncates() {
        let m: Minutes = Seconds::new(119).cast();
        assert_eq!(m.value(), 1);
    }

    #[test]
    fn milliseconds_to_nanoseconds() {
        let ns: Nanoseconds = Milliseconds::new(3).cast();
        assert_eq!(ns.value(), 3_000_000);
        let us: Microseconds = ns.cast();
        assert_eq!(us.value(), 3_000);
    }

    #[test]
    fn ordering_across_ratios() {
        assert!(Minutes::new(59) < Hours::new(1));
        assert!(Hours::new(1) >= Minutes::new(60));
        assert!(Seconds::new(3_601) > Hours::new(1));
    }
}
