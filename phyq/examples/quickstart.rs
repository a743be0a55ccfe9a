//! Minimal end-to-end example: mix ratios, derive a velocity and cancel a quotient back to a plain number.

use phyq::literals::{metres, seconds};
use phyq::{Hectometres, Kilometres, Metres, MetresPerSecond, Millimetres, Unitless};

fn main() {
    let sum = Metres::new(5) + Millimetres::new(3);
    assert_eq!(sum.value(), 5_003);
    println!("5 m + 3 mm = {}", sum);

    let v: MetresPerSecond = metres(100_000) / seconds(3_600);
    assert_eq!(v.value(), 27);
    println!("100 km in an hour = {}", v);

    let r: Unitless = Kilometres::new(12) / Hectometres::new(20);
    assert_eq!(r.value(), 6);
    println!("12 km / 20 hm = {}", r);
}
