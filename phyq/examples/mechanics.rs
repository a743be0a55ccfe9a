//! Derived dimensions: velocity, acceleration and force from base quantities, with checked arithmetic at the edges.
//!
//! Run with: cargo run --example mechanics

use phyq::{
    Feet, Inches, Kilograms, Metres, MetresPerSecond, MetresPerSecondSquared, Newtons, QuantityError, Seconds,
};

fn main() {
    // A cart covers 90 m in 30 s, then brakes to a stop over 3 s.
    let v: MetresPerSecond = Metres::new(90) / Seconds::new(30);
    let a: MetresPerSecondSquared = v / Seconds::new(3);
    let f: Newtons = Kilograms::new(250) * a;
    println!("velocity     = {}", v);
    println!("deceleration = {}", a);
    println!("force        = {}", f);

    // Mixed imperial lengths land in the finer ratio.
    let board = Feet::new(8) + Inches::new(5);
    println!("board length = {} ({} m, truncated)", board, board.cast::<phyq::One>().value());

    // The operators truncate and may overflow; the checked forms report it.
    match Metres::new(i64::MAX).checked_add(Metres::new(1)) {
        Ok(sum) => println!("sum = {}", sum),
        Err(err @ QuantityError::Overflow { .. }) => println!("refused: {}", err),
        Err(err) => println!("unexpected: {}", err),
    }
    match Metres::new(1).checked_div(Seconds::new(0)) {
        Ok(v) => println!("v = {}", v),
        Err(err) => println!("refused: {}", err),
    }
}
