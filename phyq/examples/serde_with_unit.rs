//! Example demonstrating the serde_with_unit helper module.
//!
//! Fields marked with `#[serde(with = "phyq::serde_with_unit")]` carry their ratio and dimension in the serialized
//! data; other fields serialize as the bare magnitude.
//!
//! Run with: cargo run --example serde_with_unit --features serde

#[cfg(feature = "serde")]
fn main() {
    use phyq::{Kilometres, Millimetres, Seconds};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug)]
    struct SurveyLeg {
        #[serde(with = "phyq::serde_with_unit")]
        distance: Kilometres,

        #[serde(with = "phyq::serde_with_unit")]
        climb: Millimetres,

        // Compact: the type carries the unit
        duration: Seconds,
    }

    let leg = SurveyLeg {
        distance: Kilometres::new(12),
        climb: Millimetres::new(340_500),
        duration: Seconds::new(5_400),
    };

    let json = serde_json::to_string_pretty(&leg).unwrap();
    println!("Serialized:\n{}\n", json);

    let restored: SurveyLeg = serde_json::from_str(&json).unwrap();
    println!("distance: {}", restored.distance);
    println!("climb:    {}", restored.climb);
    println!("duration: {}\n", restored.duration);

    // Tags are checked on the way in; a metre-tagged climb is rejected rather than silently rescaled.
    let wrong = r#"{
        "distance": {"value": 12},
        "climb": {"value": 340, "ratio": [1, 1], "dimension": [1, 0, 0, 0, 0, 0, 0]},
        "duration": 5400
    }"#;
    match serde_json::from_str::<SurveyLeg>(wrong) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(err) => println!("rejected: {}", err),
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_with_unit --features serde");
}
