// Property tests for the person threshold filter

use peoplesensor_core::{person_detected, Detection};
use proptest::prelude::*;

fn class_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("person".to_string()),
        Just("Person".to_string()),
        Just("PERSON".to_string()),
        Just("pErSoN".to_string()),
        Just("persons".to_string()),
        Just("dog".to_string()),
        Just("".to_string()),
    ]
}

fn detection() -> impl Strategy<Value = Detection> {
    (class_name(), 0.0f64..=1.0).prop_map(|(class, confidence)| Detection::new(&class, confidence))
}

proptest! {
    #[test]
    fn person_detected_iff_some_person_strictly_above(
        detections in prop::collection::vec(detection(), 0..16),
        threshold in 0.0f64..=1.0,
    ) {
        let expected = detections
            .iter()
            .any(|d| d.confidence > threshold && d.class_name.to_lowercase() == "person");
        prop_assert_eq!(person_detected(&detections, threshold), expected);
    }

    #[test]
    fn order_does_not_matter(
        mut detections in prop::collection::vec(detection(), 0..16),
        threshold in 0.0f64..=1.0,
    ) {
        let before = person_detected(&detections, threshold);
        detections.reverse();
        prop_assert_eq!(person_detected(&detections, threshold), before);
    }
}

#[test]
fn test_detection_at_threshold_not_counted() {
    let detections = vec![Detection::new("person", 0.5)];
    assert!(!person_detected(&detections, 0.5));
    assert!(person_detected(&detections, 0.49));
}
