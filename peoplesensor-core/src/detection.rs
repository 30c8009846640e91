//! Detections returned by vision services

use serde::{Deserialize, Serialize};

/// Class label that counts as a person, compared case-insensitively.
pub const PERSON_CLASS: &str = "person";

/// A single object-recognition result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_max: Option<i64>,
    /// Score in 0.0..=1.0
    pub confidence: f64,
    pub class_name: String,
}

impl Detection {
    /// Detection without a bounding box.
    pub fn new(class_name: &str, confidence: f64) -> Self {
        Self {
            x_min: None,
            y_min: None,
            x_max: None,
            y_max: None,
            confidence,
            class_name: class_name.to_string(),
        }
    }

    /// True when this detection is a person scored strictly above `threshold`.
    pub fn is_person_above(&self, threshold: f64) -> bool {
        self.confidence > threshold && self.class_name.eq_ignore_ascii_case(PERSON_CLASS)
    }
}

/// True when any detection is a person scored strictly above `threshold`.
pub fn person_detected(detections: &[Detection], threshold: f64) -> bool {
    detections.iter().any(|d| d.is_person_above(threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_case_person_above_threshold() {
        let detections = vec![Detection::new("Person", 0.8)];
        assert!(person_detected(&detections, 0.7));
    }

    #[test]
    fn test_person_below_threshold() {
        let detections = vec![Detection::new("person", 0.6)];
        assert!(!person_detected(&detections, 0.7));
    }

    #[test]
    fn test_threshold_is_strict() {
        let detections = vec![Detection::new("person", 0.7)];
        assert!(!person_detected(&detections, 0.7));
    }

    #[test]
    fn test_other_classes_ignored() {
        let detections = vec![Detection::new("dog", 0.99), Detection::new("PERSON", 0.2)];
        assert!(!person_detected(&detections, 0.5));
        assert!(person_detected(&detections, 0.1));
    }

    #[test]
    fn test_empty_detections() {
        assert!(!person_detected(&[], 0.0));
    }

    #[test]
    fn test_bounding_box_optional_in_json() {
        let d: Detection =
            serde_json::from_str(r#"{"confidence": 0.9, "class_name": "person"}"#).unwrap();
        assert_eq!(d.x_min, None);
        assert_eq!(serde_json::to_value(&d).unwrap().as_object().unwrap().len(), 2);
    }
}
