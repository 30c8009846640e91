//! Attributes of the people sensor model

use peoplesensor_core::{Api, Error, ResourceName, Result, Struct};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_CAMERA_SOURCE: &str = "camera-565webcam";
pub const DEFAULT_VISION_MODEL: &str = "peopleDetector";

pub const ATTR_CONFIDENCE: &str = "confidence";
pub const ATTR_CAMERA_SOURCE: &str = "camera_source";
pub const ATTR_VISION_MODEL: &str = "vision_model";

/// People sensor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeopleSensorConfig {
    /// Detections must score strictly above this to count
    pub confidence: f64,
    /// Camera the vision service reads from
    pub camera_source: String,
    /// Name of the vision service dependency
    pub vision_model: String,
}

impl Default for PeopleSensorConfig {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_CONFIDENCE,
            camera_source: DEFAULT_CAMERA_SOURCE.to_string(),
            vision_model: DEFAULT_VISION_MODEL.to_string(),
        }
    }
}

impl PeopleSensorConfig {
    /// Check raw attributes. Returns warnings, currently always empty.
    pub fn validate_attributes(attributes: &Struct) -> Result<Vec<String>> {
        if let Some(value) = attributes.get(ATTR_CONFIDENCE) {
            let confidence = value
                .as_f64()
                .ok_or_else(|| Error::InvalidConfig("confidence must be a float.".to_string()))?;
            if confidence == 0.0 {
                return Err(Error::InvalidConfig("confidence cannot be 0.".to_string()));
            }
        }
        Ok(Vec::new())
    }

    /// Parse attributes, applying defaults for absent keys. Attributes are
    /// validated first, so a config that fails `validate_attributes` never
    /// produces a value.
    pub fn from_attributes(attributes: &Struct) -> Result<Self> {
        Self::validate_attributes(attributes)?;

        let defaults = Self::default();
        let confidence = attributes
            .get(ATTR_CONFIDENCE)
            .and_then(Value::as_f64)
            .unwrap_or(defaults.confidence);
        let camera_source = string_attribute(attributes, ATTR_CAMERA_SOURCE).unwrap_or(defaults.camera_source);
        let vision_model = string_attribute(attributes, ATTR_VISION_MODEL).unwrap_or(defaults.vision_model);

        Ok(Self {
            confidence,
            camera_source,
            vision_model,
        })
    }

    /// Capability-scoped name of the vision dependency.
    pub fn vision_name(&self) -> ResourceName {
        ResourceName::new(Api::vision(), &self.vision_model)
    }
}

// Present but non-string values read as the empty string.
fn string_attribute(attributes: &Struct, key: &str) -> Option<String> {
    attributes
        .get(key)
        .map(|v| v.as_str().unwrap_or_default().to_string())
}
