//! Component configuration as delivered by the host runtime

use crate::capability::Struct;
use crate::error::Result;
use crate::resource::{Api, Model, ResourceName};
use serde::{Deserialize, Serialize};

/// Configuration record for one component instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    pub name: String,
    pub api: Api,
    pub model: Model,
    /// Model-specific attributes, parsed by the model itself
    #[serde(default)]
    pub attributes: Struct,
    #[serde(default)]
    pub depends_on: Vec<String>,
}

impl ComponentConfig {
    pub fn new(name: &str, api: Api, model: Model) -> Self {
        Self {
            name: name.to_string(),
            api,
            model,
            attributes: Struct::new(),
            depends_on: Vec::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Struct) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn resource_name(&self) -> ResourceName {
        ResourceName::new(self.api.clone(), &self.name)
    }

    /// Parse a config from a JSON value, e.g. one section of a robot config file.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_from_json() {
        let config = ComponentConfig::from_json(json!({
            "name": "sensor1",
            "api": "rdk:component:sensor",
            "model": "walicki:sensor:peopleSensorJW",
            "attributes": {"confidence": 0.9},
            "depends_on": ["peopleDetector"]
        }))
        .unwrap();

        assert_eq!(config.name, "sensor1");
        assert_eq!(config.api, Api::sensor());
        assert_eq!(config.model.name, "peopleSensorJW");
        assert_eq!(config.attributes.get("confidence"), Some(&json!(0.9)));
        assert_eq!(config.depends_on, vec!["peopleDetector".to_string()]);
        assert_eq!(config.resource_name().to_string(), "rdk:component:sensor/sensor1");
    }

    #[test]
    fn test_config_defaults_missing_attributes() {
        let config = ComponentConfig::from_json(json!({
            "name": "sensor1",
            "api": "rdk:component:sensor",
            "model": "walicki:sensor:peopleSensorJW"
        }))
        .unwrap();
        assert!(config.attributes.is_empty());
        assert!(config.depends_on.is_empty());
    }

    #[test]
    fn test_config_rejects_bad_model() {
        let result = ComponentConfig::from_json(json!({
            "name": "sensor1",
            "api": "rdk:component:sensor",
            "model": "peopleSensorJW"
        }));
        assert!(result.is_err());
    }
}
