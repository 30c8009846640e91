//! Resource identity: APIs, models and fully qualified resource names

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const RDK_NAMESPACE: &str = "rdk";

/// An API triplet such as `rdk:component:sensor`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Api {
    pub namespace: String,
    pub resource_type: String,
    pub subtype: String,
}

impl Api {
    pub fn new(namespace: &str, resource_type: &str, subtype: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            resource_type: resource_type.to_string(),
            subtype: subtype.to_string(),
        }
    }

    /// `rdk:component:sensor`
    pub fn sensor() -> Self {
        Self::new(RDK_NAMESPACE, "component", "sensor")
    }

    /// `rdk:service:vision`
    pub fn vision() -> Self {
        Self::new(RDK_NAMESPACE, "service", "vision")
    }
}

impl fmt::Display for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.namespace, self.resource_type, self.subtype)
    }
}

impl FromStr for Api {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [namespace, resource_type, subtype]
                if !namespace.is_empty() && !resource_type.is_empty() && !subtype.is_empty() =>
            {
                Ok(Self::new(namespace, resource_type, subtype))
            }
            _ => Err(Error::InvalidName(format!("api must be namespace:type:subtype, got {:?}", s))),
        }
    }
}

impl TryFrom<String> for Api {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Api> for String {
    fn from(api: Api) -> Self {
        api.to_string()
    }
}

/// Namespace and family half of a model identifier, e.g. `walicki:sensor`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelFamily {
    pub namespace: String,
    pub family: String,
}

impl ModelFamily {
    pub fn new(namespace: &str, family: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            family: family.to_string(),
        }
    }
}

/// A namespaced model identifier, e.g. `walicki:sensor:peopleSensorJW`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Model {
    pub family: ModelFamily,
    pub name: String,
}

impl Model {
    pub fn new(family: ModelFamily, name: &str) -> Self {
        Self {
            family,
            name: name.to_string(),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.family.namespace, self.family.family, self.name)
    }
}

impl FromStr for Model {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [namespace, family, name]
                if !namespace.is_empty() && !family.is_empty() && !name.is_empty() =>
            {
                Ok(Self::new(ModelFamily::new(namespace, family), name))
            }
            _ => Err(Error::InvalidName(format!("model must be namespace:family:name, got {:?}", s))),
        }
    }
}

impl TryFrom<String> for Model {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Model> for String {
    fn from(model: Model) -> Self {
        model.to_string()
    }
}

/// Fully qualified name of a resource: `<api>/<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceName {
    pub api: Api,
    pub name: String,
}

impl ResourceName {
    pub fn new(api: Api, name: &str) -> Self {
        Self {
            api,
            name: name.to_string(),
        }
    }

    /// Path segment used by the resource service routes:
    /// `{namespace}/{type}/{subtype}/{name}`.
    pub fn route_path(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.api.namespace, self.api.resource_type, self.api.subtype, self.name
        )
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.api, self.name)
    }
}

impl FromStr for ResourceName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (api, name) = s
            .split_once('/')
            .ok_or_else(|| Error::InvalidName(format!("resource name must be api/name, got {:?}", s)))?;
        if name.is_empty() {
            return Err(Error::InvalidName(format!("empty resource name in {:?}", s)));
        }
        Ok(Self::new(api.parse()?, name))
    }
}

impl TryFrom<String> for ResourceName {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ResourceName> for String {
    fn from(name: ResourceName) -> Self {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_display_and_parse() {
        assert_eq!(Api::sensor().to_string(), "rdk:component:sensor");
        assert_eq!("rdk:service:vision".parse::<Api>().unwrap(), Api::vision());
        assert!("rdk:service".parse::<Api>().is_err());
        assert!("rdk::vision".parse::<Api>().is_err());
    }

    #[test]
    fn test_model_display_and_parse() {
        let model = Model::new(ModelFamily::new("walicki", "sensor"), "peopleSensorJW");
        assert_eq!(model.to_string(), "walicki:sensor:peopleSensorJW");
        assert_eq!("walicki:sensor:peopleSensorJW".parse::<Model>().unwrap(), model);
        assert!("peopleSensorJW".parse::<Model>().is_err());
    }

    #[test]
    fn test_resource_name_parse() {
        let name: ResourceName = "rdk:service:vision/peopleDetector".parse().unwrap();
        assert_eq!(name.api, Api::vision());
        assert_eq!(name.name, "peopleDetector");
        assert_eq!(name.route_path(), "rdk/service/vision/peopleDetector");

        assert!("peopleDetector".parse::<ResourceName>().is_err());
        assert!("rdk:service:vision/".parse::<ResourceName>().is_err());
    }

    #[test]
    fn test_resource_name_serde_as_string() {
        let name = ResourceName::new(Api::sensor(), "sensor1");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"rdk:component:sensor/sensor1\"");
        let back: ResourceName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }
}
