//! JSON bodies of the module and resource services

use crate::capability::{Readings, Struct};
use crate::config::ComponentConfig;
use crate::detection::Detection;
use crate::resource::{Api, Model, ResourceName};
use serde::{Deserialize, Serialize};

pub const API_PREFIX: &str = "/api/v1";
pub const API_KEY_ID_HEADER: &str = "x-api-key-id";
pub const API_KEY_HEADER: &str = "x-api-key";

pub const GET_READINGS: &str = "get_readings";
pub const DO_COMMAND: &str = "do_command";
pub const GET_DETECTIONS_FROM_CAMERA: &str = "get_detections_from_camera";

/// URL path of `method` on the resource `name`.
pub fn resource_method_path(name: &ResourceName, method: &str) -> String {
    format!("{}/{}/{}", API_PREFIX, name.route_path(), method)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceNamesResponse {
    pub resources: Vec<ResourceName>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetReadingsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Struct>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetReadingsResponse {
    pub readings: Readings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoCommandRequest {
    pub command: Struct,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoCommandResponse {
    pub result: Struct,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetDetectionsFromCameraRequest {
    pub camera_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Struct>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetDetectionsResponse {
    pub detections: Vec<Detection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyRequest {
    pub parent_address: String,
}

/// Models this module serves for one API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerDefinition {
    pub api: Api,
    pub models: Vec<Model>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub handlers: Vec<HandlerDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateConfigRequest {
    pub config: ComponentConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateConfigResponse {
    pub warnings: Vec<String>,
}

/// Body of both add and reconfigure requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRequest {
    pub config: ComponentConfig,
    #[serde(default)]
    pub dependencies: Vec<ResourceName>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveResourceRequest {
    pub name: ResourceName,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Empty {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_method_path() {
        let name = ResourceName::new(Api::vision(), "peopleDetector");
        assert_eq!(
            resource_method_path(&name, GET_DETECTIONS_FROM_CAMERA),
            "/api/v1/rdk/service/vision/peopleDetector/get_detections_from_camera"
        );
    }

    #[test]
    fn test_readings_request_without_extra() {
        let req: GetReadingsRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.extra.is_none());
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({}));
    }

    #[test]
    fn test_resource_request_parses_dependency_names() {
        let req: ResourceRequest = serde_json::from_value(json!({
            "config": {
                "name": "sensor1",
                "api": "rdk:component:sensor",
                "model": "walicki:sensor:peopleSensorJW"
            },
            "dependencies": ["rdk:service:vision/peopleDetector"]
        }))
        .unwrap();
        assert_eq!(req.dependencies[0], ResourceName::new(Api::vision(), "peopleDetector"));
    }
}
