//! Remote vision service

use crate::robot::RobotClient;
use crate::transport::Transport;
use async_trait::async_trait;
use peoplesensor_core::wire::{
    resource_method_path, DoCommandRequest, DoCommandResponse, GetDetectionsFromCameraRequest,
    GetDetectionsResponse, DO_COMMAND, GET_DETECTIONS_FROM_CAMERA,
};
use peoplesensor_core::{Api, Detection, Resource, ResourceName, Result, Struct, VisionService};
use tracing::debug;

#[derive(Clone)]
pub struct VisionClient {
    name: ResourceName,
    transport: Transport,
}

impl VisionClient {
    pub fn new(transport: Transport, name: &str) -> Self {
        Self {
            name: ResourceName::new(Api::vision(), name),
            transport,
        }
    }

    /// Open the vision service `name`, failing if the robot does not expose it.
    pub fn from_robot(robot: &RobotClient, name: &str) -> Result<Self> {
        let name = robot.find(&Api::vision(), name)?;
        Ok(Self {
            name,
            transport: robot.transport().clone(),
        })
    }
}

#[async_trait]
impl Resource for VisionClient {
    fn name(&self) -> ResourceName {
        self.name.clone()
    }

    async fn do_command(&self, command: Struct) -> Result<Struct> {
        let response: DoCommandResponse = self
            .transport
            .post(&resource_method_path(&self.name, DO_COMMAND), &DoCommandRequest { command })
            .await?;
        Ok(response.result)
    }
}

#[async_trait]
impl VisionService for VisionClient {
    async fn get_detections_from_camera(
        &self,
        camera_name: &str,
        extra: Option<Struct>,
    ) -> Result<Vec<Detection>> {
        let request = GetDetectionsFromCameraRequest {
            camera_name: camera_name.to_string(),
            extra,
        };
        let response: GetDetectionsResponse = self
            .transport
            .post(&resource_method_path(&self.name, GET_DETECTIONS_FROM_CAMERA), &request)
            .await?;
        debug!("{} returned {} detections for {}", self.name, response.detections.len(), camera_name);
        Ok(response.detections)
    }
}
