//! Remote sensor component

use crate::robot::RobotClient;
use crate::transport::Transport;
use async_trait::async_trait;
use peoplesensor_core::wire::{
    resource_method_path, DoCommandRequest, DoCommandResponse, GetReadingsRequest,
    GetReadingsResponse, DO_COMMAND, GET_READINGS,
};
use peoplesensor_core::{Api, Readings, Resource, ResourceName, Result, Sensor, Struct};

#[derive(Clone)]
pub struct SensorClient {
    name: ResourceName,
    transport: Transport,
}

impl SensorClient {
    pub fn new(transport: Transport, name: &str) -> Self {
        Self {
            name: ResourceName::new(Api::sensor(), name),
            transport,
        }
    }

    /// Open the sensor `name`, failing if the robot does not expose it.
    pub fn from_robot(robot: &RobotClient, name: &str) -> Result<Self> {
        let name = robot.find(&Api::sensor(), name)?;
        Ok(Self {
            name,
            transport: robot.transport().clone(),
        })
    }
}

#[async_trait]
impl Resource for SensorClient {
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
impl Sensor for SensorClient {
    async fn get_readings(&self, extra: Option<Struct>) -> Result<Readings> {
        let response: GetReadingsResponse = self
            .transport
            .post(&resource_method_path(&self.name, GET_READINGS), &GetReadingsRequest { extra })
            .await?;
        Ok(response.readings)
    }
}
