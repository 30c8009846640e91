//! Connection to a robot (or module) serving the resource service

use crate::options::ClientOptions;
use crate::transport::Transport;
use peoplesensor_core::wire::{ResourceNamesResponse, API_PREFIX};
use peoplesensor_core::{Api, Error, ResourceName, Result};
use tracing::{debug, info};

pub struct RobotClient {
    transport: Transport,
    resource_names: Vec<ResourceName>,
}

impl RobotClient {
    /// Connect and fetch the resources the robot exposes.
    pub async fn at_address(address: &str, options: ClientOptions) -> Result<Self> {
        let transport = Transport::new(address, options)?;
        let mut robot = Self {
            transport,
            resource_names: Vec::new(),
        };
        robot.refresh().await?;
        info!(
            "Connected to {} ({} resources)",
            robot.transport.base_url(),
            robot.resource_names.len()
        );
        Ok(robot)
    }

    /// Resource names as of the last refresh.
    pub fn resource_names(&self) -> &[ResourceName] {
        &self.resource_names
    }

    pub async fn refresh(&mut self) -> Result<()> {
        let response: ResourceNamesResponse =
            self.transport.get(&format!("{}/resources", API_PREFIX)).await?;
        self.resource_names = response.resources;
        Ok(())
    }

    /// Look up `name` under `api` among the robot's resources.
    pub fn find(&self, api: &Api, name: &str) -> Result<ResourceName> {
        let wanted = ResourceName::new(api.clone(), name);
        if self.resource_names.contains(&wanted) {
            Ok(wanted)
        } else {
            Err(Error::ResourceNotFound(wanted.to_string()))
        }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub async fn close(self) -> Result<()> {
        debug!("Closing connection to {}", self.transport.base_url());
        Ok(())
    }
}
