//! Turning declared dependency names into live handles

use parking_lot::RwLock;
use peoplesensor_client::{ClientOptions, SensorClient, Transport, VisionClient};
use peoplesensor_core::{Api, Dependencies, Error, ResourceName, Result};
use std::sync::Arc;
use tracing::{debug, warn};

pub trait DependencyResolver: Send + Sync {
    /// Called once the host reports where its resources are served.
    fn set_parent_address(&self, _address: &str) -> Result<()> {
        Ok(())
    }

    fn resolve(&self, names: &[ResourceName]) -> Result<Dependencies>;
}

/// Resolves dependencies to clients of the parent robot's resource service.
#[derive(Default)]
pub struct ParentResolver {
    transport: RwLock<Option<Transport>>,
}

impl ParentResolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DependencyResolver for ParentResolver {
    fn set_parent_address(&self, address: &str) -> Result<()> {
        let transport = Transport::new(address, ClientOptions::default())?;
        debug!("Parent resource service at {}", transport.base_url());
        *self.transport.write() = Some(transport);
        Ok(())
    }

    fn resolve(&self, names: &[ResourceName]) -> Result<Dependencies> {
        let transport = self
            .transport
            .read()
            .clone()
            .ok_or_else(|| Error::NotReady("parent address unknown".to_string()))?;

        let mut deps = Dependencies::new();
        for name in names {
            if name.api == Api::vision() {
                deps.insert_vision(Arc::new(VisionClient::new(transport.clone(), &name.name)));
            } else if name.api == Api::sensor() {
                deps.insert_sensor(Arc::new(SensorClient::new(transport.clone(), &name.name)));
            } else {
                warn!("Skipping dependency {}: unsupported api", name);
            }
        }
        Ok(deps)
    }
}
