//! Capability traits implemented by local resources and remote clients

use crate::config::ComponentConfig;
use crate::dependencies::Dependencies;
use crate::detection::Detection;
use crate::error::{Error, Result};
use crate::resource::ResourceName;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Free-form key/value map used for `extra` arguments and `do_command`.
pub type Struct = Map<String, Value>;

/// Sensor readings keyed by reading name.
pub type Readings = BTreeMap<String, Value>;

/// Behaviour common to every resource.
#[async_trait]
pub trait Resource: Send + Sync {
    fn name(&self) -> ResourceName;

    /// Apply a new configuration in place. Resources that cannot do so return
    /// `Error::Unimplemented` and are rebuilt by the module instead.
    fn reconfigure(&self, _config: &ComponentConfig, _dependencies: &Dependencies) -> Result<()> {
        Err(Error::Unimplemented(format!("reconfigure for {}", self.name())))
    }

    async fn do_command(&self, _command: Struct) -> Result<Struct> {
        Err(Error::Unimplemented(format!("do_command for {}", self.name())))
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
pub trait Sensor: Resource {
    async fn get_readings(&self, extra: Option<Struct>) -> Result<Readings>;
}

#[async_trait]
pub trait VisionService: Resource {
    async fn get_detections_from_camera(
        &self,
        camera_name: &str,
        extra: Option<Struct>,
    ) -> Result<Vec<Detection>>;
}
