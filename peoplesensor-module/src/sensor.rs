//! People detection sensor
//!
//! Wraps a vision service and reports `{"person_detected": 0|1}`: 1 when the
//! service returns any `person` detection (case-insensitive) scored strictly
//! above the configured confidence.

use crate::config::PeopleSensorConfig;
use async_trait::async_trait;
use parking_lot::RwLock;
use peoplesensor_core::{
    person_detected, Api, ComponentConfig, Dependencies, Error, Model, ModelFamily, Readings,
    Resource, ResourceCreatorRegistration, ResourceName, Result, Sensor, Struct, VisionService,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

pub const READING_KEY: &str = "person_detected";

/// Lifecycle of a sensor instance. There is no unconfigured state: a sensor
/// only exists once its first configuration has been bound.
enum SensorState {
    Configured {
        config: PeopleSensorConfig,
        vision: Arc<dyn VisionService>,
    },
    Closed,
}

pub struct PeopleSensor {
    name: ResourceName,
    state: RwLock<SensorState>,
}

impl PeopleSensor {
    /// `walicki:sensor:peopleSensorJW`
    pub fn model() -> Model {
        Model::new(ModelFamily::new("walicki", "sensor"), "peopleSensorJW")
    }

    /// Constructor and validator for the module registry.
    pub fn registration() -> ResourceCreatorRegistration {
        ResourceCreatorRegistration::new(
            |config, dependencies| {
                let sensor: Arc<dyn Sensor> = Arc::new(PeopleSensor::new(config, dependencies)?);
                Ok(sensor)
            },
            PeopleSensor::validate_config,
        )
    }

    pub fn validate_config(config: &ComponentConfig) -> Result<Vec<String>> {
        PeopleSensorConfig::validate_attributes(&config.attributes)
    }

    /// Build a sensor named after `config` and bind its first configuration.
    pub fn new(config: &ComponentConfig, dependencies: &Dependencies) -> Result<Self> {
        let state = Self::bind(config, dependencies)?;
        let name = ResourceName::new(Api::sensor(), &config.name);
        debug!("Created {}", name);
        Ok(Self {
            name,
            state: RwLock::new(state),
        })
    }

    /// Current configuration, `None` once closed.
    pub fn settings(&self) -> Option<PeopleSensorConfig> {
        match &*self.state.read() {
            SensorState::Configured { config, .. } => Some(config.clone()),
            SensorState::Closed => None,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(*self.state.read(), SensorState::Closed)
    }

    fn bind(config: &ComponentConfig, dependencies: &Dependencies) -> Result<SensorState> {
        let settings = PeopleSensorConfig::from_attributes(&config.attributes)?;
        let vision = dependencies.vision(&settings.vision_name())?;
        Ok(SensorState::Configured {
            config: settings,
            vision,
        })
    }

    fn snapshot(&self) -> Result<(PeopleSensorConfig, Arc<dyn VisionService>)> {
        match &*self.state.read() {
            SensorState::Configured { config, vision } => Ok((config.clone(), vision.clone())),
            SensorState::Closed => Err(Error::ResourceClosed(self.name.to_string())),
        }
    }
}

#[async_trait]
impl Resource for PeopleSensor {
    fn name(&self) -> ResourceName {
        self.name.clone()
    }

    /// Replace every field with the new configuration. On failure the previous
    /// configuration stays bound.
    fn reconfigure(&self, config: &ComponentConfig, dependencies: &Dependencies) -> Result<()> {
        let next = Self::bind(config, dependencies)?;
        {
            let mut state = self.state.write();
            if matches!(*state, SensorState::Closed) {
                return Err(Error::ResourceClosed(self.name.to_string()));
            }
            *state = next;
        }
        info!("{} reconfigured", self.name.name);
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        *self.state.write() = SensorState::Closed;
        info!("{} is closed.", self.name.name);
        Ok(())
    }
}

#[async_trait]
impl Sensor for PeopleSensor {
    async fn get_readings(&self, _extra: Option<Struct>) -> Result<Readings> {
        let (config, vision) = self.snapshot()?;
        let detections = vision
            .get_detections_from_camera(&config.camera_source, None)
            .await?;
        let detected = person_detected(&detections, config.confidence);
        debug!(
            "{}: {} detections from {}, person_detected={}",
            self.name.name,
            detections.len(),
            config.camera_source,
            detected
        );

        let mut readings = Readings::new();
        readings.insert(READING_KEY.to_string(), json!(u8::from(detected)));
        Ok(readings)
    }
}
