//! Dependency mapping handed to resources on construction and reconfiguration

use crate::capability::{Sensor, VisionService};
use crate::error::{Error, Result};
use crate::resource::ResourceName;
use std::collections::HashMap;
use std::sync::Arc;

/// A live handle to a resource, typed by capability.
#[derive(Clone)]
pub enum ResourceHandle {
    Sensor(Arc<dyn Sensor>),
    Vision(Arc<dyn VisionService>),
}

/// Lookup from dependency name to live resource handle.
#[derive(Clone, Default)]
pub struct Dependencies {
    handles: HashMap<ResourceName, ResourceHandle>,
}

impl Dependencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: ResourceName, handle: ResourceHandle) {
        self.handles.insert(name, handle);
    }

    pub fn insert_vision(&mut self, vision: Arc<dyn VisionService>) {
        self.insert(vision.name(), ResourceHandle::Vision(vision));
    }

    pub fn insert_sensor(&mut self, sensor: Arc<dyn Sensor>) {
        self.insert(sensor.name(), ResourceHandle::Sensor(sensor));
    }

    /// Vision service registered under `name`.
    pub fn vision(&self, name: &ResourceName) -> Result<Arc<dyn VisionService>> {
        match self.handles.get(name) {
            Some(ResourceHandle::Vision(vision)) => Ok(vision.clone()),
            _ => Err(Error::DependencyNotFound(name.clone())),
        }
    }

    /// Sensor registered under `name`.
    pub fn sensor(&self, name: &ResourceName) -> Result<Arc<dyn Sensor>> {
        match self.handles.get(name) {
            Some(ResourceHandle::Sensor(sensor)) => Ok(sensor.clone()),
            _ => Err(Error::DependencyNotFound(name.clone())),
        }
    }

    pub fn handle(&self, name: &ResourceName) -> Option<ResourceHandle> {
        self.handles.get(name).cloned()
    }

    pub fn contains(&self, name: &ResourceName) -> bool {
        self.handles.contains_key(name)
    }

    pub fn names(&self) -> Vec<ResourceName> {
        let mut names: Vec<ResourceName> = self.handles.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl std::fmt::Debug for Dependencies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dependencies").field("names", &self.names()).finish()
    }
}
