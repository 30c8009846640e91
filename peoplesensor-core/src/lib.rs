//! peoplesensor-core: resource model shared by the people sensor module and client
//!
//! Defines resource identity (APIs, models, names), the capability traits a
//! resource can implement, the dependency mapping handed to resources by the
//! host, the model registry, and the JSON bodies of the host protocol.

pub mod capability;
pub mod config;
pub mod dependencies;
pub mod detection;
pub mod error;
pub mod registry;
pub mod resource;
pub mod wire;

pub use capability::{Readings, Resource, Sensor, Struct, VisionService};
pub use config::ComponentConfig;
pub use dependencies::{Dependencies, ResourceHandle};
pub use detection::{person_detected, Detection};
pub use error::{Error, Result};
pub use registry::{Registry, ResourceCreatorRegistration};
pub use resource::{Api, Model, ModelFamily, ResourceName};
