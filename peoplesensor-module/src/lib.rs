//! peoplesensor-module: module process hosting the people detection sensor
//!
//! The host drives the module through the module service (ready, validate,
//! add, reconfigure, remove); clients read the sensor through the resource
//! service. The sensor itself polls a vision service dependency.

pub mod config;
pub mod module;
pub mod resolver;
pub mod sensor;
pub mod server;

pub use config::PeopleSensorConfig;
pub use module::{Module, ModuleArgs};
pub use resolver::{DependencyResolver, ParentResolver};
pub use sensor::PeopleSensor;
