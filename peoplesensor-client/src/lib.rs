//! peoplesensor-client: remote handles for robots, sensors and vision services
//!
//! The clients implement the capability traits from `peoplesensor-core`, so the
//! module can hand them to resources as dependencies and the demo binary can
//! drive them directly.

pub mod options;
pub mod robot;
pub mod sensor;
pub mod transport;
pub mod vision;

pub use options::{address_from_env, ClientOptions};
pub use robot::RobotClient;
pub use sensor::SensorClient;
pub use transport::Transport;
pub use vision::VisionClient;
