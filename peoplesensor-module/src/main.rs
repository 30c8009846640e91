// People detection sensor module
// Registers the sensor model and serves it to the host until stopped

use clap::Parser;
use peoplesensor_core::{Api, Registry};
use peoplesensor_module::{Module, ModuleArgs, ParentResolver, PeopleSensor};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ModuleArgs::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut registry = Registry::new();
    registry.register_resource_creator(Api::sensor(), PeopleSensor::model(), PeopleSensor::registration())?;

    let module = Arc::new(Module::from_args(&args, registry, Arc::new(ParentResolver::new())));
    module.add_model_from_registry(Api::sensor(), PeopleSensor::model())?;
    module.start().await?;

    Ok(())
}
