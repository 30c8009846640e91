//! Module runtime: the resource table the host drives through the module service

use crate::resolver::DependencyResolver;
use crate::server;
use clap::Parser;
use parking_lot::RwLock;
use peoplesensor_core::wire::HandlerDefinition;
use peoplesensor_core::{
    Api, ComponentConfig, Error, Model, Readings, Registry, ResourceCreatorRegistration,
    ResourceName, Result, Sensor, Struct,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Process arguments supplied by the host.
#[derive(Parser, Debug, Clone)]
#[command(name = "peoplesensor-module")]
#[command(about = "People detection sensor module", long_about = None)]
#[command(version)]
pub struct ModuleArgs {
    /// Address the module service listens on
    #[arg(default_value = "127.0.0.1:8081")]
    pub address: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

struct LiveResource {
    model: Model,
    resource: Arc<dyn Sensor>,
}

pub struct Module {
    address: String,
    registry: Registry,
    models: RwLock<Vec<(Api, Model)>>,
    resolver: Arc<dyn DependencyResolver>,
    resources: RwLock<HashMap<ResourceName, LiveResource>>,
    parent_address: RwLock<Option<String>>,
}

impl Module {
    pub fn new(address: &str, registry: Registry, resolver: Arc<dyn DependencyResolver>) -> Self {
        Self {
            address: address.to_string(),
            registry,
            models: RwLock::new(Vec::new()),
            resolver,
            resources: RwLock::new(HashMap::new()),
            parent_address: RwLock::new(None),
        }
    }

    pub fn from_args(args: &ModuleArgs, registry: Registry, resolver: Arc<dyn DependencyResolver>) -> Self {
        Self::new(&args.address, registry, resolver)
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Serve `model` of `api`. The model must already be in the registry.
    pub fn add_model_from_registry(&self, api: Api, model: Model) -> Result<()> {
        self.registry.lookup(&api, &model)?;
        let mut models = self.models.write();
        if !models.contains(&(api.clone(), model.clone())) {
            info!("Serving model {} for {}", model, api);
            models.push((api, model));
        }
        Ok(())
    }

    /// Models served, grouped by API.
    pub fn handlers(&self) -> Vec<HandlerDefinition> {
        let mut handlers: Vec<HandlerDefinition> = Vec::new();
        for (api, model) in self.models.read().iter() {
            match handlers.iter_mut().find(|h| &h.api == api) {
                Some(handler) => handler.models.push(model.clone()),
                None => handlers.push(HandlerDefinition {
                    api: api.clone(),
                    models: vec![model.clone()],
                }),
            }
        }
        handlers
    }

    /// Record where the host serves its resources and report what this module serves.
    pub fn ready(&self, parent_address: &str) -> Result<Vec<HandlerDefinition>> {
        self.resolver.set_parent_address(parent_address)?;
        *self.parent_address.write() = Some(parent_address.to_string());
        info!("Module ready, parent at {}", parent_address);
        Ok(self.handlers())
    }

    pub fn parent_address(&self) -> Option<String> {
        self.parent_address.read().clone()
    }

    pub fn validate_config(&self, config: &ComponentConfig) -> Result<Vec<String>> {
        let registration = self.registration_for(config)?;
        let warnings = (registration.validator)(config)?;
        for warning in &warnings {
            warn!("{}: {}", config.name, warning);
        }
        Ok(warnings)
    }

    pub fn add_resource(&self, config: &ComponentConfig, dependencies: &[ResourceName]) -> Result<()> {
        let name = config.resource_name();
        if self.resources.read().contains_key(&name) {
            return Err(Error::ResourceExists(name.to_string()));
        }

        let resource = self.construct(config, dependencies)?;
        let mut resources = self.resources.write();
        if resources.contains_key(&name) {
            return Err(Error::ResourceExists(name.to_string()));
        }
        resources.insert(
            name.clone(),
            LiveResource {
                model: config.model.clone(),
                resource,
            },
        );
        info!("Added {} ({})", name, config.model);
        Ok(())
    }

    /// Reconfigure in place when the model is unchanged and the resource
    /// supports it; otherwise build a replacement and close the old instance.
    pub async fn reconfigure_resource(&self, config: &ComponentConfig, dependencies: &[ResourceName]) -> Result<()> {
        let name = config.resource_name();
        let (model, existing) = {
            let resources = self.resources.read();
            let live = resources
                .get(&name)
                .ok_or_else(|| Error::ResourceNotFound(name.to_string()))?;
            (live.model.clone(), live.resource.clone())
        };

        if model == config.model {
            self.validate_config(config)?;
            let deps = self.resolver.resolve(dependencies)?;
            match existing.reconfigure(config, &deps) {
                Ok(()) => {
                    info!("Reconfigured {}", name);
                    return Ok(());
                }
                Err(Error::Unimplemented(_)) => {
                    debug!("{} cannot reconfigure in place, rebuilding", name);
                }
                Err(e) => return Err(e),
            }
        }

        let replacement = self.construct(config, dependencies)?;
        let swapped = {
            let mut resources = self.resources.write();
            match resources.get_mut(&name) {
                Some(live) => {
                    *live = LiveResource {
                        model: config.model.clone(),
                        resource: replacement.clone(),
                    };
                    true
                }
                None => false,
            }
        };
        if !swapped {
            // Removed while the replacement was being built
            if let Err(e) = replacement.close().await {
                warn!("Closing orphaned {} failed: {}", name, e);
            }
            return Err(Error::ResourceNotFound(name.to_string()));
        }
        if let Err(e) = existing.close().await {
            warn!("Closing replaced {} failed: {}", name, e);
        }
        info!("Rebuilt {} ({})", name, config.model);
        Ok(())
    }

    pub async fn remove_resource(&self, name: &ResourceName) -> Result<()> {
        let live = self
            .resources
            .write()
            .remove(name)
            .ok_or_else(|| Error::ResourceNotFound(name.to_string()))?;
        live.resource.close().await?;
        info!("Removed {}", name);
        Ok(())
    }

    pub fn resource(&self, name: &ResourceName) -> Result<Arc<dyn Sensor>> {
        self.resources
            .read()
            .get(name)
            .map(|live| live.resource.clone())
            .ok_or_else(|| Error::ResourceNotFound(name.to_string()))
    }

    pub fn resource_names(&self) -> Vec<ResourceName> {
        let mut names: Vec<ResourceName> = self.resources.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub async fn get_readings(&self, name: &ResourceName, extra: Option<Struct>) -> Result<Readings> {
        self.resource(name)?.get_readings(extra).await
    }

    pub async fn do_command(&self, name: &ResourceName, command: Struct) -> Result<Struct> {
        self.resource(name)?.do_command(command).await
    }

    /// Close every live resource.
    pub async fn shutdown(&self) {
        let drained: Vec<(ResourceName, LiveResource)> = self.resources.write().drain().collect();
        for (name, live) in drained {
            if let Err(e) = live.resource.close().await {
                error!("Closing {} failed: {}", name, e);
            }
        }
        info!("Module shut down");
    }

    /// Serve the module and resource services until ctrl-c, then close every resource.
    pub async fn start(self: Arc<Self>) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.address).await?;
        info!("Module listening on {}", listener.local_addr()?);

        let app = server::router(self.clone());
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        self.shutdown().await;
        Ok(())
    }

    fn registration_for(&self, config: &ComponentConfig) -> Result<ResourceCreatorRegistration> {
        let served = self
            .models
            .read()
            .iter()
            .any(|(api, model)| api == &config.api && model == &config.model);
        if !served {
            return Err(Error::ModelNotRegistered {
                api: config.api.to_string(),
                model: config.model.to_string(),
            });
        }
        self.registry.lookup(&config.api, &config.model)
    }

    fn construct(&self, config: &ComponentConfig, dependencies: &[ResourceName]) -> Result<Arc<dyn Sensor>> {
        let registration = self.registration_for(config)?;
        (registration.validator)(config)?;
        let deps = self.resolver.resolve(dependencies)?;
        debug!("Constructing {} with {:?}", config.name, deps);
        (registration.constructor)(config, &deps)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
