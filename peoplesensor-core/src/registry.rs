//! Registry of resource constructors and config validators, keyed by API and model

use crate::capability::Sensor;
use crate::config::ComponentConfig;
use crate::dependencies::Dependencies;
use crate::error::{Error, Result};
use crate::resource::{Api, Model};
use std::collections::HashMap;
use std::sync::Arc;

pub type Constructor =
    Arc<dyn Fn(&ComponentConfig, &Dependencies) -> Result<Arc<dyn Sensor>> + Send + Sync>;

/// Returns warnings on success.
pub type Validator = Arc<dyn Fn(&ComponentConfig) -> Result<Vec<String>> + Send + Sync>;

/// Constructor and validator for one model.
#[derive(Clone)]
pub struct ResourceCreatorRegistration {
    pub constructor: Constructor,
    pub validator: Validator,
}

impl ResourceCreatorRegistration {
    pub fn new<C, V>(constructor: C, validator: V) -> Self
    where
        C: Fn(&ComponentConfig, &Dependencies) -> Result<Arc<dyn Sensor>> + Send + Sync + 'static,
        V: Fn(&ComponentConfig) -> Result<Vec<String>> + Send + Sync + 'static,
    {
        Self {
            constructor: Arc::new(constructor),
            validator: Arc::new(validator),
        }
    }
}

#[derive(Clone, Default)]
pub struct Registry {
    creators: HashMap<(Api, Model), ResourceCreatorRegistration>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_resource_creator(
        &mut self,
        api: Api,
        model: Model,
        registration: ResourceCreatorRegistration,
    ) -> Result<()> {
        let key = (api, model);
        if self.creators.contains_key(&key) {
            return Err(Error::DuplicateRegistration {
                api: key.0.to_string(),
                model: key.1.to_string(),
            });
        }
        self.creators.insert(key, registration);
        Ok(())
    }

    pub fn lookup(&self, api: &Api, model: &Model) -> Result<ResourceCreatorRegistration> {
        self.creators
            .get(&(api.clone(), model.clone()))
            .cloned()
            .ok_or_else(|| Error::ModelNotRegistered {
                api: api.to_string(),
                model: model.to_string(),
            })
    }

    /// Registered models of `api`, sorted.
    pub fn models_for(&self, api: &Api) -> Vec<Model> {
        let mut models: Vec<Model> = self
            .creators
            .keys()
            .filter(|(a, _)| a == api)
            .map(|(_, m)| m.clone())
            .collect();
        models.sort();
        models
    }
}
