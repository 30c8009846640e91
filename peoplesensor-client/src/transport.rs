//! JSON-over-HTTP transport shared by all clients

use crate::options::{base_url, ClientOptions};
use peoplesensor_core::wire::{ErrorResponse, API_KEY_HEADER, API_KEY_ID_HEADER};
use peoplesensor_core::{Error, Result};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

#[derive(Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    options: ClientOptions,
}

impl Transport {
    pub fn new(address: &str, options: ClientOptions) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url(address),
            options,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        debug!("GET {}{}", self.base_url, path);
        self.send(self.http.get(self.url(path))).await
    }

    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R> {
        debug!("POST {}{}", self.base_url, path);
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<R: DeserializeOwned>(&self, request: RequestBuilder) -> Result<R> {
        let response = request
            .header(API_KEY_ID_HEADER, &self.options.api_key_id)
            .header(API_KEY_HEADER, &self.options.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(Error::Remote {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<R>().await?)
    }
}
