//! HTTP surface of the module: module service for the host, resource service for clients

use crate::module::Module;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use peoplesensor_core::wire::{
    DoCommandRequest, DoCommandResponse, Empty, ErrorResponse, GetReadingsRequest,
    GetReadingsResponse, ReadyRequest, ReadyResponse, RemoveResourceRequest, ResourceNamesResponse,
    ResourceRequest, ValidateConfigRequest, ValidateConfigResponse, DO_COMMAND, GET_READINGS,
};
use peoplesensor_core::{Api, Error, ResourceName};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::warn;

/// Error reply in the `{"error": ..}` shape with the status from `Error::status_code`.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(Error::InvalidRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        warn!("Request failed ({}): {}", status, self.0);
        (status, Json(ErrorResponse { error: self.0.to_string() })).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Request body that reports malformed JSON through `ApiError`.
type JsonBody<T> = Result<Json<T>, JsonRejection>;

pub fn router(module: Arc<Module>) -> Router {
    Router::new()
        .route("/module/ready", post(ready_handler))
        .route("/module/validate", post(validate_handler))
        .route(
            "/module/resources",
            post(add_resource_handler)
                .put(reconfigure_resource_handler)
                .delete(remove_resource_handler),
        )
        .route("/api/v1/resources", get(resource_names_handler))
        .route(
            "/api/v1/:namespace/:resource_type/:subtype/:name/:method",
            post(resource_method_handler),
        )
        .with_state(module)
}

async fn ready_handler(
    State(module): State<Arc<Module>>,
    body: JsonBody<ReadyRequest>,
) -> ApiResult<ReadyResponse> {
    let Json(request) = body?;
    let handlers = module.ready(&request.parent_address)?;
    Ok(Json(ReadyResponse { ready: true, handlers }))
}

async fn validate_handler(
    State(module): State<Arc<Module>>,
    body: JsonBody<ValidateConfigRequest>,
) -> ApiResult<ValidateConfigResponse> {
    let Json(request) = body?;
    let warnings = module.validate_config(&request.config)?;
    Ok(Json(ValidateConfigResponse { warnings }))
}

async fn add_resource_handler(
    State(module): State<Arc<Module>>,
    body: JsonBody<ResourceRequest>,
) -> ApiResult<Empty> {
    let Json(request) = body?;
    module.add_resource(&request.config, &request.dependencies)?;
    Ok(Json(Empty {}))
}

async fn reconfigure_resource_handler(
    State(module): State<Arc<Module>>,
    body: JsonBody<ResourceRequest>,
) -> ApiResult<Empty> {
    let Json(request) = body?;
    module
        .reconfigure_resource(&request.config, &request.dependencies)
        .await?;
    Ok(Json(Empty {}))
}

async fn remove_resource_handler(
    State(module): State<Arc<Module>>,
    body: JsonBody<RemoveResourceRequest>,
) -> ApiResult<Empty> {
    let Json(request) = body?;
    module.remove_resource(&request.name).await?;
    Ok(Json(Empty {}))
}

async fn resource_names_handler(State(module): State<Arc<Module>>) -> Json<ResourceNamesResponse> {
    Json(ResourceNamesResponse {
        resources: module.resource_names(),
    })
}

async fn resource_method_handler(
    State(module): State<Arc<Module>>,
    Path((namespace, resource_type, subtype, name, method)): Path<(String, String, String, String, String)>,
    body: JsonBody<JsonValue>,
) -> Result<Response, ApiError> {
    let Json(body) = body?;
    let name = ResourceName::new(Api::new(&namespace, &resource_type, &subtype), &name);
    match method.as_str() {
        GET_READINGS => {
            let request: GetReadingsRequest = serde_json::from_value(body).map_err(Error::from)?;
            let readings = module.get_readings(&name, request.extra).await?;
            Ok(Json(GetReadingsResponse { readings }).into_response())
        }
        DO_COMMAND => {
            let request: DoCommandRequest = serde_json::from_value(body).map_err(Error::from)?;
            let result = module.do_command(&name, request.command).await?;
            Ok(Json(DoCommandResponse { result }).into_response())
        }
        other => Err(Error::Unimplemented(format!("{} on {}", other, name)).into()),
    }
}
