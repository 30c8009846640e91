// Client tests against a local fake robot

use axum::{
    http::{HeaderMap, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use peoplesensor_client::{ClientOptions, RobotClient, SensorClient, VisionClient};
use peoplesensor_core::wire::{GetDetectionsFromCameraRequest, API_KEY_HEADER, API_KEY_ID_HEADER};
use peoplesensor_core::{Api, Error, ResourceName, Resource, Sensor, Struct, VisionService};
use serde_json::{json, Value};

async fn resources() -> Json<Value> {
    Json(json!({
        "resources": [
            "rdk:component:sensor/sensor1",
            "rdk:service:vision/peopleDetector",
            "rdk:component:camera/camera-565webcam"
        ]
    }))
}

async fn detections(
    headers: HeaderMap,
    Json(request): Json<GetDetectionsFromCameraRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let key = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
    let key_id = headers.get(API_KEY_ID_HEADER).and_then(|v| v.to_str().ok());
    if key != Some("secret") || key_id != Some("key-id") {
        return Err((StatusCode::UNAUTHORIZED, Json(json!({"error": "bad credentials"}))));
    }
    if request.camera_name != "camera-565webcam" {
        return Err((StatusCode::NOT_FOUND, Json(json!({"error": "no such camera"}))));
    }
    Ok(Json(json!({
        "detections": [
            {"x_min": 1, "y_min": 2, "x_max": 30, "y_max": 40, "confidence": 0.91, "class_name": "Person"},
            {"confidence": 0.4, "class_name": "chair"}
        ]
    })))
}

async fn readings() -> Json<Value> {
    Json(json!({"readings": {"person_detected": 1}}))
}

async fn do_command() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_IMPLEMENTED, Json(json!({"error": "Unimplemented: do_command"})))
}

async fn spawn_fake_robot() -> String {
    let app = Router::new()
        .route("/api/v1/resources", get(resources))
        .route(
            "/api/v1/rdk/service/vision/peopleDetector/get_detections_from_camera",
            post(detections),
        )
        .route("/api/v1/rdk/component/sensor/sensor1/get_readings", post(readings))
        .route("/api/v1/rdk/component/sensor/sensor1/do_command", post(do_command));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr.to_string()
}

fn options() -> ClientOptions {
    ClientOptions::with_api_key("secret", "key-id")
}

#[tokio::test]
async fn test_connect_lists_resources() {
    let address = spawn_fake_robot().await;
    let robot = RobotClient::at_address(&address, options()).await.unwrap();

    let names = robot.resource_names();
    assert_eq!(names.len(), 3);
    assert!(names.contains(&ResourceName::new(Api::vision(), "peopleDetector")));
    robot.close().await.unwrap();
}

#[tokio::test]
async fn test_vision_client_detections() {
    let address = spawn_fake_robot().await;
    let robot = RobotClient::at_address(&address, options()).await.unwrap();
    let vision = VisionClient::from_robot(&robot, "peopleDetector").unwrap();

    let detections = vision
        .get_detections_from_camera("camera-565webcam", None)
        .await
        .unwrap();
    assert_eq!(detections.len(), 2);
    assert_eq!(detections[0].class_name, "Person");
    assert_eq!(detections[0].x_max, Some(30));
    assert_eq!(detections[1].x_min, None);
}

#[tokio::test]
async fn test_remote_error_carries_status_and_message() {
    let address = spawn_fake_robot().await;
    let robot = RobotClient::at_address(&address, options()).await.unwrap();
    let vision = VisionClient::from_robot(&robot, "peopleDetector").unwrap();

    match vision.get_detections_from_camera("other-camera", None).await {
        Err(Error::Remote { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "no such camera");
        }
        other => panic!("Expected Remote error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_credentials_are_forwarded() {
    let address = spawn_fake_robot().await;
    let robot = RobotClient::at_address(&address, ClientOptions::default()).await.unwrap();
    let vision = VisionClient::from_robot(&robot, "peopleDetector").unwrap();

    let result = vision.get_detections_from_camera("camera-565webcam", None).await;
    assert!(matches!(result, Err(Error::Remote { status: 401, .. })));
}

#[tokio::test]
async fn test_sensor_client_readings_and_command() {
    let address = spawn_fake_robot().await;
    let robot = RobotClient::at_address(&address, options()).await.unwrap();
    let sensor = SensorClient::from_robot(&robot, "sensor1").unwrap();

    let readings = sensor.get_readings(None).await.unwrap();
    assert_eq!(readings.get("person_detected"), Some(&json!(1)));

    let mut command = Struct::new();
    command.insert("hello".to_string(), json!("world"));
    let result = sensor.do_command(command).await;
    assert!(matches!(result, Err(Error::Remote { status: 501, .. })));
}

#[tokio::test]
async fn test_from_robot_unknown_name() {
    let address = spawn_fake_robot().await;
    let robot = RobotClient::at_address(&address, options()).await.unwrap();

    assert!(matches!(
        VisionClient::from_robot(&robot, "missing"),
        Err(Error::ResourceNotFound(_))
    ));
    // sensor1 exists, but not as a vision service
    assert!(VisionClient::from_robot(&robot, "sensor1").is_err());
}

#[tokio::test]
async fn test_connect_refused() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap().to_string();
    drop(listener);

    let result = RobotClient::at_address(&address, options()).await;
    assert!(matches!(result, Err(Error::Transport(_))));
}
