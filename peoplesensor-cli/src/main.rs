// People sensor demonstration client
// Connects to a robot with credentials from the environment and exercises the
// sensor or polls the vision service directly

use clap::{Parser, Subcommand};
use peoplesensor_client::{address_from_env, ClientOptions, RobotClient, SensorClient, VisionClient};
use peoplesensor_core::{Resource, Sensor, Struct, VisionService};
use serde_json::json;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "peoplesensor-client")]
#[command(about = "Demonstration client for the people detection sensor", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the sensor once and send it a command (default)
    Readings {
        /// Sensor name
        #[arg(long, default_value = "sensor1")]
        sensor: String,
    },

    /// Poll the vision service forever and report whether a person is present
    Watch {
        /// Vision service name
        #[arg(long, default_value = "peopleDetector")]
        vision: String,

        /// Camera to request detections for
        #[arg(long, default_value = "camera-565webcam")]
        camera: String,

        /// Detections must score strictly above this
        #[arg(long, default_value_t = 0.7)]
        confidence: f64,

        /// Seconds between polls
        #[arg(long, default_value_t = 10)]
        interval_secs: u64,
    },
}

async fn connect() -> anyhow::Result<RobotClient> {
    let options = ClientOptions::from_env();
    let address = address_from_env();
    Ok(RobotClient::at_address(&address, options).await?)
}

fn print_resources(robot: &RobotClient) {
    let names: Vec<String> = robot.resource_names().iter().map(|n| n.to_string()).collect();
    println!("Resources:");
    println!("{:?}", names);
}

async fn readings(sensor_name: &str) -> anyhow::Result<()> {
    let robot = connect().await?;
    print_resources(&robot);

    let sensor = SensorClient::from_robot(&robot, sensor_name)?;
    let reading = sensor.get_readings(None).await?;
    println!("The reading is {}", serde_json::to_string(&reading)?);

    let mut command = Struct::new();
    command.insert("hello".to_string(), json!("world"));
    let response = sensor.do_command(command).await?;
    println!("The response is {}", serde_json::to_string(&response)?);

    robot.close().await?;
    Ok(())
}

/// Runs until the process is killed or a request fails.
async fn watch(vision_name: &str, camera: &str, confidence: f64, interval: Duration) -> anyhow::Result<()> {
    let robot = connect().await?;
    print_resources(&robot);

    let detector = VisionClient::from_robot(&robot, vision_name)?;

    loop {
        let detections = detector.get_detections_from_camera(camera, None).await?;
        println!("{}", serde_json::to_string(&detections)?);

        let mut found = false;
        for d in &detections {
            if d.is_person_above(confidence) {
                println!("This is a person!");
                found = true;
            }
        }
        if found {
            println!("1 - person_detected");
        } else {
            println!("0 - no_person_detected");
        }

        tokio::time::sleep(interval).await;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command.unwrap_or(Commands::Readings {
        sensor: "sensor1".to_string(),
    }) {
        Commands::Readings { sensor } => readings(&sensor).await,
        Commands::Watch {
            vision,
            camera,
            confidence,
            interval_secs,
        } => watch(&vision, &camera, confidence, Duration::from_secs(interval_secs)).await,
    }
}
